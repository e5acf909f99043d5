//! HTTP routes for the pricing API.
//!
//! Mounted under `/api/pricing` by [`crate::app`].

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::extract::{Json as JsonBody, Path};
use crate::AppState;

use super::calculators::normalize;
use super::requests::{CalculateQuoteRequest, NormalizeRequest, OfferQuoteRequest};
use super::responses::{NormalizeResponse, QuoteResponse};
use super::services;

/// Pricing API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(create_quote))
        .route("/offers/:slug/quote", post(create_offer_quote))
        .route("/quotes/:quote_id", get(show_quote))
        .route("/normalize", post(normalize_amount))
}

/// Quote a booking from explicit rates
async fn create_quote(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CalculateQuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let quote =
        services::quote_custom(&state.cache, &state.config.default_currency, &request).await?;
    Ok(Json(QuoteResponse::from(quote.as_ref())))
}

/// Quote a catalog offer
async fn create_offer_quote(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    JsonBody(request): JsonBody<OfferQuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let quote = services::quote_offer(
        &state.catalog,
        &state.cache,
        &slug,
        request.hours,
        request.additional_people_count,
    )
    .await?;
    Ok(Json(QuoteResponse::from(quote.as_ref())))
}

/// Look up a previously issued quote
async fn show_quote(
    State(state): State<AppState>,
    Path(quote_id): Path<Uuid>,
) -> Result<Json<QuoteResponse>> {
    let quote = services::get_quote(&state.cache, quote_id).await?;
    Ok(Json(QuoteResponse::from(quote.as_ref())))
}

async fn normalize_amount(
    JsonBody(request): JsonBody<NormalizeRequest>,
) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        value: normalize(request.value),
    })
}
