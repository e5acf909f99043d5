//! Offer catalog route handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::error::{AppError, Result};
use crate::extract::Path;
use crate::pricing::responses::OfferResponse;
use crate::AppState;

/// Offer catalog router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/offers", get(list))
        .route("/api/offers/:slug", get(detail))
}

/// All offers in catalog order
pub async fn list(State(state): State<AppState>) -> Json<Vec<OfferResponse>> {
    Json(state.catalog.list().iter().map(OfferResponse::from).collect())
}

/// Single offer by slug
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<OfferResponse>> {
    let offer = state.catalog.get(&slug).ok_or(AppError::NotFound)?;
    Ok(Json(OfferResponse::from(offer)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::models::OfferCatalog;
    use crate::{app, AppState};

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let config = Config::from_lookup(|_| None).unwrap();
        let state = AppState::new(config, OfferCatalog::default());

        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_list_offers() {
        let (status, body) = get_json("/api/offers").await;

        assert_eq!(status, StatusCode::OK);
        let offers = body.as_array().unwrap();
        assert_eq!(offers.len(), OfferCatalog::default().len());
        assert_eq!(offers[0]["slug"], "private-lesson");
        assert_eq!(offers[0]["price_per_hour"]["amount"], "80");
        assert_eq!(offers[0]["price_per_hour"]["currency"], "EUR");
    }

    #[tokio::test]
    async fn test_offer_detail() {
        let (status, body) = get_json("/api/offers/casting-clinic").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["max_additional_people"], 5);

        let (status, body) = get_json("/api/offers/night-fishing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_type"], "not_found");
    }
}
