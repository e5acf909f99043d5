//! Health check handler

use axum::{extract::State, Json};

use crate::pricing::responses::HealthResponse;
use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        offers: state.catalog.len(),
        cache: state.cache.stats(),
    })
}
