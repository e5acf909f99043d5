//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },

    #[error("{message}")]
    InvalidPath { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRequest { status, .. } | AppError::InvalidPath { status, .. } => {
                *status
            }
            AppError::Pricing(e) => match e {
                PricingError::UnknownOffer { .. } | PricingError::QuoteNotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                PricingError::PartyTooLarge { .. }
                | PricingError::InvalidRate { .. }
                | PricingError::InvalidCurrency { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::NotFound => PricingErrorResponse {
                error_type: "not_found".to_string(),
                message: self.to_string(),
                details: None,
            },
            AppError::InvalidRequest { message, .. } => PricingErrorResponse {
                error_type: "invalid_request".to_string(),
                message: message.clone(),
                details: None,
            },
            AppError::InvalidPath { message, .. } => PricingErrorResponse {
                error_type: "invalid_path".to_string(),
                message: message.clone(),
                details: None,
            },
            AppError::Pricing(e) => {
                tracing::debug!("Pricing request rejected: {}", e);
                PricingErrorResponse {
                    error_type: e.error_type().to_string(),
                    message: e.to_string(),
                    details: details(e),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Machine-readable context for errors the booking form can act on
fn details(err: &PricingError) -> Option<serde_json::Value> {
    match err {
        PricingError::PartyTooLarge { max, requested, .. } => Some(serde_json::json!({
            "max_additional_people": max,
            "requested": requested,
        })),
        PricingError::InvalidRate { field, .. } => Some(serde_json::json!({ "field": field })),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
