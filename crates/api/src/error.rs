//! API error handling
//!
//! Consistent JSON error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u64>,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or out-of-range input
    InvalidInput(String),
    /// Resource not found
    NotFound(String),
    /// Redemption exceeds the user's balance
    InsufficientPoints { required: i64, available: i64 },
    /// Reward has no stock left
    OutOfStock,
    /// Ledger store failure; safe to retry
    StoreUnavailable(String),
}

impl From<common::Error> for ApiError {
    fn from(err: common::Error) -> Self {
        match err {
            common::Error::InvalidInput(msg) => ApiError::InvalidInput(msg),
            common::Error::NotFound(msg) => ApiError::NotFound(msg),
            common::Error::InsufficientPoints {
                required,
                available,
            } => ApiError::InsufficientPoints {
                required,
                available,
            },
            common::Error::OutOfStock => ApiError::OutOfStock,
            common::Error::StoreUnavailable(msg) => ApiError::StoreUnavailable(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::InvalidInput(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    code: Some("invalid_input".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: msg,
                    code: Some("not_found".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::InsufficientPoints {
                required,
                available,
            } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: format!("Insufficient points: need {}, have {}", required, available),
                    code: Some("insufficient_points".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::OutOfStock => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Reward is out of stock".to_string(),
                    code: Some("out_of_stock".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::StoreUnavailable(msg) => {
                error!("Ledger store unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse {
                        error: "Ledger store unavailable".to_string(),
                        code: Some("store_unavailable".to_string()),
                        retry_after_secs: Some(5),
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
