//! Error types for the Rewards API.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl turns
//! the error into a status code and a JSON body:
//!
//! ```json
//! { "code": "NOT_FOUND", "message": "No receipt found for id: 3f2a…" }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rewards_core::ValidationError;
use rewards_store::StoreError;
use serde::Serialize;

/// Message returned when a submission body cannot be decoded.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid JSON payload";

/// Rewards API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not JSON or does not have the receipt shape.
    #[error("Invalid JSON payload")]
    InvalidPayload(#[source] serde_json::Error),

    /// Strict-mode field check failed.
    #[error("Invalid receipt: {0}")]
    Validation(#[from] ValidationError),

    /// Unknown receipt id.
    #[error(transparent)]
    NotFound(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidPayload(_) => "INVALID_PAYLOAD",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
