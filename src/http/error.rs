//! Caller-facing error responses.

use crate::cart_actor::CartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Errors surfaced by the HTTP layer.
///
/// Expected failures carry a message for the caller; anything unexpected is
/// logged and answered generically so internal detail never leaks.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
    /// Closed orders are immutable; mutating one is a conflict, not a 404.
    Conflict(String),
    Unauthorized(String),
    Internal(String),
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::NotFound(msg) => ApiError::NotFound(msg),
            CartError::ValidationError(msg) => ApiError::Validation(msg),
            CartError::OrderClosed(msg) => ApiError::Conflict(msg),
            CartError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
