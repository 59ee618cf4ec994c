//! Application error type and fallback handlers.
//!
//! Every error leaving the API is rendered as the canonical envelope
//! `{status: "error", statusCode, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use query_engine::ErrorBody;
use thiserror::Error;

/// Application error type that converts to enveloped HTTP responses.
///
/// Domain errors convert into this at the handler boundary; the variant
/// decides the status code and what the client is allowed to see.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorBody::new(400, msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorBody::not_found(msg))
            }
            AppError::InternalServerError(msg) => {
                // detail goes to the logs, the client gets a generic message
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, ErrorBody::new(503, msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    let body = ErrorBody::not_found("The requested resource was not found");
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = ErrorBody::new(405, "The HTTP method is not allowed for this resource");
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}
