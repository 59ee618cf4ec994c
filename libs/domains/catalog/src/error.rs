use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use query_engine::{error_report, EntityKind, ValidationError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Client-caused; carries every field problem so one response can
    /// report the full list
    #[error("invalid query parameters: {}", error_report(.0))]
    Validation(Vec<ValidationError>),

    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("Database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<Vec<ValidationError>> for CatalogError {
    fn from(errors: Vec<ValidationError>) -> Self {
        CatalogError::Validation(errors)
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

/// Convert CatalogError to AppError for standardized envelope responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(errors) => AppError::BadRequest(error_report(&errors)),
            CatalogError::NotFound { kind, id } => {
                AppError::NotFound(format!("{kind} {id} not found"))
            }
            CatalogError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
