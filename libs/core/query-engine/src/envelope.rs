//! Canonical success and error response envelopes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{error_report, ValidationError};
use crate::pagination::Pagination;

/// Success envelope: `{message, data, pagination?}`.
///
/// The pagination block appears only on list responses; single-record
/// responses carry just the message and data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope for a single-record response.
    pub fn item(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
            pagination: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Envelope for a list response. An empty record set is a normal
    /// success, never an error; the pagination block then reports zero
    /// items and zero pages.
    pub fn page(message: impl Into<String>, records: Vec<T>, pagination: Pagination) -> Self {
        Self {
            message: message.into(),
            data: records,
            pagination: Some(pagination),
        }
    }
}

/// Error envelope: `{status: "error", statusCode, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always the literal "error"
    #[schema(example = "error")]
    pub status: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            status_code,
            message: message.into(),
        }
    }

    /// 400 body carrying the complete multi-field validation report.
    pub fn validation(errors: &[ValidationError]) -> Self {
        Self::new(400, error_report(errors))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    /// 500 body with a fixed message; upstream detail is for logs only.
    pub fn internal() -> Self {
        Self::new(500, "Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{Pagination, PaginationClause};

    #[test]
    fn single_item_envelope_omits_pagination() {
        let response = ApiResponse::item("Pet retrieved successfully", "rex");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["message"], "Pet retrieved successfully");
        assert_eq!(json["data"], "rex");
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn empty_list_is_success_with_zeroed_pagination() {
        let pagination = Pagination::finalize(PaginationClause::default(), 0);
        let response = ApiResponse::page("Pets retrieved successfully", Vec::<String>::new(), pagination);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["pagination"]["totalItems"], 0);
        assert_eq!(json["pagination"]["totalPages"], 0);
    }

    #[test]
    fn error_body_wire_format_matches_contract() {
        let body = ErrorBody::validation(&[ValidationError::missing("city")]);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["message"], "city: 'city' is required");
    }

    #[test]
    fn internal_error_never_leaks_detail() {
        let body = ErrorBody::internal();
        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, "Internal server error");
    }
}
