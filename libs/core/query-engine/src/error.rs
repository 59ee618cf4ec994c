use serde::Serialize;
use strum::Display;
use thiserror::Error;
use utoipa::ToSchema;

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationReason {
    /// A required field (or the counterpart of a paired field) is absent
    Missing,
    /// Value is not in the field's declared enum set
    InvalidEnum,
    /// Value could not be coerced to the field's declared type
    InvalidType,
    /// Value is the right type but outside the allowed range
    InvalidRange,
    /// Value conflicts with another supplied field
    Conflicting,
}

/// A single field-attributable validation failure.
///
/// Parsing and building never stop at the first problem; callers receive the
/// full ordered list so a response can report every bad field at once.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, ToSchema)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        reason: ValidationReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            reason,
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("'{field}' is required");
        Self::new(field, ValidationReason::Missing, message)
    }

    pub fn invalid_type(field: impl Into<String>, expected: &str) -> Self {
        let field = field.into();
        let message = format!("'{field}' must be {expected}");
        Self::new(field, ValidationReason::InvalidType, message)
    }

    pub fn invalid_enum(field: impl Into<String>, allowed: &[&str]) -> Self {
        let field = field.into();
        let message = format!("'{field}' must be one of: {}", allowed.join(", "));
        Self::new(field, ValidationReason::InvalidEnum, message)
    }

    pub fn invalid_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationReason::InvalidRange, message)
    }
}

/// Join a list of field errors into one human-readable report.
pub fn error_report(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_serializes_snake_case() {
        let json = serde_json::to_string(&ValidationReason::InvalidEnum).unwrap();
        assert_eq!(json, "\"invalid_enum\"");
        assert_eq!(ValidationReason::InvalidType.to_string(), "invalid_type");
    }

    #[test]
    fn report_joins_all_errors_in_order() {
        let errors = vec![
            ValidationError::missing("city"),
            ValidationError::invalid_enum("type", &["dog", "cat"]),
        ];
        let report = error_report(&errors);
        assert_eq!(
            report,
            "city: 'city' is required; type: 'type' must be one of: dog, cat"
        );
    }
}
