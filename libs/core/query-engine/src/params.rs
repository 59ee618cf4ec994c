//! ParamParser: raw string parameters to typed, validated values.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ValidationError;
use crate::schema::{FieldSchema, FieldType};

/// Query parameters exactly as the transport layer delivered them.
pub type RawParams = HashMap<String, String>;

/// A parameter value after type coercion.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(n) => Some(*n),
            ParamValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Boolean(b)
    }
}

/// Typed values keyed by schema field name, in schema declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedParams(BTreeMap<&'static str, ParamValue>);

impl TypedParams {
    pub fn get(&self, field: &str) -> Option<&ParamValue> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(ParamValue::as_text)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(ParamValue::as_i64)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(ParamValue::as_f64)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(ParamValue::as_bool)
    }

    pub(crate) fn insert(&mut self, field: &'static str, value: ParamValue) {
        self.0.insert(field, value);
    }
}

/// Coerce one raw value against its schema row.
///
/// Returns the typed value, or the error to report for this field.
pub(crate) fn coerce(field: &FieldSchema, raw: &str) -> Result<ParamValue, ValidationError> {
    let value = match field.ty {
        FieldType::Text => ParamValue::Text(raw.to_string()),
        FieldType::Integer => match raw.trim().parse::<i64>() {
            Ok(n) => ParamValue::Integer(n),
            Err(_) => return Err(ValidationError::invalid_type(field.name, "an integer")),
        },
        FieldType::Float => match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => ParamValue::Float(n),
            _ => return Err(ValidationError::invalid_type(field.name, "a number")),
        },
        FieldType::Boolean => {
            if raw.eq_ignore_ascii_case("true") {
                ParamValue::Boolean(true)
            } else if raw.eq_ignore_ascii_case("false") {
                ParamValue::Boolean(false)
            } else {
                return Err(ValidationError::invalid_type(
                    field.name,
                    "'true' or 'false'",
                ));
            }
        }
        FieldType::Enum(allowed) => {
            let trimmed = raw.trim();
            match allowed.iter().find(|v| trimmed.eq_ignore_ascii_case(v)) {
                Some(canonical) => ParamValue::Text((*canonical).to_string()),
                None => return Err(ValidationError::invalid_enum(field.name, allowed)),
            }
        }
    };

    if let Some(n) = value.as_f64() {
        if let Some(min) = field.min {
            if n < min {
                return Err(ValidationError::invalid_range(
                    field.name,
                    format!("'{}' must be at least {}", field.name, min),
                ));
            }
        }
        if let Some(max) = field.max {
            if n > max {
                return Err(ValidationError::invalid_range(
                    field.name,
                    format!("'{}' must be at most {}", field.name, max),
                ));
            }
        }
    }

    Ok(value)
}

/// Parse every declared field of `schema` out of `raw`.
///
/// Collects all field-level problems in one pass rather than stopping at
/// the first. The required-field check runs after coercion of present
/// fields, so a malformed present value reports `invalid_type`, never
/// `missing`. Unknown parameters are ignored for forward compatibility.
pub fn parse(
    schema: &'static [FieldSchema],
    raw: &RawParams,
) -> (TypedParams, Vec<ValidationError>) {
    let mut typed = TypedParams::default();
    let mut errors = Vec::new();

    for field in schema {
        match raw.get(field.name) {
            Some(value) => match coerce(field, value) {
                Ok(value) => typed.insert(field.name, value),
                Err(e) => errors.push(e),
            },
            None => {
                if field.required {
                    errors.push(ValidationError::missing(field.name));
                }
            }
        }
    }

    (typed, errors)
}
