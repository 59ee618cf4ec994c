//! Query-resolution engine for the catalog API.
//!
//! Translates raw, stringly-typed query parameters into a normalized,
//! storage-agnostic [`FilterSpec`]: typed equality predicates, an optional
//! geo-proximity clause, an optional keyword clause, and a resolved
//! pagination clause. Validation failures are collected per field and
//! returned as data, never thrown across component boundaries, so callers
//! can report every problem in one response.
//!
//! The engine is pure: no I/O, no clocks, no randomness. Identical raw
//! parameters always resolve to an identical `FilterSpec`. Executing the
//! spec against storage is the repository collaborator's job.
//!
//! ```
//! use query_engine::{resolve, EntityKind, ParamValue};
//! use std::collections::HashMap;
//!
//! let mut raw = HashMap::new();
//! raw.insert("city".to_string(), "Nablus".to_string());
//!
//! let spec = resolve(EntityKind::Pet, &raw).unwrap();
//! assert_eq!(spec.predicate("city"), Some(&ParamValue::Text("Nablus".into())));
//! // Adopted pets are hidden unless explicitly requested.
//! assert_eq!(spec.predicate("isAdopted"), Some(&ParamValue::Boolean(false)));
//! assert_eq!(spec.pagination.page, 1);
//! assert_eq!(spec.pagination.limit, 10);
//! ```

pub mod envelope;
pub mod error;
pub mod filter;
pub mod geo;
pub mod pagination;
pub mod params;
pub mod schema;

pub use envelope::{ApiResponse, ErrorBody};
pub use error::{error_report, ValidationError, ValidationReason};
pub use filter::{resolve, FilterSpec, KeywordClause, Predicate};
pub use geo::{GeoClause, GeoOrdering, GeoPoint, DEFAULT_RADIUS_KM};
pub use pagination::{Pagination, PaginationClause, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use params::{ParamValue, RawParams, TypedParams};
pub use schema::{EntityKind, FieldRole, FieldSchema, FieldType};
