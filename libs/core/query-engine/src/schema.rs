//! Declarative per-entity field schemas.
//!
//! Validation rules live in these tables, not in per-route branching code.
//! Adding a filterable field to an entity is a data change here plus
//! whatever the storage collaborator needs; the parser and builder pick it
//! up automatically.

use serde::Serialize;
use strum::Display;
use utoipa::ToSchema;

/// The three catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Pet,
    Clinic,
    Article,
}

/// Declared type of a query parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    /// Text restricted to a closed set of values
    Enum(&'static [&'static str]),
}

/// What the resolved value of a field feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Becomes an equality predicate in the FilterSpec
    Predicate,
    /// Consumed by the pagination resolver (page, limit)
    Pagination,
    /// Consumed by the geo-proximity resolver (lat, lng, radius)
    Geo,
    /// Consumed by the keyword clause (substring search)
    Keyword,
}

/// One row of an entity's parameter schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub ty: FieldType,
    pub role: FieldRole,
    pub required: bool,
    /// Raw-form default, coerced exactly like client input
    pub default: Option<&'static str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldSchema {
    pub const fn new(name: &'static str, ty: FieldType, role: FieldRole) -> Self {
        Self {
            name,
            ty,
            role,
            required: false,
            default: None,
            min: None,
            max: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn bounded(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Species accepted for pet `type` and article `petType`.
pub const SPECIES: &[&str] = &["dog", "cat"];

// page feeds a u32 clause field; values past u32::MAX are rejected here so
// the resolver never truncates
const PAGE: FieldSchema =
    FieldSchema::new("page", FieldType::Integer, FieldRole::Pagination)
        .bounded(1.0, u32::MAX as f64);
const LIMIT: FieldSchema =
    FieldSchema::new("limit", FieldType::Integer, FieldRole::Pagination).min(1.0);

/// Pet listing parameters: `city` is mandatory, adopted pets are hidden by
/// default.
pub static PET_FIELDS: &[FieldSchema] = &[
    FieldSchema::new("city", FieldType::Text, FieldRole::Predicate).required(),
    FieldSchema::new("type", FieldType::Enum(SPECIES), FieldRole::Predicate),
    FieldSchema::new("isAdopted", FieldType::Boolean, FieldRole::Predicate).with_default("false"),
    PAGE,
    LIMIT,
];

/// Clinic listing parameters. The open-emergency mode pair (`isOpenNow`,
/// `isEmergency`) is enforced by the builder, not the `required` flag, since
/// the default listing mode needs neither.
pub static CLINIC_FIELDS: &[FieldSchema] = &[
    FieldSchema::new("isOpenNow", FieldType::Boolean, FieldRole::Predicate),
    FieldSchema::new("isEmergency", FieldType::Boolean, FieldRole::Predicate),
    FieldSchema::new("city", FieldType::Text, FieldRole::Predicate),
    FieldSchema::new("lat", FieldType::Float, FieldRole::Geo).bounded(-90.0, 90.0),
    FieldSchema::new("lng", FieldType::Float, FieldRole::Geo).bounded(-180.0, 180.0),
    FieldSchema::new("radius", FieldType::Float, FieldRole::Geo),
    PAGE,
    LIMIT,
];

/// Article listing parameters: `petType` is mandatory.
pub static ARTICLE_FIELDS: &[FieldSchema] = &[
    FieldSchema::new("petType", FieldType::Enum(SPECIES), FieldRole::Predicate).required(),
    FieldSchema::new("category", FieldType::Text, FieldRole::Predicate),
    FieldSchema::new("keyword", FieldType::Text, FieldRole::Keyword),
    PAGE,
    LIMIT,
];

/// The schema table for one entity kind.
pub fn for_kind(kind: EntityKind) -> &'static [FieldSchema] {
    match kind {
        EntityKind::Pet => PET_FIELDS,
        EntityKind::Clinic => CLINIC_FIELDS,
        EntityKind::Article => ARTICLE_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_declares_pagination_fields() {
        for kind in [EntityKind::Pet, EntityKind::Clinic, EntityKind::Article] {
            let fields = for_kind(kind);
            assert!(fields.iter().any(|f| f.name == "page"));
            assert!(fields.iter().any(|f| f.name == "limit"));
        }
    }

    #[test]
    fn pet_city_is_required_and_adoption_defaults_hidden() {
        let city = PET_FIELDS.iter().find(|f| f.name == "city").unwrap();
        assert!(city.required);

        let adopted = PET_FIELDS.iter().find(|f| f.name == "isAdopted").unwrap();
        assert_eq!(adopted.default, Some("false"));
    }

    #[test]
    fn clinic_coordinates_carry_wgs84_bounds() {
        let lat = CLINIC_FIELDS.iter().find(|f| f.name == "lat").unwrap();
        assert_eq!((lat.min, lat.max), (Some(-90.0), Some(90.0)));

        let lng = CLINIC_FIELDS.iter().find(|f| f.name == "lng").unwrap();
        assert_eq!((lng.min, lng.max), (Some(-180.0), Some(180.0)));
    }

    #[test]
    fn entity_kind_displays_snake_case() {
        assert_eq!(EntityKind::Pet.to_string(), "pet");
        assert_eq!(EntityKind::Article.to_string(), "article");
    }
}
