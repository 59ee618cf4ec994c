//! FilterSpecBuilder: validated parameters to a normalized FilterSpec.

use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::geo::{self, GeoClause};
use crate::pagination::{self, PaginationClause};
use crate::params::{self, coerce, ParamValue, RawParams, TypedParams};
use crate::schema::{self, EntityKind, FieldRole, FieldSchema};

/// One equality predicate: field must equal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    pub field: &'static str,
    pub value: ParamValue,
}

/// Case-insensitive substring search over an article's title and summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordClause {
    pub needle: String,
}

/// Normalized, storage-agnostic description of one catalog query.
///
/// Exactly one entity kind; predicates reference only fields declared in
/// that kind's schema; pagination is always present and resolved. Built
/// fresh per request and immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSpec {
    pub kind: EntityKind,
    pub predicates: Vec<Predicate>,
    pub geo: Option<GeoClause>,
    pub keyword: Option<KeywordClause>,
    pub pagination: PaginationClause,
}

impl FilterSpec {
    /// Look up the predicate value for a field, if one was resolved.
    pub fn predicate(&self, field: &str) -> Option<&ParamValue> {
        self.predicates
            .iter()
            .find(|p| p.field == field)
            .map(|p| &p.value)
    }

    pub fn has_predicate(&self, field: &str) -> bool {
        self.predicate(field).is_some()
    }
}

/// Resolve raw query parameters into a [`FilterSpec`] for `kind`.
///
/// Runs the parser, the geo and pagination resolvers, and the builder in
/// one pass, accumulating every field-level problem; the error branch is the
/// complete, ordered report. Pure and deterministic: identical input always
/// yields an identical spec.
pub fn resolve(kind: EntityKind, raw: &RawParams) -> Result<FilterSpec, Vec<ValidationError>> {
    let fields = schema::for_kind(kind);
    let (typed, mut errors) = params::parse(fields, raw);

    let geo = match kind {
        EntityKind::Clinic => geo::resolve(raw, &typed, &mut errors),
        _ => None,
    };

    if kind == EntityKind::Clinic {
        check_emergency_mode(raw, &typed, &mut errors);
    }

    let pagination = pagination::resolve(&typed);
    let predicates = build_predicates(fields, &typed, geo.is_some());
    let keyword = build_keyword(&typed);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(FilterSpec {
        kind,
        predicates,
        geo,
        keyword,
        pagination,
    })
}

/// Assemble predicates in schema order, applying defaults.
///
/// Application order per field: explicit value, then schema default, then
/// absence (no predicate at all). For clinics with a geo clause the `city`
/// predicate is dropped: city and proximity are mutually exclusive narrowing
/// filters and geo takes documented precedence, rather than AND-ing both and
/// risking an accidentally empty result set.
fn build_predicates(
    fields: &'static [FieldSchema],
    typed: &TypedParams,
    geo_active: bool,
) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    for field in fields {
        if field.role != FieldRole::Predicate {
            continue;
        }

        if geo_active && field.name == "city" && typed.contains("city") {
            debug!("city filter dropped: geo proximity takes precedence");
            continue;
        }

        let value = match typed.get(field.name) {
            Some(value) => Some(value.clone()),
            // schema defaults coerce exactly like client input
            None => field.default.and_then(|d| coerce(field, d).ok()),
        };

        if let Some(value) = value {
            predicates.push(Predicate {
                field: field.name,
                value,
            });
        }
    }

    predicates
}

/// The open-emergency clinic mode is selected by supplying BOTH mode
/// booleans; it requires both to be true. Supplying only one is `missing`
/// on the absent one. Presence is judged on the raw parameters so a
/// malformed boolean (already `invalid_type`) is not also called missing.
fn check_emergency_mode(raw: &RawParams, typed: &TypedParams, errors: &mut Vec<ValidationError>) {
    let open_supplied = raw.contains_key("isOpenNow");
    let emergency_supplied = raw.contains_key("isEmergency");

    if !open_supplied && !emergency_supplied {
        return; // default listing mode
    }

    if open_supplied != emergency_supplied {
        let absent = if open_supplied { "isEmergency" } else { "isOpenNow" };
        errors.push(ValidationError::missing(absent));
        return;
    }

    for field in ["isOpenNow", "isEmergency"] {
        if typed.get_bool(field) == Some(false) {
            errors.push(ValidationError::invalid_range(
                field,
                format!("'{field}' must be true for the open-emergency query"),
            ));
        }
    }
}

/// Keyword is a contains-match over title and summary; empty or
/// whitespace-only input is treated as absent.
fn build_keyword(typed: &TypedParams) -> Option<KeywordClause> {
    let needle = typed.get_text("keyword")?.trim();
    if needle.is_empty() {
        return None;
    }

    Some(KeywordClause {
        needle: needle.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationReason;
    use crate::geo::GeoOrdering;

    fn raw(pairs: &[(&str, &str)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn pet_listing_hides_adopted_by_default() {
        let spec = resolve(EntityKind::Pet, &raw(&[("city", "Nablus")])).unwrap();

        assert_eq!(spec.kind, EntityKind::Pet);
        assert_eq!(
            spec.predicate("city"),
            Some(&ParamValue::Text("Nablus".into()))
        );
        assert_eq!(spec.predicate("isAdopted"), Some(&ParamValue::Boolean(false)));
        assert_eq!(spec.pagination, PaginationClause { page: 1, limit: 10 });
        assert!(spec.geo.is_none());
        assert!(spec.keyword.is_none());
    }

    #[test]
    fn explicit_is_adopted_true_overrides_the_default() {
        let spec = resolve(
            EntityKind::Pet,
            &raw(&[("city", "Nablus"), ("isAdopted", "true")]),
        )
        .unwrap();

        assert_eq!(spec.predicate("isAdopted"), Some(&ParamValue::Boolean(true)));
    }

    #[test]
    fn missing_pet_city_is_rejected() {
        let errors = resolve(EntityKind::Pet, &raw(&[("type", "cat")])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "city");
        assert_eq!(errors[0].reason, ValidationReason::Missing);
    }

    #[test]
    fn open_emergency_geo_scenario_resolves_fully() {
        let spec = resolve(
            EntityKind::Clinic,
            &raw(&[
                ("isOpenNow", "true"),
                ("isEmergency", "true"),
                ("lat", "31.9"),
                ("lng", "35.2"),
                ("radius", "5"),
            ]),
        )
        .unwrap();

        let geo = spec.geo.unwrap();
        assert_eq!(geo.center.longitude, 35.2);
        assert_eq!(geo.center.latitude, 31.9);
        assert_eq!(geo.radius_km, 5.0);
        assert_eq!(geo.ordering, GeoOrdering::DistanceAscending);

        assert_eq!(spec.predicate("isOpenNow"), Some(&ParamValue::Boolean(true)));
        assert_eq!(spec.predicate("isEmergency"), Some(&ParamValue::Boolean(true)));
        assert!(!spec.has_predicate("city"));
    }

    #[test]
    fn geo_takes_precedence_over_city() {
        let spec = resolve(
            EntityKind::Clinic,
            &raw(&[("city", "Ramallah"), ("lat", "31.9"), ("lng", "35.2")]),
        )
        .unwrap();

        assert!(spec.geo.is_some());
        assert!(!spec.has_predicate("city"));
    }

    #[test]
    fn city_predicate_survives_without_geo() {
        let spec = resolve(EntityKind::Clinic, &raw(&[("city", "Ramallah")])).unwrap();
        assert_eq!(
            spec.predicate("city"),
            Some(&ParamValue::Text("Ramallah".into()))
        );
    }

    #[test]
    fn lone_mode_boolean_reports_the_missing_partner() {
        let errors = resolve(EntityKind::Clinic, &raw(&[("isOpenNow", "true")])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "isEmergency");
        assert_eq!(errors[0].reason, ValidationReason::Missing);
    }

    #[test]
    fn false_mode_boolean_is_rejected() {
        let errors = resolve(
            EntityKind::Clinic,
            &raw(&[("isOpenNow", "true"), ("isEmergency", "false")]),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "isEmergency");
        assert_eq!(errors[0].reason, ValidationReason::InvalidRange);
    }

    #[test]
    fn article_keyword_trims_and_drops_whitespace() {
        let spec = resolve(
            EntityKind::Article,
            &raw(&[("petType", "dog"), ("keyword", "  grooming ")]),
        )
        .unwrap();
        assert_eq!(spec.keyword.unwrap().needle, "grooming");

        let spec = resolve(
            EntityKind::Article,
            &raw(&[("petType", "dog"), ("keyword", "   ")]),
        )
        .unwrap();
        assert!(spec.keyword.is_none());
    }

    #[test]
    fn article_pet_type_outside_enum_is_rejected() {
        let errors = resolve(EntityKind::Article, &raw(&[("petType", "bird")])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "petType");
        assert_eq!(errors[0].reason, ValidationReason::InvalidEnum);
    }

    #[test]
    fn pagination_errors_join_the_field_report() {
        let errors = resolve(
            EntityKind::Pet,
            &raw(&[("type", "bird"), ("limit", "0")]),
        )
        .unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"city"));
        assert!(fields.contains(&"type"));
        assert!(fields.contains(&"limit"));
    }

    #[test]
    fn page_past_u32_max_is_a_range_error() {
        let errors = resolve(
            EntityKind::Pet,
            &raw(&[("city", "Nablus"), ("page", "4294967296")]),
        )
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "page");
        assert_eq!(errors[0].reason, ValidationReason::InvalidRange);

        // the largest representable page still resolves intact
        let spec = resolve(
            EntityKind::Pet,
            &raw(&[("city", "Nablus"), ("page", "4294967295")]),
        )
        .unwrap();
        assert_eq!(spec.pagination.page, u32::MAX);
    }

    #[test]
    fn resolution_is_deterministic() {
        let input = raw(&[
            ("city", "Hebron"),
            ("type", "dog"),
            ("page", "2"),
            ("limit", "30"),
        ]);

        let first = resolve(EntityKind::Pet, &input).unwrap();
        let second = resolve(EntityKind::Pet, &input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn page_and_limit_never_become_predicates() {
        let spec = resolve(
            EntityKind::Pet,
            &raw(&[("city", "Nablus"), ("page", "2"), ("limit", "50")]),
        )
        .unwrap();

        assert!(!spec.has_predicate("page"));
        assert!(!spec.has_predicate("limit"));
        assert_eq!(spec.pagination, PaginationClause { page: 2, limit: 50 });
    }
}
