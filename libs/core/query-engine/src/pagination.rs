//! PaginationResolver: clamped page/limit plus the response envelope fields.

use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::params::TypedParams;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Resolved pagination for one query. Always present in a FilterSpec and
/// always holds final values, never raw client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationClause {
    pub page: u32,
    pub limit: u32,
}

impl PaginationClause {
    /// Number of records the storage collaborator should skip.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PaginationClause {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Resolve the pagination clause from already type-checked parameters.
///
/// The schema rejects non-integer, zero, negative, and over-u32 values as
/// `invalid_range`/`invalid_type` before this runs; clamping applies only to
/// valid limits exceeding the policy maximum.
pub(crate) fn resolve(typed: &TypedParams) -> PaginationClause {
    let page = typed
        .get_i64("page")
        .and_then(|p| u32::try_from(p).ok())
        .unwrap_or(DEFAULT_PAGE);

    let limit = match typed.get_i64("limit") {
        Some(l) if l > i64::from(MAX_LIMIT) => {
            debug!(requested = l, clamped = MAX_LIMIT, "limit clamped to policy maximum");
            MAX_LIMIT
        }
        Some(l) => l as u32,
        None => DEFAULT_LIMIT,
    };

    PaginationClause { page, limit }
}

/// Pagination metadata rendered on list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub limit: u32,
}

impl Pagination {
    /// Finalize the envelope once the storage collaborator reports the
    /// total match count. `total_pages` is 0 for an empty result set, and a
    /// page past the end is still reported as the page that was asked for.
    pub fn finalize(clause: PaginationClause, total_items: u64) -> Self {
        let limit = u64::from(clause.limit);
        let total_pages = total_items.div_ceil(limit) as u32;

        Self {
            current_page: clause.page,
            total_pages,
            total_items,
            limit: clause.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::schema::{for_kind, EntityKind};
    use std::collections::HashMap;

    fn clause_for(pairs: &[(&str, &str)]) -> PaginationClause {
        let raw: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let (typed, errors) = params::parse(for_kind(EntityKind::Clinic), &raw);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        resolve(&typed)
    }

    #[test]
    fn defaults_apply_when_absent() {
        let clause = clause_for(&[]);
        assert_eq!(clause.page, DEFAULT_PAGE);
        assert_eq!(clause.limit, DEFAULT_LIMIT);
        assert_eq!(clause.skip(), 0);
    }

    #[test]
    fn valid_oversized_limit_clamps_to_policy_maximum() {
        let clause = clause_for(&[("limit", "500")]);
        assert_eq!(clause.limit, MAX_LIMIT);
    }

    #[test]
    fn page_beyond_u32_is_rejected_not_truncated() {
        let raw: HashMap<String, String> =
            [("page".to_string(), "4294967296".to_string())].into();
        let (typed, errors) = params::parse(for_kind(EntityKind::Clinic), &raw);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "page");
        assert_eq!(errors[0].reason, crate::error::ValidationReason::InvalidRange);

        // the rejected value never reaches the resolver; the clause keeps
        // its invariant
        assert!(typed.get("page").is_none());
        let clause = resolve(&typed);
        assert!(clause.page >= 1);
        assert_eq!(clause.skip(), 0);
    }

    #[test]
    fn skip_derives_from_page_and_limit() {
        let clause = clause_for(&[("page", "3"), ("limit", "25")]);
        assert_eq!(clause.skip(), 50);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        let clause = PaginationClause { page: 1, limit: 10 };

        assert_eq!(Pagination::finalize(clause, 0).total_pages, 0);
        assert_eq!(Pagination::finalize(clause, 1).total_pages, 1);
        assert_eq!(Pagination::finalize(clause, 10).total_pages, 1);
        assert_eq!(Pagination::finalize(clause, 11).total_pages, 2);
        assert_eq!(Pagination::finalize(clause, 95).total_pages, 10);
    }

    #[test]
    fn envelope_reflects_request_and_count() {
        let envelope = Pagination::finalize(PaginationClause { page: 4, limit: 20 }, 61);
        assert_eq!(envelope.current_page, 4);
        assert_eq!(envelope.total_pages, 4);
        assert_eq!(envelope.total_items, 61);
        assert_eq!(envelope.limit, 20);
    }

    #[test]
    fn envelope_serializes_camel_case() {
        let envelope = Pagination::finalize(PaginationClause::default(), 3);
        let json = serde_json::to_value(envelope).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["limit"], 10);
    }
}
