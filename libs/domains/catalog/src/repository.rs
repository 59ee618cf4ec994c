use async_trait::async_trait;
use query_engine::FilterSpec;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{Article, Clinic, Pet};

/// One page of records plus the total count matching the same filter,
/// fetched before pagination is applied.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: u64,
}

/// Read-side storage boundary for the catalog.
///
/// List operations receive a fully resolved [`FilterSpec`] and translate it
/// to storage-native queries; they never see raw request parameters.
/// Lookups return `Ok(None)` when the id has no document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    async fn find_pets(&self, spec: &FilterSpec) -> CatalogResult<Page<Pet>>;
    async fn pet_by_id(&self, id: Uuid) -> CatalogResult<Option<Pet>>;

    async fn find_clinics(&self, spec: &FilterSpec) -> CatalogResult<Page<Clinic>>;
    async fn clinic_by_id(&self, id: Uuid) -> CatalogResult<Option<Clinic>>;

    async fn find_articles(&self, spec: &FilterSpec) -> CatalogResult<Page<Article>>;
    async fn article_by_id(&self, id: Uuid) -> CatalogResult<Option<Article>>;
}
