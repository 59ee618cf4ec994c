//! Catalog service - query resolution plus repository orchestration

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use query_engine::{EntityKind, Pagination, RawParams, ValidationError, resolve};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Article, Clinic, Pet};
use crate::repository::CatalogRepository;

/// A finished list result: the page of records plus the pagination
/// metadata the response envelope renders.
pub type Listing<T> = (Vec<T>, Pagination);

/// Read-side catalog operations.
///
/// Each listing resolves the raw query parameters first; the repository is
/// only consulted once the request is fully validated.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, raw))]
    pub async fn list_pets(&self, raw: &RawParams) -> CatalogResult<Listing<Pet>> {
        let spec = resolve(EntityKind::Pet, raw)?;
        let page = self.repository.find_pets(&spec).await?;
        Ok((page.records, Pagination::finalize(spec.pagination, page.total)))
    }

    #[instrument(skip(self))]
    pub async fn get_pet(&self, id: &str) -> CatalogResult<Pet> {
        let id = parse_id(id)?;
        self.repository
            .pet_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: EntityKind::Pet,
                id,
            })
    }

    #[instrument(skip(self, raw))]
    pub async fn list_clinics(&self, raw: &RawParams) -> CatalogResult<Listing<Clinic>> {
        let spec = resolve(EntityKind::Clinic, raw)?;
        let page = self.repository.find_clinics(&spec).await?;
        Ok((page.records, Pagination::finalize(spec.pagination, page.total)))
    }

    #[instrument(skip(self))]
    pub async fn get_clinic(&self, id: &str) -> CatalogResult<Clinic> {
        let id = parse_id(id)?;
        self.repository
            .clinic_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: EntityKind::Clinic,
                id,
            })
    }

    #[instrument(skip(self, raw))]
    pub async fn list_articles(&self, raw: &RawParams) -> CatalogResult<Listing<Article>> {
        let spec = resolve(EntityKind::Article, raw)?;
        let page = self.repository.find_articles(&spec).await?;
        Ok((page.records, Pagination::finalize(spec.pagination, page.total)))
    }

    #[instrument(skip(self))]
    pub async fn get_article(&self, id: &str) -> CatalogResult<Article> {
        let id = parse_id(id)?;
        self.repository
            .article_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: EntityKind::Article,
                id,
            })
    }
}

/// A malformed path id is a client error, reported in the same field-level
/// shape as query validation.
fn parse_id(raw: &str) -> CatalogResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        CatalogError::Validation(vec![ValidationError::invalid_type("id", "a UUID")])
    })
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
