//! HTTP surface for the catalog: read-only listings and lookups.

mod articles;
mod clinics;
mod pets;

use axum::{Router, routing::get};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Article, Clinic, GeoJsonPoint, Pet, Species};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;
use query_engine::{ErrorBody, Pagination};

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        pets::list_pets,
        pets::get_pet,
        clinics::list_clinics,
        clinics::get_clinic,
        articles::list_articles,
        articles::get_article,
    ),
    components(schemas(Pet, Clinic, Article, Species, GeoJsonPoint, Pagination, ErrorBody)),
    tags(
        (name = "Pets", description = "Adoptable pet listings"),
        (name = "Clinics", description = "Veterinary clinic search"),
        (name = "Articles", description = "Pet-care articles"),
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all read endpoints
pub fn router<R: CatalogRepository>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/pets", get(pets::list_pets))
        .route("/pets/{id}", get(pets::get_pet))
        .route("/clinics", get(clinics::list_clinics))
        .route("/clinics/{id}", get(clinics::get_clinic))
        .route("/articles", get(articles::list_articles))
        .route("/articles/{id}", get(articles::get_article))
        .with_state(shared_service)
}
