//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet-Care Catalog API",
        version = "0.1.0",
        description = "Read-oriented catalog of adoptable pets, veterinary clinics, and care articles",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Pets", description = "Adoptable pet listings"),
        (name = "Clinics", description = "Veterinary clinic search"),
        (name = "Articles", description = "Pet-care articles")
    )
)]
pub struct ApiDoc;
