use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::Pet;
use crate::repository::CatalogRepository;
use crate::service::CatalogService;
use query_engine::{ApiResponse, ErrorBody, RawParams};

/// List adoptable pets in a city
#[utoipa::path(
    get,
    path = "/pets",
    tag = "Pets",
    params(
        ("city" = String, Query, description = "City to search in (required)"),
        ("type" = Option<String>, Query, description = "Species filter: dog or cat"),
        ("isAdopted" = Option<bool>, Query, description = "Adoption state; defaults to false"),
        ("page" = Option<u32>, Query, description = "Page number, 1-based"),
        ("limit" = Option<u32>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Pets retrieved successfully", body = Vec<Pet>),
        (status = 400, description = "Invalid query parameters", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub(super) async fn list_pets<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(params): Query<RawParams>,
) -> CatalogResult<Json<ApiResponse<Vec<Pet>>>> {
    let (pets, pagination) = service.list_pets(&params).await?;
    Ok(Json(ApiResponse::page(
        "Pets retrieved successfully",
        pets,
        pagination,
    )))
}

/// Get a pet by ID
#[utoipa::path(
    get,
    path = "/pets/{id}",
    tag = "Pets",
    params(
        ("id" = Uuid, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet retrieved successfully", body = Pet),
        (status = 400, description = "Malformed ID", body = ErrorBody),
        (status = 404, description = "Pet not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub(super) async fn get_pet<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ApiResponse<Pet>>> {
    let pet = service.get_pet(&id).await?;
    Ok(Json(ApiResponse::item("Pet retrieved successfully", pet)))
}
