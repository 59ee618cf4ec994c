use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::Article;
use crate::repository::CatalogRepository;
use crate::service::CatalogService;
use query_engine::{ApiResponse, ErrorBody, RawParams};

/// List pet-care articles for a species
#[utoipa::path(
    get,
    path = "/articles",
    tag = "Articles",
    params(
        ("petType" = String, Query, description = "Species the article covers (required): dog or cat"),
        ("category" = Option<String>, Query, description = "Category filter"),
        ("keyword" = Option<String>, Query, description = "Case-insensitive search over title and summary"),
        ("page" = Option<u32>, Query, description = "Page number, 1-based"),
        ("limit" = Option<u32>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Articles retrieved successfully", body = Vec<Article>),
        (status = 400, description = "Invalid query parameters", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub(super) async fn list_articles<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(params): Query<RawParams>,
) -> CatalogResult<Json<ApiResponse<Vec<Article>>>> {
    let (articles, pagination) = service.list_articles(&params).await?;
    Ok(Json(ApiResponse::page(
        "Articles retrieved successfully",
        articles,
        pagination,
    )))
}

/// Get an article by ID
#[utoipa::path(
    get,
    path = "/articles/{id}",
    tag = "Articles",
    params(
        ("id" = Uuid, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Article retrieved successfully", body = Article),
        (status = 400, description = "Malformed ID", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub(super) async fn get_article<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ApiResponse<Article>>> {
    let article = service.get_article(&id).await?;
    Ok(Json(ApiResponse::item(
        "Article retrieved successfully",
        article,
    )))
}
