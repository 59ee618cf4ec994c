use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::Clinic;
use crate::repository::CatalogRepository;
use crate::service::CatalogService;
use query_engine::{ApiResponse, ErrorBody, RawParams};

/// Search clinics by city or proximity
#[utoipa::path(
    get,
    path = "/clinics",
    tag = "Clinics",
    params(
        ("city" = Option<String>, Query, description = "City filter; ignored when coordinates are supplied"),
        ("lat" = Option<f64>, Query, description = "Latitude of the search center"),
        ("lng" = Option<f64>, Query, description = "Longitude of the search center"),
        ("radius" = Option<f64>, Query, description = "Search radius in km; defaults to 10"),
        ("isOpenNow" = Option<bool>, Query, description = "Open-emergency mode flag; must pair with isEmergency"),
        ("isEmergency" = Option<bool>, Query, description = "Open-emergency mode flag; must pair with isOpenNow"),
        ("page" = Option<u32>, Query, description = "Page number, 1-based"),
        ("limit" = Option<u32>, Query, description = "Page size, capped at 100"),
    ),
    responses(
        (status = 200, description = "Clinics retrieved successfully", body = Vec<Clinic>),
        (status = 400, description = "Invalid query parameters", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub(super) async fn list_clinics<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(params): Query<RawParams>,
) -> CatalogResult<Json<ApiResponse<Vec<Clinic>>>> {
    let (clinics, pagination) = service.list_clinics(&params).await?;
    Ok(Json(ApiResponse::page(
        "Clinics retrieved successfully",
        clinics,
        pagination,
    )))
}

/// Get a clinic by ID
#[utoipa::path(
    get,
    path = "/clinics/{id}",
    tag = "Clinics",
    params(
        ("id" = Uuid, Path, description = "Clinic ID")
    ),
    responses(
        (status = 200, description = "Clinic retrieved successfully", body = Clinic),
        (status = 400, description = "Malformed ID", body = ErrorBody),
        (status = 404, description = "Clinic not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub(super) async fn get_clinic<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ApiResponse<Clinic>>> {
    let clinic = service.get_clinic(&id).await?;
    Ok(Json(ApiResponse::item(
        "Clinic retrieved successfully",
        clinic,
    )))
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{clinic, request};
    use crate::repository::{MockCatalogRepository, Page};
    use axum::http::StatusCode;
    use uuid::Uuid;

    #[tokio::test]
    async fn proximity_search_renders_clinics() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_clinics().returning(|spec| {
            assert!(spec.geo.is_some());
            Ok(Page {
                records: vec![clinic(Uuid::new_v4())],
                total: 1,
            })
        });

        let (status, body) = request(repo, "/clinics?lat=31.9&lng=35.2&radius=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Clinics retrieved successfully");
        assert_eq!(body["data"][0]["isEmergency"], true);
    }

    #[tokio::test]
    async fn lone_coordinate_is_a_400() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_clinics().never();

        let (status, body) = request(repo, "/clinics?lat=31.9").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("lng"));
    }

    #[tokio::test]
    async fn lone_mode_flag_is_a_400() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_clinics().never();

        let (status, body) = request(repo, "/clinics?isOpenNow=true").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("isEmergency"));
    }

    #[tokio::test]
    async fn clinic_lookup_by_id() {
        let id = Uuid::new_v4();
        let mut repo = MockCatalogRepository::new();
        repo.expect_clinic_by_id()
            .returning(move |_| Ok(Some(clinic(id))));

        let (status, body) = request(repo, &format!("/clinics/{id}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["location"]["type"], "Point");
    }
}
