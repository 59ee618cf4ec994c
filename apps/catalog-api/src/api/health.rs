//! Readiness endpoint

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(axum::http::StatusCode, Json<Value>), (axum::http::StatusCode, Json<Value>)> {
    let mongo_check: HealthCheckFuture = Box::pin(async {
        if database::mongodb::check_health(&state.mongo_client).await {
            Ok(())
        } else {
            Err("MongoDB ping failed".to_string())
        }
    });

    run_health_checks(vec![("mongodb", mongo_check)]).await
}
