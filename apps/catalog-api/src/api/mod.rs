//! API routes module
//!
//! Routes here are nested under /api by axum_helpers::create_router.

pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(catalog::router(state))
        .merge(health::router(state.clone()))
}
