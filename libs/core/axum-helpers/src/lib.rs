//! Shared Axum infrastructure for the catalog workspace.
//!
//! Provides the application error type rendering the canonical error
//! envelope, server bootstrap with OpenAPI documentation and common
//! middleware, health endpoints, and graceful shutdown coordination.

pub mod errors;
pub mod http;
pub mod server;

pub use errors::AppError;
pub use server::{create_app, create_production_app, create_router};
