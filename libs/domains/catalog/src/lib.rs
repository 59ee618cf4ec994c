//! Catalog Domain
//!
//! Read-side domain for the pet-care catalog: adoptable pets, veterinary
//! clinics, and care articles, all backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Query resolution, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities
//! └─────────────┘
//! ```
//!
//! Query parameters are resolved by the `query_engine` crate before any
//! storage work happens; repositories only ever see a validated FilterSpec.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     mongodb::MongoCatalogRepository,
//!     service::CatalogService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("petcare");
//!
//! let repository = MongoCatalogRepository::new(db);
//! let service = CatalogService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{Article, Clinic, GeoJsonPoint, Pet, Species};
pub use mongodb::MongoCatalogRepository;
pub use repository::{CatalogRepository, Page};
pub use service::{CatalogService, Listing};
