//! Database connectors for the catalog workspace.
//!
//! Only MongoDB is wired up here; the crate keeps the feature-gated layout
//! so another backend can be added without touching consumers.

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{retry, retry_with_backoff, RetryConfig};
