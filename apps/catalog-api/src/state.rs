//! Shared application state passed to the API modules.

use mongodb::{Client, Database};

/// Cloned per handler; the MongoDB client shares its connection pool
/// across clones.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
