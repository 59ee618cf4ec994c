//! MongoDB configuration, connection, and health checking.

pub mod config;
pub mod connector;
pub mod health;

pub use config::MongoConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry, MongoError};
pub use health::check_health;
