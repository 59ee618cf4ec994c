use mongodb::{bson::doc, Client};
use tracing::error;

/// Ping the server to verify the connection is still usable.
///
/// Returns false rather than an error so readiness handlers can report the
/// dependency state without branching on failure detail.
pub async fn check_health(client: &Client) -> bool {
    match client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
    {
        Ok(_) => true,
        Err(e) => {
            error!("MongoDB health check failed: {}", e);
            false
        }
    }
}
