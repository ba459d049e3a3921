//! Database Connection Management
//!
//! Builds the process-wide MongoDB client. The driver pools connections
//! internally, so one client is created at startup and shared.

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

use super::config::DatabaseConfig;

/// Create a pooled MongoDB client from configuration and verify the server is reachable
pub async fn create_client(config: &DatabaseConfig) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout());
    options.server_selection_timeout = Some(config.connect_timeout());

    let client = Client::with_options(options)?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;

    Ok(client)
}
