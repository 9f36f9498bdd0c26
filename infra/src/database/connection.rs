//! MySQL connection pool management

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use hub_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await
        .map_err(|e| InfrastructureError::Database(format!("Failed to connect: {e}")))?;

    info!(
        max_connections = config.max_connections,
        "database connection pool ready"
    );

    Ok(pool)
}

/// Verify the pool can reach the database
pub async fn ping(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| InfrastructureError::Database(format!("Ping failed: {e}")))?;
    Ok(())
}
