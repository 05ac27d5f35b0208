//! Database Module
//!
//! Opens the PostgreSQL connection pool. No queries live here; repositories
//! built on top of the pool come later.

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;

use crate::config::DatabaseConfig;

/// Opens a connection pool against the configured database and verifies
/// connectivity with a ping.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.connection_lifetime)
        .connect(&config.dsn())
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    debug!(host = %config.host, database = %config.name, "database ping succeeded");

    Ok(pool)
}
