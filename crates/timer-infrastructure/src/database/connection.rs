//! Database connection pool

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use timer_shared::config::DatabaseSettings;

/// Builds the pool without opening a connection. Connection failures surface
/// on the first query, where handlers turn them into a 500.
pub fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_lazy(&settings.url)
}
