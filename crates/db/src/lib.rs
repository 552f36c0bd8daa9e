//! Postgres access for the product catalog.
//!
//! Handlers never hold a connection across requests: every repository call
//! acquires one from the pool and returns it when the query completes.

pub mod models;
pub mod repositories;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default wait for a free (or new) connection before a query fails.
///
/// Must stay below the HTTP request timeout so an unreachable database
/// surfaces as a storage error rather than a request timeout.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Pool settings shared by [`create_pool`] and lazily connected pools.
pub fn pool_options(max_connections: u32, acquire_timeout: Duration) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
}

/// Create a connection pool from resolved connection options.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    pool_options(max_connections, acquire_timeout)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Migrations up to date");
    Ok(())
}
