//! Database connection pool management
//!
//! Uses sqlx SqlitePool with an explicit connection ceiling. Callers past
//! the ceiling wait in the pool's acquire queue; nothing here rejects them.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a SQLite connection pool with the default ceiling.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://recipes.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (`sqlite://path.db`, `sqlite::memory:`)
/// * `max_connections` - Maximum number of connections in the pool
///
/// Foreign-key enforcement is switched on for every connection so that
/// association rows can't reference missing parents.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}
