//! MySQL access: pool construction and the `items` repository.

pub mod models;
pub mod repositories;
mod source;

pub use source::SqlItemSource;

use sqlx::mysql::MySqlPoolOptions;

pub type DbPool = sqlx::MySqlPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
