//! Record store for venues, artists and shows.
//!
//! Connection pooling, embedded migrations, row models and one repository
//! per table.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, "Opening database pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Row totals for the three tables, reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct CatalogCounts {
    pub venues: i64,
    pub artists: i64,
    pub shows: i64,
}

/// Count venues, artists and shows in one round trip.
pub async fn catalog_counts(pool: &DbPool) -> Result<CatalogCounts, sqlx::Error> {
    sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM venues) AS venues, \
                (SELECT COUNT(*) FROM artists) AS artists, \
                (SELECT COUNT(*) FROM shows) AS shows",
    )
    .fetch_one(pool)
    .await
}

/// Apply the migrations embedded from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
