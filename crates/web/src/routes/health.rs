use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `catalog` is `None` when the database could not be reached, in which case
/// `status` is `"degraded"`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Open connections, busy or idle.
    pub db_pool_size: u32,
    pub db_pool_idle: usize,
    pub catalog: Option<CatalogSummary>,
}

/// How many venues, artists and shows are listed.
#[derive(Serialize)]
pub struct CatalogSummary {
    pub venues: i64,
    pub artists: i64,
    pub shows: i64,
}

impl From<fyyur_db::CatalogCounts> for CatalogSummary {
    fn from(counts: fyyur_db::CatalogCounts) -> Self {
        Self {
            venues: counts.venues,
            artists: counts.artists,
            shows: counts.shows,
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = match fyyur_db::catalog_counts(&state.pool).await {
        Ok(counts) => Some(CatalogSummary::from(counts)),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };
    let db_healthy = catalog.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_pool_size: state.pool.size(),
        db_pool_idle: state.pool.num_idle(),
        catalog,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
