use fyyur_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// `id` + `name` of a venue or artist, for lists and select boxes.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NameSummary {
    pub id: DbId,
    pub name: String,
}

/// A recently listed venue or artist, shown on the home page.
#[derive(Debug, Clone, FromRow)]
pub struct RecentListing {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub created_at: Timestamp,
}
