//! Repository for the `shows` table and its joins with venues and artists.

use std::collections::HashMap;

use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::show::{ArtistShow, CreateShow, Show, ShowListing, VenueShow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_id, venue_id, start_time, created_at";

/// Provides creation and the joined listings for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// Fails with a foreign key violation if the artist or venue does not
    /// exist.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO shows (artist_id, venue_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .bind(input.start_time)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(show)
    }

    /// Every show joined with its venue and artist, ordered by start time.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, \
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
                    s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Shows at one venue joined with their artists, ordered by start time.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.id AS show_id, s.artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Shows of one artist joined with their venues, ordered by start time.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, \
                    v.image_link AS venue_image_link, s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Number of shows starting after `now`, keyed by venue. Venues without
    /// upcoming shows are absent from the map.
    pub async fn upcoming_counts_by_venue(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (DbId, i64)>(
            "SELECT venue_id, COUNT(*) FROM shows \
             WHERE start_time > $1 \
             GROUP BY venue_id",
        )
        .bind(now)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }
}
