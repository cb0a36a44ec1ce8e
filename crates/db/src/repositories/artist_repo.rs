//! Repository for the `artists` table.

use fyyur_core::search::{like_pattern, SearchHit};
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};
use crate::models::summary::{NameSummary, RecentListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, image_link, genres, facebook_link, \
    website_link, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD and name search for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO artists \
                (name, city, state, phone, image_link, genres, \
                 facebook_link, website_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.genres)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All artist ids and names, ordered by name.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<NameSummary>, sqlx::Error> {
        sqlx::query_as::<_, NameSummary>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// The most recently created artists, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<RecentListing>, sqlx::Error> {
        sqlx::query_as::<_, RecentListing>(
            "SELECT id, name, city, state, created_at FROM artists \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on `name`.
    ///
    /// Each hit carries the number of the artist's shows starting after `now`.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (DbId, String, i64)>(
            "SELECT a.id, a.name, COUNT(s.id) FILTER (WHERE s.start_time > $2) \
             FROM artists a \
             LEFT JOIN shows s ON s.artist_id = a.id \
             WHERE a.name ILIKE $1 \
             GROUP BY a.id, a.name \
             ORDER BY a.name, a.id",
        )
        .bind(like_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, num_upcoming_shows)| SearchHit {
                id,
                name,
                num_upcoming_shows,
            })
            .collect())
    }

    /// Replace every writable column of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE artists SET \
                name = $2, city = $3, state = $4, phone = $5, image_link = $6, \
                genres = $7, facebook_link = $8, website_link = $9, \
                seeking_venue = $10, seeking_description = $11, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.genres)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Delete an artist and, through the foreign key cascade, its shows.
    ///
    /// Returns the deleted row, or `None` if it did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("DELETE FROM artists WHERE id = $1 RETURNING {COLUMNS}");
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }
}
