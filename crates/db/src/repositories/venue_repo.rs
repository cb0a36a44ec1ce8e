//! Repository for the `venues` table.

use fyyur_core::listing::VenueLocation;
use fyyur_core::search::{like_pattern, SearchHit};
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::summary::{NameSummary, RecentListing};
use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueLocationRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, genres, \
    facebook_link, website_link, seeking_talent, seeking_description, created_at, updated_at";

/// Provides CRUD, area listing and name search for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO venues \
                (name, city, state, address, phone, image_link, genres, \
                 facebook_link, website_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.genres)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every venue's id, name and location, ordered by (state, city, name).
    pub async fn list_locations(pool: &PgPool) -> Result<Vec<VenueLocation>, sqlx::Error> {
        let rows = sqlx::query_as::<_, VenueLocationRow>(
            "SELECT id, name, city, state FROM venues ORDER BY state, city, name, id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(VenueLocation::from).collect())
    }

    /// All venue ids and names, ordered by name. Feeds the show form.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<NameSummary>, sqlx::Error> {
        sqlx::query_as::<_, NameSummary>("SELECT id, name FROM venues ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// The most recently created venues, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<RecentListing>, sqlx::Error> {
        sqlx::query_as::<_, RecentListing>(
            "SELECT id, name, city, state, created_at FROM venues \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on `name`.
    ///
    /// Each hit carries the number of shows at the venue starting after `now`.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (DbId, String, i64)>(
            "SELECT v.id, v.name, COUNT(s.id) FILTER (WHERE s.start_time > $2) \
             FROM venues v \
             LEFT JOIN shows s ON s.venue_id = v.id \
             WHERE v.name ILIKE $1 \
             GROUP BY v.id, v.name \
             ORDER BY v.name, v.id",
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

    /// Replace every writable column of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE venues SET \
                name = $2, city = $3, state = $4, address = $5, phone = $6, \
                image_link = $7, genres = $8, facebook_link = $9, website_link = $10, \
                seeking_talent = $11, seeking_description = $12, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.genres)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Delete a venue and, through the foreign key cascade, its shows.
    ///
    /// Returns the deleted row, or `None` if it did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("DELETE FROM venues WHERE id = $1 RETURNING {COLUMNS}");
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }
}
