//! Show row model, DTO and the joined projections used by listing pages.

use fyyur_core::forms::ValidShow;
use fyyur_core::listing::Scheduled;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow)]
pub struct Show {
    pub id: DbId,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a show. Shows are never edited.
#[derive(Debug, Clone)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

impl From<ValidShow> for CreateShow {
    fn from(show: ValidShow) -> Self {
        Self {
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
        }
    }
}

/// A show on a venue's page, joined with its artist.
#[derive(Debug, Clone, FromRow)]
pub struct VenueShow {
    pub show_id: DbId,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// A show on an artist's page, joined with its venue.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistShow {
    pub show_id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// A row of the `/shows` page, joined with both venue and artist.
#[derive(Debug, Clone, FromRow)]
pub struct ShowListing {
    pub show_id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}
