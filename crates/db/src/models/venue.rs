//! Venue row model and DTOs.

use fyyur_core::forms::VenueForm;
use fyyur_core::listing::VenueLocation;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Venue {
    /// Pre-fill an edit form with the stored values.
    pub fn to_form(&self) -> VenueForm {
        VenueForm {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            image_link: self.image_link.clone(),
            genres: self.genres.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// The columns needed to group venues by area.
#[derive(Debug, Clone, FromRow)]
pub struct VenueLocationRow {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl From<VenueLocationRow> for VenueLocation {
    fn from(row: VenueLocationRow) -> Self {
        VenueLocation {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
        }
    }
}

/// Every writable venue column. Edits replace all of them, so the same DTO
/// serves inserts and updates.
#[derive(Debug, Clone)]
pub struct CreateVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

pub type UpdateVenue = CreateVenue;

impl From<VenueForm> for CreateVenue {
    fn from(form: VenueForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            city: form.city.trim().to_string(),
            state: form.state,
            address: form.address.trim().to_string(),
            phone: form.phone,
            image_link: form.image_link,
            genres: form.genres,
            facebook_link: form.facebook_link,
            website_link: form.website_link,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        }
    }
}
