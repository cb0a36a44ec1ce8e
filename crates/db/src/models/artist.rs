//! Artist row model and DTOs.

use fyyur_core::forms::ArtistForm;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Artist {
    /// Pre-fill an edit form with the stored values.
    pub fn to_form(&self) -> ArtistForm {
        ArtistForm {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            image_link: self.image_link.clone(),
            genres: self.genres.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Every writable artist column; shared by inserts and full-replace edits.
#[derive(Debug, Clone)]
pub struct CreateArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

pub type UpdateArtist = CreateArtist;

impl From<ArtistForm> for CreateArtist {
    fn from(form: ArtistForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            city: form.city.trim().to_string(),
            state: form.state,
            phone: form.phone,
            image_link: form.image_link,
            genres: form.genres,
            facebook_link: form.facebook_link,
            website_link: form.website_link,
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
        }
    }
}
