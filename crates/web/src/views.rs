//! Page templates and the view models they render.
//!
//! Every page struct carries `flashes`, which the base layout prints above
//! the content. View models hold display-ready strings so templates stay
//! free of formatting logic.

use askama::Template;
use axum::response::Html;
use fyyur_core::choices::{GENRES, STATES};
use fyyur_core::format::{format_datetime, DateStyle};
use fyyur_core::forms::{ArtistForm, FormErrors, ShowForm, VenueForm};
use fyyur_core::listing::{Area, ShowSplit};
use fyyur_core::search::SearchResults;
use fyyur_db::models::artist::Artist;
use fyyur_db::models::show::{ArtistShow, ShowListing, VenueShow};
use fyyur_db::models::summary::{NameSummary, RecentListing};
use fyyur_db::models::venue::Venue;

use crate::error::AppResult;
use crate::flash::FlashMessage;

/// Render a page template into an HTML body.
pub fn render<T: Template>(page: &T) -> AppResult<Html<String>> {
    Ok(Html(page.render()?))
}

// ---------------------------------------------------------------------------
// Home and listings
// ---------------------------------------------------------------------------

/// A recently listed venue or artist on the home page.
#[derive(Debug, Clone)]
pub struct RecentItem {
    pub href: String,
    pub name: String,
    pub location: String,
}

impl RecentItem {
    pub fn new(base: &str, listing: RecentListing) -> Self {
        Self {
            href: format!("{base}/{}", listing.id),
            name: listing.name,
            location: format!("{}, {}", listing.city, listing.state),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    pub flashes: Vec<FlashMessage>,
    pub recent_venues: Vec<RecentItem>,
    pub recent_artists: Vec<RecentItem>,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesPage {
    pub flashes: Vec<FlashMessage>,
    pub areas: Vec<Area>,
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsPage {
    pub flashes: Vec<FlashMessage>,
    pub artists: Vec<NameSummary>,
}

/// Search results for venues or artists.
#[derive(Template)]
#[template(path = "pages/search.html")]
pub struct SearchPage {
    pub flashes: Vec<FlashMessage>,
    /// `/venues` or `/artists`; result links and the form action hang off it.
    pub base: &'static str,
    pub search_term: String,
    pub results: SearchResults,
}

// ---------------------------------------------------------------------------
// Detail pages
// ---------------------------------------------------------------------------

/// One show on a venue or artist page, linking to the other side.
#[derive(Debug, Clone)]
pub struct ShowCard {
    pub href: String,
    pub name: String,
    pub image_link: String,
    pub start_time: String,
}

impl From<VenueShow> for ShowCard {
    fn from(show: VenueShow) -> Self {
        Self {
            href: format!("/artists/{}", show.artist_id),
            name: show.artist_name,
            image_link: show.artist_image_link.unwrap_or_default(),
            start_time: format_datetime(&show.start_time, DateStyle::Full),
        }
    }
}

impl From<ArtistShow> for ShowCard {
    fn from(show: ArtistShow) -> Self {
        Self {
            href: format!("/venues/{}", show.venue_id),
            name: show.venue_name,
            image_link: show.venue_image_link.unwrap_or_default(),
            start_time: format_datetime(&show.start_time, DateStyle::Full),
        }
    }
}

/// A venue or artist profile with its shows split around now.
#[derive(Template)]
#[template(path = "pages/detail.html")]
pub struct DetailPage {
    pub flashes: Vec<FlashMessage>,
    /// `/venues/7` or `/artists/3`.
    pub href: String,
    pub name: String,
    pub genres: Vec<String>,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking: bool,
    pub seeking_label: &'static str,
    pub not_seeking_label: &'static str,
    pub seeking_description: String,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl DetailPage {
    pub fn for_venue(
        venue: Venue,
        shows: ShowSplit<VenueShow>,
        flashes: Vec<FlashMessage>,
    ) -> Self {
        let shows = shows.map(ShowCard::from);
        Self {
            flashes,
            href: format!("/venues/{}", venue.id),
            location: format!("{}, {}", venue.city, venue.state),
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            phone: venue.phone.unwrap_or_default(),
            website_link: venue.website_link.unwrap_or_default(),
            facebook_link: venue.facebook_link.unwrap_or_default(),
            image_link: venue.image_link.unwrap_or_default(),
            seeking: venue.seeking_talent,
            seeking_label: "Currently seeking talent",
            not_seeking_label: "Not currently seeking talent",
            seeking_description: venue.seeking_description.unwrap_or_default(),
            past_shows_count: shows.past_count(),
            upcoming_shows_count: shows.upcoming_count(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
        }
    }

    pub fn for_artist(
        artist: Artist,
        shows: ShowSplit<ArtistShow>,
        flashes: Vec<FlashMessage>,
    ) -> Self {
        let shows = shows.map(ShowCard::from);
        Self {
            flashes,
            href: format!("/artists/{}", artist.id),
            location: format!("{}, {}", artist.city, artist.state),
            name: artist.name,
            genres: artist.genres,
            address: String::new(),
            phone: artist.phone.unwrap_or_default(),
            website_link: artist.website_link.unwrap_or_default(),
            facebook_link: artist.facebook_link.unwrap_or_default(),
            image_link: artist.image_link.unwrap_or_default(),
            seeking: artist.seeking_venue,
            seeking_label: "Currently seeking performance venues",
            not_seeking_label: "Not currently seeking performance venues",
            seeking_description: artist.seeking_description.unwrap_or_default(),
            past_shows_count: shows.past_count(),
            upcoming_shows_count: shows.upcoming_count(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
        }
    }
}

// ---------------------------------------------------------------------------
// Shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ShowRow {
    pub venue_href: String,
    pub venue_name: String,
    pub artist_href: String,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowListing> for ShowRow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_href: format!("/venues/{}", show.venue_id),
            venue_name: show.venue_name,
            artist_href: format!("/artists/{}", show.artist_id),
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link.unwrap_or_default(),
            start_time: format_datetime(&show.start_time, DateStyle::Medium),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsPage {
    pub flashes: Vec<FlashMessage>,
    pub shows: Vec<ShowRow>,
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// How a [`FormField`] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Textarea,
    Select,
    MultiSelect,
    Checkbox,
}

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One control of a create/edit form, already filled with the submitted
/// or stored value and any error messages.
#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub name: &'static str,
    pub label: &'static str,
    /// `type` attribute of an `Input` field.
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub checked: bool,
    pub options: Vec<SelectOption>,
    pub errors: Vec<String>,
}

impl FormField {
    fn blank(kind: FieldKind, name: &'static str, label: &'static str) -> Self {
        Self {
            kind,
            name,
            label,
            input_type: "text",
            placeholder: "",
            value: String::new(),
            checked: false,
            options: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn input(name: &'static str, label: &'static str, value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::blank(FieldKind::Input, name, label)
        }
    }

    fn optional(name: &'static str, label: &'static str, value: &Option<String>) -> Self {
        Self::input(name, label, value.as_deref().unwrap_or_default())
    }

    fn with_type(mut self, input_type: &'static str, placeholder: &'static str) -> Self {
        self.input_type = input_type;
        self.placeholder = placeholder;
        self
    }

    fn textarea(name: &'static str, label: &'static str, value: &Option<String>) -> Self {
        Self {
            value: value.clone().unwrap_or_default(),
            ..Self::blank(FieldKind::Textarea, name, label)
        }
    }

    fn select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::blank(FieldKind::Select, name, label)
        }
    }

    fn checkbox(name: &'static str, label: &'static str, checked: bool) -> Self {
        Self {
            checked,
            ..Self::blank(FieldKind::Checkbox, name, label)
        }
    }

    pub fn is_input(&self) -> bool {
        self.kind == FieldKind::Input
    }

    pub fn is_textarea(&self) -> bool {
        self.kind == FieldKind::Textarea
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select | FieldKind::MultiSelect)
    }

    pub fn is_multiple(&self) -> bool {
        self.kind == FieldKind::MultiSelect
    }

    pub fn is_checkbox(&self) -> bool {
        self.kind == FieldKind::Checkbox
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Shared page for the venue, artist and show create/edit forms.
#[derive(Template)]
#[template(path = "forms/form.html")]
pub struct FormPage {
    pub flashes: Vec<FlashMessage>,
    pub heading: String,
    pub action: String,
    pub submit_label: &'static str,
    pub fields: Vec<FormField>,
}

impl FormPage {
    /// Attach per-field messages from a failed validation.
    pub fn with_errors(mut self, errors: &FormErrors) -> Self {
        for field in &mut self.fields {
            field.errors = errors.field(field.name).to_vec();
        }
        self
    }

    pub fn with_flash(mut self, flash: FlashMessage) -> Self {
        self.flashes.push(flash);
        self
    }

    pub fn venue(heading: String, action: String, form: &VenueForm) -> Self {
        Self {
            flashes: Vec::new(),
            heading,
            action,
            submit_label: "Save Venue",
            fields: vec![
                FormField::input("name", "Name", &form.name),
                FormField::input("city", "City", &form.city),
                FormField::select("state", "State", state_options(&form.state)),
                FormField::input("address", "Address", &form.address),
                FormField::optional("phone", "Phone", &form.phone).with_type("tel", "xxx-xxx-xxxx"),
                genre_field(&form.genres),
                FormField::optional("image_link", "Image Link", &form.image_link)
                    .with_type("url", "http://"),
                FormField::optional("facebook_link", "Facebook Link", &form.facebook_link)
                    .with_type("url", "http://"),
                FormField::optional("website_link", "Website Link", &form.website_link)
                    .with_type("url", "http://"),
                FormField::checkbox("seeking_talent", "Seeking Talent", form.seeking_talent),
                FormField::textarea(
                    "seeking_description",
                    "Seeking Description",
                    &form.seeking_description,
                ),
            ],
        }
    }

    pub fn artist(heading: String, action: String, form: &ArtistForm) -> Self {
        Self {
            flashes: Vec::new(),
            heading,
            action,
            submit_label: "Save Artist",
            fields: vec![
                FormField::input("name", "Name", &form.name),
                FormField::input("city", "City", &form.city),
                FormField::select("state", "State", state_options(&form.state)),
                FormField::optional("phone", "Phone", &form.phone).with_type("tel", "xxx-xxx-xxxx"),
                genre_field(&form.genres),
                FormField::optional("image_link", "Image Link", &form.image_link)
                    .with_type("url", "http://"),
                FormField::optional("facebook_link", "Facebook Link", &form.facebook_link)
                    .with_type("url", "http://"),
                FormField::optional("website_link", "Website Link", &form.website_link)
                    .with_type("url", "http://"),
                FormField::checkbox("seeking_venue", "Seeking Venue", form.seeking_venue),
                FormField::textarea(
                    "seeking_description",
                    "Seeking Description",
                    &form.seeking_description,
                ),
            ],
        }
    }

    /// The show form. Artist and venue are picked from the existing rows.
    pub fn show(form: &ShowForm, artists: &[NameSummary], venues: &[NameSummary]) -> Self {
        Self {
            flashes: Vec::new(),
            heading: "List a new show".to_string(),
            action: "/shows/create".to_string(),
            submit_label: "Create Show",
            fields: vec![
                FormField::select("artist_id", "Artist", id_options(artists, &form.artist_id)),
                FormField::select("venue_id", "Venue", id_options(venues, &form.venue_id)),
                FormField::input("start_time", "Start Time", &form.start_time)
                    .with_type("datetime-local", "YYYY-MM-DD HH:MM"),
            ],
        }
    }
}

fn state_options(current: &str) -> Vec<SelectOption> {
    STATES
        .iter()
        .map(|state| SelectOption {
            value: state.to_string(),
            label: state.to_string(),
            selected: *state == current,
        })
        .collect()
}

fn genre_field(current: &[String]) -> FormField {
    let options = GENRES
        .iter()
        .map(|genre| SelectOption {
            value: genre.to_string(),
            label: genre.to_string(),
            selected: current.iter().any(|g| g == genre),
        })
        .collect();
    FormField {
        kind: FieldKind::MultiSelect,
        ..FormField::select("genres", "Genres", options)
    }
}

fn id_options(rows: &[NameSummary], current: &str) -> Vec<SelectOption> {
    let current = current.trim();
    rows.iter()
        .map(|row| {
            let value = row.id.to_string();
            SelectOption {
                selected: value == current,
                label: row.name.clone(),
                value,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub flashes: Vec<FlashMessage>,
    pub message: String,
}

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorPage {
    pub flashes: Vec<FlashMessage>,
}
