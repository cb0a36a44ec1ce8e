//! Form payloads for venues, artists and shows, with their validation rules.
//!
//! Bodies arrive URL-encoded. Two conventions apply to every form:
//!
//! - Blank optional text fields deserialize to `None`.
//! - Checkboxes are `true` iff their key is present, whatever the value.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::choices;
use crate::types::{DbId, Timestamp};

/// `NNN-NNN-NNNN`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("valid regex"));

const REQUIRED: &str = "This field is required.";

/// Accepted `start_time` layouts without an offset, interpreted as UTC.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// Body of `POST /venues/create` and `POST /venues/{id}/edit`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct VenueForm {
    #[validate(custom(function = "required"), length(max = 120))]
    pub name: String,
    #[validate(custom(function = "required"), length(max = 120))]
    pub city: String,
    #[validate(custom(function = "known_state"))]
    pub state: String,
    #[validate(custom(function = "required"), length(max = 120))]
    pub address: String,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(regex(path = *PHONE_RE, message = "Phone must look like 555-555-5555."))]
    pub phone: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(custom(function = "web_url"), length(max = 500))]
    pub image_link: Option<String>,
    #[validate(
        length(min = 1, message = "Choose at least one genre."),
        custom(function = "known_genres")
    )]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(custom(function = "web_url"), length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(custom(function = "web_url"), length(max = 120))]
    pub website_link: Option<String>,
    #[serde(deserialize_with = "checkbox")]
    pub seeking_talent: bool,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Run every field rule, collecting all failures.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(FormErrors::from)
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

/// Body of `POST /artists/create` and `POST /artists/{id}/edit`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ArtistForm {
    #[validate(custom(function = "required"), length(max = 120))]
    pub name: String,
    #[validate(custom(function = "required"), length(max = 120))]
    pub city: String,
    #[validate(custom(function = "known_state"))]
    pub state: String,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(regex(path = *PHONE_RE, message = "Phone must look like 555-555-5555."))]
    pub phone: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(custom(function = "web_url"), length(max = 500))]
    pub image_link: Option<String>,
    #[validate(
        length(min = 1, message = "Choose at least one genre."),
        custom(function = "known_genres")
    )]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(custom(function = "web_url"), length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(custom(function = "web_url"), length(max = 120))]
    pub website_link: Option<String>,
    #[serde(deserialize_with = "checkbox")]
    pub seeking_venue: bool,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(length(max = 500))]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Run every field rule, collecting all failures.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(FormErrors::from)
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// Body of `POST /shows/create`. Fields stay raw text so the form can be
/// re-rendered exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

/// A show submission that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

impl ShowForm {
    /// Parse the raw fields, collecting every failure.
    ///
    /// Whether the referenced artist and venue exist is left to the
    /// database's foreign keys.
    pub fn check(&self) -> Result<ValidShow, FormErrors> {
        let mut errors = FormErrors::default();

        let artist_id = parse_id(&self.artist_id, "artist_id", &mut errors);
        let venue_id = parse_id(&self.venue_id, "venue_id", &mut errors);
        let start_time = if self.start_time.trim().is_empty() {
            errors.add("start_time", REQUIRED);
            None
        } else {
            let parsed = parse_start_time(&self.start_time);
            if parsed.is_none() {
                errors.add("start_time", "Not a valid date and time.");
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ValidShow {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(raw: &str, field: &'static str, errors: &mut FormErrors) -> Option<DbId> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Must be a positive whole number.");
            None
        }
    }
}

/// Parse a submitted show start time.
///
/// Accepts RFC 3339 (offset honoured) and the offset-less layouts in
/// [`START_TIME_FORMATS`], which are taken as UTC.
pub fn parse_start_time(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Per-field validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for one field; empty when the field is valid.
    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// One-line summary used in the flash message, e.g.
    /// `name: This field is required. state: Invalid choice.`
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(" | ")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FormErrors::default();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors.iter() {
                let message = match &err.message {
                    Some(message) => message.to_string(),
                    None => default_message(&err.code),
                };
                out.add(&field, message);
            }
        }
        out
    }
}

fn default_message(code: &str) -> String {
    match code {
        "length" => "Field has an invalid length.".to_string(),
        "url" => "Invalid URL.".to_string(),
        other => format!("Invalid value ({other})."),
    }
}

// ---------------------------------------------------------------------------
// Field rules and deserializers
// ---------------------------------------------------------------------------

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(REQUIRED)));
    }
    Ok(())
}

fn known_state(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if !choices::is_valid_state(value) {
        return Err(ValidationError::new("choice").with_message(Cow::Borrowed("Invalid choice.")));
    }
    Ok(())
}

fn known_genres(values: &[String]) -> Result<(), ValidationError> {
    if let Some(bad) = values.iter().find(|g| !choices::is_valid_genre(g)) {
        return Err(ValidationError::new("choice")
            .with_message(Cow::Owned(format!("'{bad}' is not a valid choice."))));
    }
    Ok(())
}

/// Links are rendered into `href`/`src` attributes, so only absolute
/// http(s) URLs with a host are accepted.
fn web_url(value: &str) -> Result<(), ValidationError> {
    let lower = value.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    let has_host = rest.is_some_and(|r| !r.is_empty() && !r.starts_with('/'));
    if !has_host || !value.validate_url() {
        return Err(ValidationError::new("url").with_message(Cow::Borrowed("Invalid URL.")));
    }
    Ok(())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}
