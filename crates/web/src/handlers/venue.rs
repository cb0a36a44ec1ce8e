//! Handlers for the `/venues` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Response};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::forms::VenueForm;
use fyyur_core::listing::{group_by_area, split_shows};
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::{CreateVenue, UpdateVenue};
use fyyur_db::repositories::{ShowRepo, VenueRepo};

use super::{page_with_status, redirect_with_flash};
use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::flash::{self, FlashMessage};
use crate::params::SearchParams;
use crate::state::AppState;
use crate::views::{render, DetailPage, FormPage, SearchPage, VenuesPage};

const CREATE_ACTION: &str = "/venues/create";
const CREATE_HEADING: &str = "List a new venue";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

fn edit_action(id: DbId) -> String {
    format!("/venues/{id}/edit")
}

fn edit_heading(name: &str) -> String {
    format!("Edit venue {name}")
}

/// GET /venues
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let now = Utc::now();
    let venues = VenueRepo::list_locations(&state.pool).await?;
    let counts = ShowRepo::upcoming_counts_by_venue(&state.pool, now).await?;

    let (jar, flashes) = flash::take(jar);
    let page = VenuesPage {
        flashes,
        areas: group_by_area(venues, &counts),
    };
    Ok((jar, render(&page)?))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(params): Form<SearchParams>,
) -> AppResult<(CookieJar, Html<String>)> {
    let hits = VenueRepo::search_by_name(&state.pool, &params.search_term, Utc::now()).await?;
    tracing::debug!(term = %params.search_term, count = hits.len(), "Venue search");

    let (jar, flashes) = flash::take(jar);
    let page = SearchPage {
        flashes,
        base: "/venues",
        search_term: params.search_term,
        results: SearchResults::from(hits),
    };
    Ok((jar, render(&page)?))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
) -> AppResult<(CookieJar, Html<String>)> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ShowRepo::list_for_venue(&state.pool, id).await?;
    let shows = split_shows(shows, &Utc::now());

    let (jar, flashes) = flash::take(jar);
    let page = DetailPage::for_venue(venue, shows, flashes);
    Ok((jar, render(&page)?))
}

/// GET /venues/create
pub async fn create_form(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flashes) = flash::take(jar);
    let mut page = FormPage::venue(
        CREATE_HEADING.to_string(),
        CREATE_ACTION.to_string(),
        &VenueForm::default(),
    );
    page.flashes = flashes;
    Ok((jar, render(&page)?))
}

/// POST /venues/create
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<VenueForm>,
) -> AppResult<Response> {
    let page = || FormPage::venue(CREATE_HEADING.to_string(), CREATE_ACTION.to_string(), &form);

    if let Err(errors) = form.check() {
        let page = page()
            .with_errors(&errors)
            .with_flash(FlashMessage::error(format!(
                "Error validating form: {}",
                errors.summary()
            )));
        return page_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
    }

    match VenueRepo::create(&state.pool, &CreateVenue::from(form.clone())).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, "Venue created");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::success(format!("Venue {} was successfully listed!", venue.name)),
                "/",
            ))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create venue");
            let page = page().with_flash(FlashMessage::error(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name.trim()
            )));
            page_with_status(StatusCode::INTERNAL_SERVER_ERROR, &page)
        }
    }
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
) -> AppResult<(CookieJar, Html<String>)> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let (jar, flashes) = flash::take(jar);
    let mut page = FormPage::venue(
        edit_heading(&venue.name),
        edit_action(id),
        &venue.to_form(),
    );
    page.flashes = flashes;
    Ok((jar, render(&page)?))
}

/// POST /venues/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
    Form(form): Form<VenueForm>,
) -> AppResult<Response> {
    let stored = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let heading = edit_heading(&stored.name);
    let page = || FormPage::venue(heading.clone(), edit_action(id), &form);

    if let Err(errors) = form.check() {
        let page = page()
            .with_errors(&errors)
            .with_flash(FlashMessage::error(format!(
                "Error validating form: {}",
                errors.summary()
            )));
        return page_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
    }

    match VenueRepo::update(&state.pool, id, &UpdateVenue::from(form.clone())).await {
        Ok(Some(venue)) => {
            tracing::info!(venue_id = venue.id, "Venue updated");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::success(format!("Venue {} was successfully updated!", venue.name)),
                &format!("/venues/{id}"),
            ))
        }
        Ok(None) => Err(not_found(id)),
        Err(err) => {
            tracing::error!(venue_id = id, error = %err, "Failed to update venue");
            let page = page().with_flash(FlashMessage::error(format!(
                "An error occurred. Venue {} could not be updated.",
                form.name.trim()
            )));
            page_with_status(StatusCode::INTERNAL_SERVER_ERROR, &page)
        }
    }
}

/// GET /venues/{id}/delete
///
/// Deleting a venue also deletes its shows.
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
) -> AppResult<Response> {
    match VenueRepo::delete(&state.pool, id).await {
        Ok(Some(venue)) => {
            tracing::info!(venue_id = id, "Venue deleted");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::success(format!("Venue {} was successfully deleted.", venue.name)),
                "/venues",
            ))
        }
        Ok(None) => Err(not_found(id)),
        Err(err) => {
            tracing::error!(venue_id = id, error = %err, "Failed to delete venue");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::error("An error occurred. Venue could not be deleted."),
                &format!("/venues/{id}"),
            ))
        }
    }
}
