//! Handlers for the `/artists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Response};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::forms::ArtistForm;
use fyyur_core::listing::split_shows;
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{CreateArtist, UpdateArtist};
use fyyur_db::repositories::{ArtistRepo, ShowRepo};

use super::{page_with_status, redirect_with_flash};
use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::flash::{self, FlashMessage};
use crate::params::SearchParams;
use crate::state::AppState;
use crate::views::{render, ArtistsPage, DetailPage, FormPage, SearchPage};

const CREATE_ACTION: &str = "/artists/create";
const CREATE_HEADING: &str = "List a new artist";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Artist", id })
}

fn edit_action(id: DbId) -> String {
    format!("/artists/{id}/edit")
}

fn edit_heading(name: &str) -> String {
    format!("Edit artist {name}")
}

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let artists = ArtistRepo::list_names(&state.pool).await?;

    let (jar, flashes) = flash::take(jar);
    let page = ArtistsPage { flashes, artists };
    Ok((jar, render(&page)?))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(params): Form<SearchParams>,
) -> AppResult<(CookieJar, Html<String>)> {
    let hits = ArtistRepo::search_by_name(&state.pool, &params.search_term, Utc::now()).await?;
    tracing::debug!(term = %params.search_term, count = hits.len(), "Artist search");

    let (jar, flashes) = flash::take(jar);
    let page = SearchPage {
        flashes,
        base: "/artists",
        search_term: params.search_term,
        results: SearchResults::from(hits),
    };
    Ok((jar, render(&page)?))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
) -> AppResult<(CookieJar, Html<String>)> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ShowRepo::list_for_artist(&state.pool, id).await?;
    let shows = split_shows(shows, &Utc::now());

    let (jar, flashes) = flash::take(jar);
    let page = DetailPage::for_artist(artist, shows, flashes);
    Ok((jar, render(&page)?))
}

/// GET /artists/create
pub async fn create_form(jar: CookieJar) -> AppResult<(CookieJar, Html<String>)> {
    let (jar, flashes) = flash::take(jar);
    let mut page = FormPage::artist(
        CREATE_HEADING.to_string(),
        CREATE_ACTION.to_string(),
        &ArtistForm::default(),
    );
    page.flashes = flashes;
    Ok((jar, render(&page)?))
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ArtistForm>,
) -> AppResult<Response> {
    let page = || FormPage::artist(CREATE_HEADING.to_string(), CREATE_ACTION.to_string(), &form);

    if let Err(errors) = form.check() {
        let page = page()
            .with_errors(&errors)
            .with_flash(FlashMessage::error(format!(
                "Error validating form: {}",
                errors.summary()
            )));
        return page_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
    }

    match ArtistRepo::create(&state.pool, &CreateArtist::from(form.clone())).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, "Artist created");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::success(format!("Artist {} was successfully listed!", artist.name)),
                "/",
            ))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create artist");
            let page = page().with_flash(FlashMessage::error(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name.trim()
            )));
            page_with_status(StatusCode::INTERNAL_SERVER_ERROR, &page)
        }
    }
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
) -> AppResult<(CookieJar, Html<String>)> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let (jar, flashes) = flash::take(jar);
    let mut page = FormPage::artist(
        edit_heading(&artist.name),
        edit_action(id),
        &artist.to_form(),
    );
    page.flashes = flashes;
    Ok((jar, render(&page)?))
}

/// POST /artists/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
    Form(form): Form<ArtistForm>,
) -> AppResult<Response> {
    let stored = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let heading = edit_heading(&stored.name);
    let page = || FormPage::artist(heading.clone(), edit_action(id), &form);

    if let Err(errors) = form.check() {
        let page = page()
            .with_errors(&errors)
            .with_flash(FlashMessage::error(format!(
                "Error validating form: {}",
                errors.summary()
            )));
        return page_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
    }

    match ArtistRepo::update(&state.pool, id, &UpdateArtist::from(form.clone())).await {
        Ok(Some(artist)) => {
            tracing::info!(artist_id = artist.id, "Artist updated");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::success(format!("Artist {} was successfully updated!", artist.name)),
                &format!("/artists/{id}"),
            ))
        }
        Ok(None) => Err(not_found(id)),
        Err(err) => {
            tracing::error!(artist_id = id, error = %err, "Failed to update artist");
            let page = page().with_flash(FlashMessage::error(format!(
                "An error occurred. Artist {} could not be updated.",
                form.name.trim()
            )));
            page_with_status(StatusCode::INTERNAL_SERVER_ERROR, &page)
        }
    }
}

/// GET /artists/{id}/delete
///
/// Deleting an artist also deletes their shows.
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    IdPath(id): IdPath,
) -> AppResult<Response> {
    match ArtistRepo::delete(&state.pool, id).await {
        Ok(Some(artist)) => {
            tracing::info!(artist_id = id, "Artist deleted");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::success(format!("Artist {} was successfully deleted.", artist.name)),
                "/artists",
            ))
        }
        Ok(None) => Err(not_found(id)),
        Err(err) => {
            tracing::error!(artist_id = id, error = %err, "Failed to delete artist");
            Ok(redirect_with_flash(
                jar,
                FlashMessage::error("An error occurred. Artist could not be deleted."),
                &format!("/artists/{id}"),
            ))
        }
    }
}
