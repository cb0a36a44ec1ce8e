//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Response};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use fyyur_core::format::datetime_local_value;
use fyyur_core::forms::ShowForm;
use fyyur_db::models::show::CreateShow;
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

use super::{page_with_status, redirect_with_flash};
use crate::error::AppResult;
use crate::flash::{self, FlashMessage};
use crate::state::AppState;
use crate::views::{render, FormPage, ShowRow, ShowsPage};

/// Build the show form with the current artist and venue choices.
async fn show_form_page(state: &AppState, form: &ShowForm) -> AppResult<FormPage> {
    let artists = ArtistRepo::list_names(&state.pool).await?;
    let venues = VenueRepo::list_names(&state.pool).await?;
    Ok(FormPage::show(form, &artists, &venues))
}

/// GET /shows
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let shows = ShowRepo::list_all(&state.pool).await?;

    let (jar, flashes) = flash::take(jar);
    let page = ShowsPage {
        flashes,
        shows: shows.into_iter().map(ShowRow::from).collect(),
    };
    Ok((jar, render(&page)?))
}

/// GET /shows/create
///
/// The start time is pre-filled with the current time.
pub async fn create_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let form = ShowForm {
        start_time: datetime_local_value(&Utc::now()),
        ..ShowForm::default()
    };
    let mut page = show_form_page(&state, &form).await?;

    let (jar, flashes) = flash::take(jar);
    page.flashes = flashes;
    Ok((jar, render(&page)?))
}

/// POST /shows/create
///
/// An unknown artist or venue id is rejected by the foreign keys and
/// reported like any other store failure.
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ShowForm>,
) -> AppResult<Response> {
    let show = match form.check() {
        Ok(show) => show,
        Err(errors) => {
            let page = show_form_page(&state, &form)
                .await?
                .with_errors(&errors)
                .with_flash(FlashMessage::error(format!(
                    "Error validating form: {}",
                    errors.summary()
                )));
            return page_with_status(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    match ShowRepo::create(&state.pool, &CreateShow::from(show)).await {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "Show created"
            );
            Ok(redirect_with_flash(
                jar,
                FlashMessage::success("Show was successfully listed!"),
                "/",
            ))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create show");
            let page = show_form_page(&state, &form)
                .await?
                .with_flash(FlashMessage::error("An error occurred. Show could not be listed."));
            page_with_status(StatusCode::INTERNAL_SERVER_ERROR, &page)
        }
    }
}
