//! Handler for the landing page.

use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::CookieJar;
use fyyur_db::repositories::{ArtistRepo, VenueRepo};

use crate::error::AppResult;
use crate::flash;
use crate::state::AppState;
use crate::views::{render, HomePage, RecentItem};

/// How many recent venues and artists the home page lists.
const RECENT_LIMIT: i64 = 10;

/// GET /
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let venues = VenueRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    let artists = ArtistRepo::list_recent(&state.pool, RECENT_LIMIT).await?;

    let (jar, flashes) = flash::take(jar);
    let page = HomePage {
        flashes,
        recent_venues: venues
            .into_iter()
            .map(|v| RecentItem::new("/venues", v))
            .collect(),
        recent_artists: artists
            .into_iter()
            .map(|a| RecentItem::new("/artists", a))
            .collect(),
    };
    Ok((jar, render(&page)?))
}
