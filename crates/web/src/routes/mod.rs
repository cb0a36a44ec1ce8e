pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                  home page
///
/// /venues                            venues grouped by area
/// /venues/search                     search by name (POST)
/// /venues/create                     form, create
/// /venues/{id}                       detail
/// /venues/{id}/edit                  form, update
/// /venues/{id}/delete                delete
///
/// /artists/...                       same shape as /venues
///
/// /shows                             all shows
/// /shows/create                      form, create
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .nest("/venues", venues::router())
        .nest("/artists", artists::router())
        .nest("/shows", shows::router())
}
