//! HTTP handlers, one module per resource.

pub mod artist;
pub mod errors;
pub mod home;
pub mod show;
pub mod venue;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::error::AppResult;
use crate::flash::{self, FlashMessage};
use crate::views::render;

/// Render `page` with a non-200 status, as used when a submitted form is
/// shown again.
pub(crate) fn page_with_status<T: Template>(status: StatusCode, page: &T) -> AppResult<Response> {
    Ok((status, render(page)?).into_response())
}

/// Queue `message` and redirect (303) to `to`.
pub(crate) fn redirect_with_flash(jar: CookieJar, message: FlashMessage, to: &str) -> Response {
    (flash::push(jar, message), Redirect::to(to)).into_response()
}
