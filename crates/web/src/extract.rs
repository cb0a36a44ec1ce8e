//! Request extractors shared by the handlers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use fyyur_core::types::DbId;

use crate::error::AppError;

/// The `{id}` path segment of a venue or artist URL.
///
/// Anything that is not a positive integer renders the 404 page, the same
/// as an id with no row behind it.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::PageNotFound)?;
        match raw.parse::<DbId>() {
            Ok(id) if id > 0 => Ok(IdPath(id)),
            _ => Err(AppError::PageNotFound),
        }
    }
}
