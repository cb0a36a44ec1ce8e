use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use fyyur_core::error::CoreError;

use crate::views::{NotFoundPage, ServerErrorPage};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] by rendering the 404 or 500 error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// No route or resource matches the request path.
    #[error("Page not found")]
    PageNotFound,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                not_found_page(format!("{entity} {id} does not exist."))
            }
            AppError::Database(sqlx::Error::RowNotFound) => {
                not_found_page("The requested record does not exist.".to_string())
            }
            AppError::PageNotFound => {
                not_found_page("The page you are looking for does not exist.".to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                server_error_page()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                server_error_page()
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template render error");
                server_error_page()
            }
        }
    }
}

fn not_found_page(message: String) -> Response {
    let page = NotFoundPage {
        flashes: Vec::new(),
        message,
    };
    error_page(StatusCode::NOT_FOUND, page.render())
}

/// The sanitised 500 page. Never includes error details.
fn server_error_page() -> Response {
    let page = ServerErrorPage {
        flashes: Vec::new(),
    };
    error_page(StatusCode::INTERNAL_SERVER_ERROR, page.render())
}

fn error_page(status: StatusCode, rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Error page failed to render");
            (status, status.canonical_reason().unwrap_or("Error")).into_response()
        }
    }
}
