use crate::error::AppError;

/// Fallback for every path no route matches.
pub async fn not_found() -> AppError {
    AppError::PageNotFound
}
