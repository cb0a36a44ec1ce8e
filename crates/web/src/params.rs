//! Small form bodies shared by several handlers.

use serde::Deserialize;

/// Body of `POST /venues/search` and `POST /artists/search`.
///
/// A missing `search_term` is treated as empty, which matches every row.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub search_term: String,
}
