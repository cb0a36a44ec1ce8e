//! Domain logic for the Fyyur booking listings.
//!
//! Everything here is pure: no database, no HTTP. The `db` crate persists the
//! types defined here and the `web` crate renders them.

pub mod choices;
pub mod error;
pub mod format;
pub mod forms;
pub mod listing;
pub mod search;
pub mod types;
