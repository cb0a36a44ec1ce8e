//! Row models and write DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the table row
//! - The DTO written by create/update, built from a validated form
//! - Joined projections used by the listing pages

pub mod artist;
pub mod show;
pub mod summary;
pub mod venue;
