//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Writes run inside a transaction that is
//! rolled back (dropped) on any error.

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;
