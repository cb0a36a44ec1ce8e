//! Fyyur web server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! templates) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod flash;
pub mod handlers;
pub mod params;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
