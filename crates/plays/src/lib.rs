//! Plays domain module.
//!
//! Play records and the catalog that maps play ids to them. Pure data, no IO.

pub mod catalog;
pub mod play;

pub use catalog::Catalog;
pub use play::{Genre, Play};
