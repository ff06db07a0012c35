//! Pure domain logic for the agroplot backend.
//!
//! Nothing in this crate performs I/O; the db and api crates build on it.

pub mod error;
pub mod geometry;
pub mod types;
pub mod validation;
