//! HTTP handlers, one module per resource.

pub mod activity;
pub mod auth;
pub mod geometry;
pub mod plot;
pub mod user;
