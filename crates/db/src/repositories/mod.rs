//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Plot and activity queries
//! always take the caller's user id so ownership is enforced in SQL.

pub mod activity_repo;
pub mod plot_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use plot_repo::PlotRepo;
pub use user_repo::UserRepo;
