pub mod activity;
pub mod auth;
pub mod geometry;
pub mod health;
pub mod plot;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /profile                                         current user (auth)
///
/// /plots                                           list, create (auth)
/// /plots/summary                                   plot count + total area
/// /plots/{id}                                      get, update, delete
/// /plots/{id}/activities                           list, create
///
/// /activities/{id}                                 get, update, delete (auth)
///
/// /geometry/measure                                area preview (POST, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/profile", get(handlers::user::profile))
        .nest("/plots", plot::router())
        .nest("/activities", activity::router())
        .nest("/geometry", geometry::router())
}
