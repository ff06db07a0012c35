//! Route definitions for the `/activities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /{id} -> get_by_id
/// PUT    /{id} -> update
/// DELETE /{id} -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(activity::get_by_id)
            .put(activity::update)
            .delete(activity::delete),
    )
}
