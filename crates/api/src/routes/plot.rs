//! Route definitions for the `/plots` resource.
//!
//! Also nests activity listing and creation under `/plots/{id}/activities`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{activity, plot};
use crate::state::AppState;

/// Routes mounted at `/plots`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /summary                   -> summary
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/activities           -> activity::list_by_plot
/// POST   /{id}/activities           -> activity::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plot::list).post(plot::create))
        .route("/summary", get(plot::summary))
        .route(
            "/{id}",
            get(plot::get_by_id).put(plot::update).delete(plot::delete),
        )
        .route(
            "/{id}/activities",
            get(activity::list_by_plot).post(activity::create),
        )
}
