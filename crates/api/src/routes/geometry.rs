//! Route definitions for the `/geometry` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::geometry;
use crate::state::AppState;

/// Routes mounted at `/geometry`.
///
/// ```text
/// POST /measure -> measure_polygon
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/measure", post(geometry::measure_polygon))
}
