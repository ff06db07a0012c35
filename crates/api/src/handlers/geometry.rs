//! Measurement preview for a polygon that has not been saved yet.

use agroplot_core::geometry::{measure, PlotMeasurement, Polygon};
use agroplot_core::validation::validate_coordinates;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;

/// Request body for `POST /geometry/measure`.
#[derive(Debug, Deserialize)]
pub struct MeasureRequest {
    pub coordinates: Polygon,
}

/// POST /api/v1/geometry/measure
///
/// Returns the same area and vertex count a plot saved with these
/// coordinates would get. Degenerate rings measure as zero.
pub async fn measure_polygon(
    _auth_user: AuthUser,
    AppJson(input): AppJson<MeasureRequest>,
) -> AppResult<Json<PlotMeasurement>> {
    validate_coordinates(&input.coordinates)?;
    Ok(Json(measure(&input.coordinates)))
}
