//! Plot entity model and DTOs.

use agroplot_core::geometry::Polygon;
use agroplot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A plot row from the `plots` table.
///
/// `coordinates` is stored as JSONB and serialized back as `[[lng, lat], ...]`.
/// `area` is in hectares.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Plot {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub culture: String,
    pub coordinates: Json<Polygon>,
    pub area: f64,
    pub point_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a plot. `area` and `point_count` come from
/// `agroplot_core::geometry::measure`, never from the client.
#[derive(Debug, Clone)]
pub struct CreatePlot {
    pub user_id: DbId,
    pub name: String,
    pub culture: String,
    pub coordinates: Polygon,
    pub area: f64,
    pub point_count: i32,
}

/// DTO for updating a plot. All fields are optional; when `coordinates` is
/// set, `area` and `point_count` must be set alongside it.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlot {
    pub name: Option<String>,
    pub culture: Option<String>,
    pub coordinates: Option<Polygon>,
    pub area: Option<f64>,
    pub point_count: Option<i32>,
}

/// Aggregate over a user's plots for the dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlotSummary {
    pub plot_count: i64,
    /// Sum of plot areas in hectares.
    pub total_area_ha: f64,
}
