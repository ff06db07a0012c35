//! Handlers for the `/plots` resource.
//!
//! `area` and `point_count` are always derived from `coordinates` on the
//! server. Clients may still send them (the drawing surface does), but the
//! values are ignored.

use agroplot_core::geometry::{measure, round_hectares, Polygon};
use agroplot_core::types::DbId;
use agroplot_core::validation::{validate_polygon, validate_required};
use agroplot_db::models::plot::{CreatePlot, Plot, PlotSummary, UpdatePlot};
use agroplot_db::repositories::PlotRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /plots`.
#[derive(Debug, Deserialize)]
pub struct CreatePlotRequest {
    pub name: String,
    pub culture: String,
    pub coordinates: Polygon,
}

/// Request body for `PUT /plots/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdatePlotRequest {
    pub name: Option<String>,
    pub culture: Option<String>,
    pub coordinates: Option<Polygon>,
}

impl UpdatePlotRequest {
    /// Validate the present fields and re-measure a replaced boundary.
    fn into_update(self) -> AppResult<UpdatePlot> {
        if let Some(name) = &self.name {
            validate_required(name, "name")?;
        }
        if let Some(culture) = &self.culture {
            validate_required(culture, "culture")?;
        }

        let mut update = UpdatePlot {
            name: self.name.map(|s| s.trim().to_string()),
            culture: self.culture.map(|s| s.trim().to_string()),
            ..Default::default()
        };

        if let Some(coordinates) = self.coordinates {
            validate_polygon(&coordinates)?;
            let m = measure(&coordinates);
            update.area = Some(m.area_ha);
            update.point_count = Some(m.point_count);
            update.coordinates = Some(coordinates);
        }
        Ok(update)
    }
}

/// GET /api/v1/plots
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Plot>>> {
    let plots = PlotRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(plots))
}

/// POST /api/v1/plots
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppJson(input): AppJson<CreatePlotRequest>,
) -> AppResult<(StatusCode, Json<Plot>)> {
    validate_required(&input.name, "name")?;
    validate_required(&input.culture, "culture")?;
    validate_polygon(&input.coordinates)?;

    let m = measure(&input.coordinates);
    let plot = PlotRepo::create(
        &state.pool,
        &CreatePlot {
            user_id: auth_user.user_id,
            name: input.name.trim().to_string(),
            culture: input.culture.trim().to_string(),
            coordinates: input.coordinates,
            area: m.area_ha,
            point_count: m.point_count,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth_user.user_id,
        plot_id = plot.id,
        area_ha = plot.area,
        point_count = plot.point_count,
        "Plot created"
    );
    Ok((StatusCode::CREATED, Json(plot)))
}

/// GET /api/v1/plots/summary
///
/// Plot count and total area for the dashboard.
pub async fn summary(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<PlotSummary>> {
    let mut summary = PlotRepo::summary_for_user(&state.pool, auth_user.user_id).await?;
    summary.total_area_ha = round_hectares(summary.total_area_ha);
    Ok(Json(summary))
}

/// GET /api/v1/plots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Plot>> {
    let plot = PlotRepo::find_by_id(&state.pool, id, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Plot", id))?;
    Ok(Json(plot))
}

/// PUT /api/v1/plots/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdatePlotRequest>,
) -> AppResult<Json<Plot>> {
    let update = input.into_update()?;
    let plot = PlotRepo::update(&state.pool, id, auth_user.user_id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Plot", id))?;

    tracing::info!(user_id = auth_user.user_id, plot_id = id, "Plot updated");
    Ok(Json(plot))
}

/// DELETE /api/v1/plots/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlotRepo::delete(&state.pool, id, auth_user.user_id).await? {
        tracing::info!(user_id = auth_user.user_id, plot_id = id, "Plot deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Plot", id))
    }
}
