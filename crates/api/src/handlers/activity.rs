//! Handlers for plot activities.
//!
//! Listing and creation are nested under `/plots/{plot_id}/activities`;
//! single-activity reads and writes live at `/activities/{id}`. All of them
//! resolve ownership through the parent plot.

use agroplot_core::types::DbId;
use agroplot_core::validation::validate_required;
use agroplot_db::models::activity::{Activity, CreateActivity, UpdateActivity};
use agroplot_db::repositories::{ActivityRepo, PlotRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /plots/{plot_id}/activities`.
#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub activity_name: String,
    #[serde(default)]
    pub activity_details: Option<String>,
    /// `YYYY-MM-DD`.
    pub activity_date: NaiveDate,
}

/// Request body for `PUT /activities/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateActivityRequest {
    pub activity_name: Option<String>,
    pub activity_details: Option<String>,
    pub activity_date: Option<NaiveDate>,
}

/// 404 unless the plot exists and belongs to the caller.
async fn ensure_plot_owned(state: &AppState, plot_id: DbId, user_id: DbId) -> AppResult<()> {
    PlotRepo::find_by_id(&state.pool, plot_id, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Plot", plot_id))?;
    Ok(())
}

/// GET /api/v1/plots/{plot_id}/activities
pub async fn list_by_plot(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(plot_id): Path<DbId>,
) -> AppResult<Json<Vec<Activity>>> {
    ensure_plot_owned(&state, plot_id, auth_user.user_id).await?;
    let activities = ActivityRepo::list_by_plot(&state.pool, plot_id, auth_user.user_id).await?;
    Ok(Json(activities))
}

/// POST /api/v1/plots/{plot_id}/activities
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(plot_id): Path<DbId>,
    AppJson(input): AppJson<CreateActivityRequest>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    validate_required(&input.activity_name, "activity_name")?;
    ensure_plot_owned(&state, plot_id, auth_user.user_id).await?;

    let activity = ActivityRepo::create(
        &state.pool,
        &CreateActivity {
            plot_id,
            activity_name: input.activity_name.trim().to_string(),
            activity_details: input.activity_details.unwrap_or_default(),
            activity_date: input.activity_date,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth_user.user_id,
        plot_id,
        activity_id = activity.id,
        "Activity created"
    );
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/v1/activities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Activity>> {
    let activity = ActivityRepo::find_by_id(&state.pool, id, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Activity", id))?;
    Ok(Json(activity))
}

/// PUT /api/v1/activities/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateActivityRequest>,
) -> AppResult<Json<Activity>> {
    if let Some(name) = &input.activity_name {
        validate_required(name, "activity_name")?;
    }

    let update = UpdateActivity {
        activity_name: input.activity_name.map(|s| s.trim().to_string()),
        activity_details: input.activity_details,
        activity_date: input.activity_date,
    };
    let activity = ActivityRepo::update(&state.pool, id, auth_user.user_id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Activity", id))?;
    Ok(Json(activity))
}

/// DELETE /api/v1/activities/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ActivityRepo::delete(&state.pool, id, auth_user.user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Activity", id))
    }
}
