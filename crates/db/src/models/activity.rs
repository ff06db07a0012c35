//! Plot activity model and DTOs.

use agroplot_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// An activity row from the `activities` table (fertilization, spraying, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub plot_id: DbId,
    pub activity_name: String,
    pub activity_details: String,
    pub activity_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an activity on a plot.
#[derive(Debug, Clone)]
pub struct CreateActivity {
    pub plot_id: DbId,
    pub activity_name: String,
    pub activity_details: String,
    pub activity_date: NaiveDate,
}

/// DTO for updating an activity. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateActivity {
    pub activity_name: Option<String>,
    pub activity_details: Option<String>,
    pub activity_date: Option<NaiveDate>,
}
