//! Repository for the `activities` table.
//!
//! Activities carry no owner column of their own; every query joins
//! `plots` and filters on `plots.user_id`.

use agroplot_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{Activity, CreateActivity, UpdateActivity};

/// Column list qualified with the `a` alias used in every query.
const COLUMNS: &str = "a.id, a.plot_id, a.activity_name, a.activity_details, \
                       a.activity_date, a.created_at, a.updated_at";

/// Provides CRUD operations for plot activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    ///
    /// Callers must have verified that the plot belongs to the requesting user.
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities AS a (plot_id, activity_name, activity_details, activity_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.plot_id)
            .bind(&input.activity_name)
            .bind(&input.activity_details)
            .bind(input.activity_date)
            .fetch_one(pool)
            .await
    }

    /// List a plot's activities, most recent `activity_date` first.
    pub async fn list_by_plot(
        pool: &PgPool,
        plot_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM activities a
             JOIN plots p ON p.id = a.plot_id
             WHERE a.plot_id = $1 AND p.user_id = $2
             ORDER BY a.activity_date DESC, a.id DESC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(plot_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find an activity by ID, only if its plot belongs to `user_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM activities a
             JOIN plots p ON p.id = a.plot_id
             WHERE a.id = $1 AND p.user_id = $2"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update an activity. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the activity does not exist or its plot belongs to
    /// another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE activities AS a SET
                activity_name = COALESCE($3, a.activity_name),
                activity_details = COALESCE($4, a.activity_details),
                activity_date = COALESCE($5, a.activity_date)
             FROM plots p
             WHERE a.id = $1 AND p.id = a.plot_id AND p.user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.activity_name)
            .bind(&input.activity_details)
            .bind(input.activity_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an activity. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM activities a
             USING plots p
             WHERE a.id = $1 AND p.id = a.plot_id AND p.user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
