//! Repository for the `plots` table.
//!
//! Every query is scoped by `user_id`; a plot owned by another user behaves
//! exactly like a missing one.

use agroplot_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::plot::{CreatePlot, Plot, PlotSummary, UpdatePlot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, name, culture, coordinates, area, point_count, created_at, updated_at";

/// Provides CRUD operations for plots.
pub struct PlotRepo;

impl PlotRepo {
    /// Insert a new plot, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlot) -> Result<Plot, sqlx::Error> {
        let query = format!(
            "INSERT INTO plots (user_id, name, culture, coordinates, area, point_count)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plot>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.culture)
            .bind(Json(&input.coordinates))
            .bind(input.area)
            .bind(input.point_count)
            .fetch_one(pool)
            .await
    }

    /// List a user's plots, most recently created first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Plot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM plots WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Plot>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a plot by ID, only if it belongs to `user_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Plot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plots WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Plot>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a plot. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists for `user_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdatePlot,
    ) -> Result<Option<Plot>, sqlx::Error> {
        let query = format!(
            "UPDATE plots SET
                name = COALESCE($3, name),
                culture = COALESCE($4, culture),
                coordinates = COALESCE($5, coordinates),
                area = COALESCE($6, area),
                point_count = COALESCE($7, point_count)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plot>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.culture)
            .bind(input.coordinates.as_ref().map(Json))
            .bind(input.area)
            .bind(input.point_count)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plot (and, by cascade, its activities). Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plots WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count a user's plots and total their area in hectares.
    pub async fn summary_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<PlotSummary, sqlx::Error> {
        sqlx::query_as::<_, PlotSummary>(
            "SELECT COUNT(*) AS plot_count,
                    COALESCE(SUM(area), 0)::DOUBLE PRECISION AS total_area_ha
             FROM plots
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
