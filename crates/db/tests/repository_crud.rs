//! Integration tests for the user, plot and activity repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create and look up users
//! - Plot CRUD scoped by owner
//! - Activity scoping through the owning plot
//! - Cascade delete and schema constraints

use agroplot_core::geometry::{measure, LngLat, Polygon};
use agroplot_db::models::activity::{CreateActivity, UpdateActivity};
use agroplot_db::models::plot::{CreatePlot, UpdatePlot};
use agroplot_db::models::user::{CreateUser, User};
use agroplot_db::repositories::{ActivityRepo, PlotRepo, UserRepo};
use chrono::NaiveDate;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            name: "Farmer".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

fn triangle() -> Polygon {
    Polygon::from(vec![
        LngLat::new(-47.0, -22.0),
        LngLat::new(-47.001, -22.0),
        LngLat::new(-47.0005, -22.001),
    ])
}

fn new_plot(user_id: i64, name: &str) -> CreatePlot {
    let coordinates = triangle();
    let m = measure(&coordinates);
    CreatePlot {
        user_id,
        name: name.to_string(),
        culture: "Soja".to_string(),
        coordinates,
        area: m.area_ha,
        point_count: m.point_count,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_activity(plot_id: i64, name: &str, on: NaiveDate) -> CreateActivity {
    CreateActivity {
        plot_id,
        activity_name: name.to_string(),
        activity_details: String::new(),
        activity_date: on,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_lookup_by_email_and_id(pool: PgPool) {
    let user = new_user(&pool, "teste@gmail.com").await;

    let by_email = UserRepo::find_by_email(&pool, "teste@gmail.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    let by_id = UserRepo::find_by_id(&pool, user.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.email), Some("teste@gmail.com".to_string()));

    assert!(UserRepo::find_by_email(&pool, "ghost@test.com").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_violates_unique_constraint(pool: PgPool) {
    new_user(&pool, "dup@test.com").await;
    let err = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Other".to_string(),
            email: "dup@test.com".to_string(),
            password_hash: "x".to_string(),
        },
    )
    .await
    .expect_err("duplicate email must fail");

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_email"));
}

// ---------------------------------------------------------------------------
// Plots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_plot_create_round_trips_coordinates(pool: PgPool) {
    let user = new_user(&pool, "plots@test.com").await;
    let input = new_plot(user.id, "Talhão 1");

    let plot = PlotRepo::create(&pool, &input).await.unwrap();
    assert_eq!(plot.user_id, user.id);
    assert_eq!(plot.coordinates.0, triangle());
    assert_eq!(plot.point_count, 3);
    assert_eq!(plot.area, input.area);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_plots_are_scoped_to_owner(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let intruder = new_user(&pool, "intruder@test.com").await;
    let plot = PlotRepo::create(&pool, &new_plot(owner.id, "Mine")).await.unwrap();

    assert!(PlotRepo::find_by_id(&pool, plot.id, intruder.id).await.unwrap().is_none());
    assert!(PlotRepo::list_by_user(&pool, intruder.id).await.unwrap().is_empty());

    let update = UpdatePlot {
        name: Some("Stolen".to_string()),
        ..Default::default()
    };
    assert!(PlotRepo::update(&pool, plot.id, intruder.id, &update).await.unwrap().is_none());
    assert!(!PlotRepo::delete(&pool, plot.id, intruder.id).await.unwrap());

    let still_there = PlotRepo::find_by_id(&pool, plot.id, owner.id).await.unwrap().unwrap();
    assert_eq!(still_there.name, "Mine");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_plot_list_newest_first(pool: PgPool) {
    let user = new_user(&pool, "list@test.com").await;
    let first = PlotRepo::create(&pool, &new_plot(user.id, "First")).await.unwrap();
    let second = PlotRepo::create(&pool, &new_plot(user.id, "Second")).await.unwrap();

    let plots = PlotRepo::list_by_user(&pool, user.id).await.unwrap();
    let ids: Vec<i64> = plots.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_plot_partial_update_keeps_other_fields(pool: PgPool) {
    let user = new_user(&pool, "update@test.com").await;
    let plot = PlotRepo::create(&pool, &new_plot(user.id, "Before")).await.unwrap();

    let update = UpdatePlot {
        culture: Some("Milho".to_string()),
        ..Default::default()
    };
    let updated = PlotRepo::update(&pool, plot.id, user.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Before");
    assert_eq!(updated.culture, "Milho");
    assert_eq!(updated.area, plot.area);
    assert!(updated.updated_at >= plot.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_point_count_must_match_coordinates(pool: PgPool) {
    let user = new_user(&pool, "check@test.com").await;
    let mut input = new_plot(user.id, "Broken");
    input.point_count = 7;

    let err = PlotRepo::create(&pool, &input).await.expect_err("check must fail");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("ck_plots_point_count"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_plot_summary_totals_area(pool: PgPool) {
    let user = new_user(&pool, "summary@test.com").await;

    let empty = PlotRepo::summary_for_user(&pool, user.id).await.unwrap();
    assert_eq!(empty.plot_count, 0);
    assert_eq!(empty.total_area_ha, 0.0);

    let a = PlotRepo::create(&pool, &new_plot(user.id, "A")).await.unwrap();
    let b = PlotRepo::create(&pool, &new_plot(user.id, "B")).await.unwrap();

    let summary = PlotRepo::summary_for_user(&pool, user.id).await.unwrap();
    assert_eq!(summary.plot_count, 2);
    assert!((summary.total_area_ha - (a.area + b.area)).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activities_ordered_by_date_desc(pool: PgPool) {
    let user = new_user(&pool, "acts@test.com").await;
    let plot = PlotRepo::create(&pool, &new_plot(user.id, "Field")).await.unwrap();

    ActivityRepo::create(&pool, &new_activity(plot.id, "Plantio", date(2024, 9, 1)))
        .await
        .unwrap();
    ActivityRepo::create(&pool, &new_activity(plot.id, "Adubação", date(2024, 10, 15)))
        .await
        .unwrap();

    let activities = ActivityRepo::list_by_plot(&pool, plot.id, user.id).await.unwrap();
    let names: Vec<&str> = activities.iter().map(|a| a.activity_name.as_str()).collect();
    assert_eq!(names, vec!["Adubação", "Plantio"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activities_scoped_through_plot_owner(pool: PgPool) {
    let owner = new_user(&pool, "a-owner@test.com").await;
    let intruder = new_user(&pool, "a-intruder@test.com").await;
    let plot = PlotRepo::create(&pool, &new_plot(owner.id, "Field")).await.unwrap();
    let activity = ActivityRepo::create(&pool, &new_activity(plot.id, "Colheita", date(2025, 2, 1)))
        .await
        .unwrap();

    assert!(ActivityRepo::list_by_plot(&pool, plot.id, intruder.id).await.unwrap().is_empty());
    assert!(ActivityRepo::find_by_id(&pool, activity.id, intruder.id).await.unwrap().is_none());

    let update = UpdateActivity {
        activity_details: Some("tampered".to_string()),
        ..Default::default()
    };
    assert!(ActivityRepo::update(&pool, activity.id, intruder.id, &update)
        .await
        .unwrap()
        .is_none());
    assert!(!ActivityRepo::delete(&pool, activity.id, intruder.id).await.unwrap());

    let updated = ActivityRepo::update(&pool, activity.id, owner.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.activity_details, "tampered");
    assert_eq!(updated.activity_name, "Colheita");

    assert!(ActivityRepo::delete(&pool, activity.id, owner.id).await.unwrap());
    assert!(ActivityRepo::find_by_id(&pool, activity.id, owner.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_plot_cascades_to_activities(pool: PgPool) {
    let user = new_user(&pool, "cascade@test.com").await;
    let plot = PlotRepo::create(&pool, &new_plot(user.id, "Gone")).await.unwrap();
    let activity = ActivityRepo::create(&pool, &new_activity(plot.id, "Pulverização", date(2025, 1, 5)))
        .await
        .unwrap();

    assert!(PlotRepo::delete(&pool, plot.id, user.id).await.unwrap());

    let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities WHERE id = $1")
        .bind(activity.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining.0, 0);
}
