//! HTTP-level integration tests for the read-only registry listings.

mod common;

use axum::http::StatusCode;
use common::{expect_success, get_auth, token_for};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn registry_listings_return_seeded_rows(pool: PgPool) {
    let user = common::seed_user(&pool, "viewer", "student").await;
    let (_, profile) = common::seed_instructor(&pool, "teacher").await;
    let cohort_id = common::seed_cohort(&pool, "Cohort A").await;
    common::seed_week(&pool, "Week 10").await;
    let subject_id = common::seed_subject(&pool, "Electronics", 40).await;
    common::seed_assignment(&pool, subject_id, cohort_id, profile.id).await;
    let token = token_for(&user);

    let app = common::build_test_app(pool.clone());
    let json = expect_success(get_auth(app, "/api/v1/cohorts", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Cohort A");

    let app = common::build_test_app(pool.clone());
    let json = expect_success(get_auth(app, "/api/v1/weeks", &token).await).await;
    assert_eq!(json["data"][0]["name"], "Week 10");

    let app = common::build_test_app(pool.clone());
    let json = expect_success(get_auth(app, "/api/v1/subjects", &token).await).await;
    assert_eq!(json["data"][0]["planned_hours"], 40);

    let app = common::build_test_app(pool.clone());
    let json = expect_success(get_auth(app, "/api/v1/instructors", &token).await).await;
    assert_eq!(json["data"][0]["id"], profile.id);

    // Cohort assignments come back with display names joined in.
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/cohorts/{cohort_id}/assignments");
    let json = expect_success(get_auth(app, &uri, &token).await).await;
    assert_eq!(json["data"][0]["subject_name"], "Electronics");
    assert_eq!(json["data"][0]["instructor_1_name"], "Instructor teacher");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn assignments_for_unknown_cohort_is_404(pool: PgPool) {
    let user = common::seed_user(&pool, "viewer", "student").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/cohorts/999999/assignments", &token_for(&user)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
