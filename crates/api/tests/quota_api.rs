//! HTTP-level integration tests for the hour quota endpoint.

mod common;

use axum::http::StatusCode;
use common::{expect_success, get_auth, post_json_auth, token_for};
use sqlx::PgPool;

/// Only confirmed hours count against the quota; pending ones do not.
#[sqlx::test(migrations = "../db/migrations")]
async fn quota_counts_confirmed_hours_only(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin", "administrator").await;
    let (teacher, profile) = common::seed_instructor(&pool, "teacher").await;
    let cohort_id = common::seed_cohort(&pool, "Cohort A").await;
    let week_id = common::seed_week(&pool, "Week 10").await;
    let subject_id = common::seed_subject(&pool, "Electronics", 10).await;
    common::seed_assignment(&pool, subject_id, cohort_id, profile.id).await;
    let admin_token = token_for(&admin);

    // Confirmed: 3 hours (admin-created).
    let app = common::build_test_app(pool.clone());
    expect_success(
        post_json_auth(
            app,
            "/api/v1/timetable/slots",
            &admin_token,
            serde_json::json!({
                "cohort_id": cohort_id,
                "week_id": week_id,
                "day": "monday",
                "period": 1,
                "duration": 3,
                "subject_id": subject_id,
                "instructor_id": profile.id,
            }),
        )
        .await,
    )
    .await;

    // Pending: 2 hours (instructor-created), must not count.
    let app = common::build_test_app(pool.clone());
    expect_success(
        post_json_auth(
            app,
            "/api/v1/timetable/slots",
            &token_for(&teacher),
            serde_json::json!({
                "cohort_id": cohort_id,
                "week_id": week_id,
                "day": "tuesday",
                "period": 1,
                "duration": 2,
                "subject_id": subject_id,
            }),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/quota/{subject_id}/{cohort_id}");
    let json = expect_success(get_auth(app, &uri, &admin_token).await).await;

    assert_eq!(json["data"]["planned"], 10);
    assert_eq!(json["data"]["consumed"], 3);
    assert_eq!(json["data"]["remaining"], 7);
    assert_eq!(json["data"]["subject_name"], "Electronics");
    assert_eq!(json["data"]["cohort_name"], "Cohort A");
}

/// Overshooting the plan floors remaining at zero instead of going negative.
#[sqlx::test(migrations = "../db/migrations")]
async fn quota_remaining_floors_at_zero(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin", "administrator").await;
    let (_, profile) = common::seed_instructor(&pool, "teacher").await;
    let cohort_id = common::seed_cohort(&pool, "Cohort A").await;
    let week_id = common::seed_week(&pool, "Week 10").await;
    let subject_id = common::seed_subject(&pool, "Welding", 2).await;
    let admin_token = token_for(&admin);

    // 3 confirmed hours against a 2-hour plan. The quota is advisory, so the
    // assignment itself goes through.
    let app = common::build_test_app(pool.clone());
    expect_success(
        post_json_auth(
            app,
            "/api/v1/timetable/slots",
            &admin_token,
            serde_json::json!({
                "cohort_id": cohort_id,
                "week_id": week_id,
                "day": "monday",
                "period": 1,
                "duration": 3,
                "subject_id": subject_id,
                "instructor_id": profile.id,
            }),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/quota/{subject_id}/{cohort_id}");
    let json = expect_success(get_auth(app, &uri, &admin_token).await).await;

    assert_eq!(json["data"]["consumed"], 3);
    assert_eq!(json["data"]["remaining"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn quota_for_unknown_subject_is_404(pool: PgPool) {
    let admin = common::seed_user(&pool, "admin", "administrator").await;
    let cohort_id = common::seed_cohort(&pool, "Cohort A").await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/v1/quota/999999/{cohort_id}");
    let response = get_auth(app, &uri, &token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
