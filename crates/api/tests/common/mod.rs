//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full production router (same middleware stack as `main.rs`)
//! against the per-test database pool provided by `#[sqlx::test]`, plus
//! small request/response helpers and seed functions for the timetable
//! domain.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use quadro_api::auth::jwt::{generate_access_token, JwtConfig};
use quadro_api::auth::password::hash_password;
use quadro_api::config::ServerConfig;
use quadro_api::router::build_app_router;
use quadro_api::state::AppState;
use quadro_core::types::DbId;
use quadro_db::models::cohort::CreateCohort;
use quadro_db::models::instructor::{CreateInstructor, Instructor};
use quadro_db::models::subject::CreateSubject;
use quadro_db::models::user::User;
use quadro_db::models::week::CreateWeek;
use quadro_db::repositories::{
    AssignmentRepo, CohortRepo, InstructorRepo, SubjectRepo, UserRepo, WeekRepo,
};

/// The plaintext password used for every seeded test user.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors `main.rs` exactly.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A bearer token for the given user, signed with the test secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert the standard error envelope and return its `code`.
pub async fn error_code(response: Response<Body>) -> String {
    let json = body_json(response).await;
    assert!(json["error"].is_string(), "error body must have a message");
    json["code"].as_str().expect("error body must have a code").to_string()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a user with the given role and [`TEST_PASSWORD`].
pub async fn seed_user(pool: &PgPool, username: &str, role: &str) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(pool, username, &hashed, role)
        .await
        .expect("user creation should succeed")
}

/// Create an instructor user plus their instructor profile.
pub async fn seed_instructor(pool: &PgPool, username: &str) -> (User, Instructor) {
    let user = seed_user(pool, username, "instructor").await;
    let profile = InstructorRepo::create(
        pool,
        &CreateInstructor {
            user_id: user.id,
            full_name: format!("Instructor {username}"),
            registration_number: format!("REG-{username}"),
            specialization: None,
        },
    )
    .await
    .expect("instructor creation should succeed");
    (user, profile)
}

pub async fn seed_cohort(pool: &PgPool, name: &str) -> DbId {
    CohortRepo::create(
        pool,
        &CreateCohort {
            name: name.to_string(),
            year: Some(2026),
        },
    )
    .await
    .expect("cohort creation should succeed")
    .id
}

/// Create a week with weekdays only: Saturday and Sunday hidden, periods
/// 13-15 hidden.
pub async fn seed_week(pool: &PgPool, name: &str) -> DbId {
    seed_week_with(pool, name, |_| {}).await
}

/// Create a week, letting the caller adjust the visibility flags first.
pub async fn seed_week_with(
    pool: &PgPool,
    name: &str,
    adjust: impl FnOnce(&mut CreateWeek),
) -> DbId {
    let mut input = CreateWeek {
        name: name.to_string(),
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        end_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
        cycle: 1,
        show_saturday: false,
        show_sunday: false,
        show_period_13: false,
        show_period_14: false,
        show_period_15: false,
        max_periods_saturday: 0,
        max_periods_sunday: 0,
    };
    adjust(&mut input);
    WeekRepo::create(pool, &input)
        .await
        .expect("week creation should succeed")
        .id
}

pub async fn seed_subject(pool: &PgPool, name: &str, planned_hours: i32) -> DbId {
    SubjectRepo::create(
        pool,
        &CreateSubject {
            name: name.to_string(),
            planned_hours,
            cycle: 1,
        },
    )
    .await
    .expect("subject creation should succeed")
    .id
}

/// Assign an instructor to teach a subject in a cohort.
pub async fn seed_assignment(
    pool: &PgPool,
    subject_id: DbId,
    cohort_id: DbId,
    instructor_id: DbId,
) {
    AssignmentRepo::create(
        pool,
        &quadro_db::models::assignment::CreateAssignment {
            subject_id,
            cohort_id,
            instructor_1_id: Some(instructor_id),
            instructor_2_id: None,
        },
    )
    .await
    .expect("assignment creation should succeed");
}

/// Expect a 2xx and complain loudly with the body otherwise.
pub async fn expect_success(response: Response<Body>) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert!(
        status.is_success(),
        "expected success, got {status}: {json}"
    );
    json
}
