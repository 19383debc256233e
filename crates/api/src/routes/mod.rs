pub mod approval;
pub mod auth;
pub mod health;
pub mod quota;
pub mod registry;
pub mod timetable;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                            login (public)
///
/// /timetable/{cohort_id}/{week_id}       weekly grid (GET)
/// /timetable/slots                       create or rewrite a slot (POST)
/// /timetable/slots/{slot_id}             remove a slot (DELETE)
///
/// /approvals/pending                     pending slots, oldest first (GET, admin)
/// /approvals/{slot_id}                   approve or deny (POST, admin)
///
/// /quota/{subject_id}/{cohort_id}        hour quota summary (GET)
///
/// /cohorts                               list cohorts (GET)
/// /cohorts/{cohort_id}/assignments       cohort's subject assignments (GET)
/// /weeks                                 list weeks (GET)
/// /subjects                              list subjects (GET)
/// /instructors                           list instructors (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login only; account management lives elsewhere).
        .nest("/auth", auth::router())
        // The weekly grid and slot assignment.
        .nest("/timetable", timetable::router())
        // Administrator approval workflow.
        .nest("/approvals", approval::router())
        // Advisory hour quotas.
        .nest("/quota", quota::router())
        // Read-only registry listings.
        .merge(registry::router())
}
