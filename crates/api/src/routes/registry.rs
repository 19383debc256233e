//! Route definitions for the read-only registry listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::registry;
use crate::state::AppState;

/// Top-level registry routes.
///
/// ```text
/// GET /cohorts                          -> list_cohorts
/// GET /cohorts/{cohort_id}/assignments  -> list_cohort_assignments
/// GET /weeks                            -> list_weeks
/// GET /subjects                         -> list_subjects
/// GET /instructors                      -> list_instructors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cohorts", get(registry::list_cohorts))
        .route(
            "/cohorts/{cohort_id}/assignments",
            get(registry::list_cohort_assignments),
        )
        .route("/weeks", get(registry::list_weeks))
        .route("/subjects", get(registry::list_subjects))
        .route("/instructors", get(registry::list_instructors))
}
