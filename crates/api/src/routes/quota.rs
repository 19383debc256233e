//! Route definitions for the `/quota` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::quota;
use crate::state::AppState;

/// Routes mounted at `/quota`.
///
/// ```text
/// GET /{subject_id}/{cohort_id}   -> get_quota
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{subject_id}/{cohort_id}", get(quota::get_quota))
}
