//! Route definitions for the `/timetable` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::timetable;
use crate::state::AppState;

/// Routes mounted at `/timetable`.
///
/// ```text
/// GET    /{cohort_id}/{week_id}   -> get_timetable
/// POST   /slots                   -> assign_slot (create or rewrite)
/// DELETE /slots/{slot_id}         -> remove_slot
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slots", post(timetable::assign_slot))
        .route(
            "/slots/{slot_id}",
            axum::routing::delete(timetable::remove_slot),
        )
        .route("/{cohort_id}/{week_id}", get(timetable::get_timetable))
}
