//! Route definitions for the `/approvals` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::approval;
use crate::state::AppState;

/// Routes mounted at `/approvals`. All require the administrator role.
///
/// ```text
/// GET  /pending     -> list_pending
/// POST /{slot_id}   -> decide_slot (approve or deny)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(approval::list_pending))
        .route("/{slot_id}", post(approval::decide_slot))
}
