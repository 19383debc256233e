//! Handlers for the slot approval workflow.
//!
//! Pending slots are visible in the grid to everyone; these endpoints let an
//! administrator triage them: approve promotes to `confirmed`, deny removes
//! the slot entirely.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use quadro_core::approval::ApprovalAction;
use quadro_core::error::CoreError;
use quadro_core::slots::SlotStatus;
use quadro_core::types::DbId;
use quadro_db::models::slot::{ApprovalRequest, PendingSlot};
use quadro_db::repositories::SlotRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdministrator;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/approvals/pending
///
/// All pending slots across every cohort and week, oldest first. Requires
/// the administrator role.
pub async fn list_pending(
    RequireAdministrator(_auth): RequireAdministrator,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PendingSlot>>>> {
    let pending = SlotRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: pending }))
}

/// POST /api/v1/approvals/{slot_id}
///
/// Decide a pending slot. Body: `{"action": "approve"}` or
/// `{"action": "deny"}`. Approve returns the confirmed slot; deny deletes
/// the slot and returns 204.
pub async fn decide_slot(
    RequireAdministrator(auth): RequireAdministrator,
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
    Json(input): Json<ApprovalRequest>,
) -> AppResult<Response> {
    let action: ApprovalAction = input
        .action
        .parse()
        .map_err(|e: String| AppError::Core(CoreError::Validation(e)))?;

    match action {
        ApprovalAction::Approve => {
            let slot =
                SlotRepo::set_status(&state.pool, slot_id, SlotStatus::Confirmed.as_str())
                    .await?
                    .ok_or(AppError::Core(CoreError::NotFound {
                        entity: "Slot",
                        id: slot_id,
                    }))?;

            tracing::info!(slot_id, user_id = auth.user_id, "Slot approved");
            Ok(Json(DataResponse { data: slot }).into_response())
        }
        ApprovalAction::Deny => {
            let removed = SlotRepo::delete(&state.pool, slot_id).await?;
            if !removed {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Slot",
                    id: slot_id,
                }));
            }

            tracing::info!(slot_id, user_id = auth.user_id, "Slot denied and removed");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}
