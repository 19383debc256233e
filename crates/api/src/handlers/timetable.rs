//! Handlers for the weekly timetable grid and slot assignment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use quadro_core::error::CoreError;
use quadro_core::grid::{build_grid, GridCell};
use quadro_core::types::DbId;
use quadro_db::models::cohort::Cohort;
use quadro_db::models::slot::AssignSlotRequest;
use quadro_db::models::week::Week;
use quadro_db::repositories::{CohortRepo, SlotRepo, WeekRepo};

use crate::engine::assignment;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// The rendered weekly grid plus the registry rows it was built for.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    pub cohort: Cohort,
    pub week: Week,
    /// 15 rows (periods) by 7 columns (Monday..Sunday).
    pub grid: Vec<Vec<GridCell>>,
}

/// GET /api/v1/timetable/{cohort_id}/{week_id}
///
/// Build the full 15x7 grid for one cohort and week. Every caller sees every
/// slot regardless of status; `can_edit` on each class cell reflects the
/// caller's own permissions.
pub async fn get_timetable(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Path((cohort_id, week_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<TimetableResponse>>> {
    let cohort = CohortRepo::find_by_id(&state.pool, cohort_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cohort",
            id: cohort_id,
        }))?;
    let week = WeekRepo::find_by_id(&state.pool, week_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Week",
            id: week_id,
        }))?;

    let slots = SlotRepo::list_for_cohort_week(&state.pool, cohort_id, week_id).await?;
    let views: Vec<_> = slots.iter().map(|s| s.to_view()).collect();

    let caller_instructor = assignment::caller_instructor_id(&state.pool, &auth).await?;
    let grid = build_grid(&views, auth.role, caller_instructor);

    Ok(Json(DataResponse {
        data: TimetableResponse { cohort, week, grid },
    }))
}

/// POST /api/v1/timetable/slots
///
/// Create a slot, or rewrite an existing one when `slot_id` is present.
/// Instructor writes land as `pending`; administrator writes as `confirmed`.
pub async fn assign_slot(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<AssignSlotRequest>,
) -> AppResult<impl IntoResponse> {
    let created = input.slot_id.is_none();
    let slot = assignment::assign_slot(&state.pool, &auth, &input).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: slot })))
}

/// DELETE /api/v1/timetable/slots/{slot_id}
///
/// Remove a slot. Administrators may remove any slot; instructors only
/// their own.
pub async fn remove_slot(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
) -> AppResult<StatusCode> {
    assignment::remove_slot(&state.pool, &auth, slot_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
