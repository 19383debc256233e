//! Hour quota handler.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use quadro_core::error::CoreError;
use quadro_core::quota::QuotaSummary;
use quadro_core::types::DbId;
use quadro_db::repositories::{CohortRepo, SlotRepo, SubjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Quota summary plus the names the client displays next to it.
#[derive(Debug, Serialize)]
pub struct QuotaResponse {
    pub subject_id: DbId,
    pub subject_name: String,
    pub cohort_id: DbId,
    pub cohort_name: String,
    #[serde(flatten)]
    pub quota: QuotaSummary,
}

/// GET /api/v1/quota/{subject_id}/{cohort_id}
///
/// Planned hours for the subject against confirmed hours scheduled for the
/// cohort. Pending slots do not count. The quota is advisory: exceeding it
/// never blocks an assignment.
pub async fn get_quota(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
    Path((subject_id, cohort_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<QuotaResponse>>> {
    let subject = SubjectRepo::find_by_id(&state.pool, subject_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id: subject_id,
        }))?;
    let cohort = CohortRepo::find_by_id(&state.pool, cohort_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cohort",
            id: cohort_id,
        }))?;

    let consumed = SlotRepo::sum_confirmed_duration(&state.pool, subject_id, cohort_id).await?;
    let quota = QuotaSummary::new(subject.planned_hours, consumed);

    Ok(Json(DataResponse {
        data: QuotaResponse {
            subject_id,
            subject_name: subject.name,
            cohort_id,
            cohort_name: cohort.name,
            quota,
        },
    }))
}
