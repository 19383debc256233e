//! Read-only registry listings: cohorts, weeks, subjects, instructors, and
//! the subject-cohort assignments of one cohort. These feed the scheduling
//! client's pickers.

use axum::extract::{Path, State};
use axum::Json;

use quadro_core::error::CoreError;
use quadro_core::types::DbId;
use quadro_db::models::assignment::AssignmentWithDetails;
use quadro_db::models::cohort::Cohort;
use quadro_db::models::instructor::Instructor;
use quadro_db::models::subject::Subject;
use quadro_db::models::week::Week;
use quadro_db::repositories::{
    AssignmentRepo, CohortRepo, InstructorRepo, SubjectRepo, WeekRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cohorts
pub async fn list_cohorts(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Cohort>>>> {
    let cohorts = CohortRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: cohorts }))
}

/// GET /api/v1/weeks
pub async fn list_weeks(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Week>>>> {
    let weeks = WeekRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: weeks }))
}

/// GET /api/v1/subjects
pub async fn list_subjects(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Subject>>>> {
    let subjects = SubjectRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: subjects }))
}

/// GET /api/v1/instructors
pub async fn list_instructors(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Instructor>>>> {
    let instructors = InstructorRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: instructors }))
}

/// GET /api/v1/cohorts/{cohort_id}/assignments
///
/// The subject-cohort assignments of one cohort, with subject and
/// instructor display names.
pub async fn list_cohort_assignments(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
    Path(cohort_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<AssignmentWithDetails>>>> {
    CohortRepo::find_by_id(&state.pool, cohort_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cohort",
            id: cohort_id,
        }))?;

    let assignments = AssignmentRepo::list_for_cohort(&state.pool, cohort_id).await?;
    Ok(Json(DataResponse { data: assignments }))
}
