//! Cohort entity: a named group of students sharing one weekly timetable.

use quadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cohorts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cohort {
    pub id: DbId,
    pub name: String,
    pub year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a cohort.
#[derive(Debug, Deserialize)]
pub struct CreateCohort {
    pub name: String,
    pub year: Option<i32>,
}
