//! Subject entity: a course with a planned total-hours budget.

use quadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    pub planned_hours: i32,
    pub cycle: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a subject.
#[derive(Debug, Deserialize)]
pub struct CreateSubject {
    pub name: String,
    pub planned_hours: i32,
    #[serde(default = "default_cycle")]
    pub cycle: i32,
}

fn default_cycle() -> i32 {
    1
}
