//! Slot entity: one scheduled occupancy of a grid cell, plus the request
//! DTOs for the assignment engine and approval workflow.

use quadro_core::grid::SlotView;
use quadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `slots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slot {
    pub id: DbId,
    pub cohort_id: DbId,
    pub week_id: DbId,
    pub day_of_week: String,
    pub period: i16,
    pub duration: i16,
    pub subject_id: DbId,
    pub instructor_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A slot joined with its subject and instructor display names, as read by
/// the grid builder and the pending-approvals listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SlotWithDetails {
    pub id: DbId,
    pub cohort_id: DbId,
    pub week_id: DbId,
    pub day_of_week: String,
    pub period: i16,
    pub duration: i16,
    pub subject_id: DbId,
    pub subject_name: String,
    pub instructor_id: DbId,
    pub instructor_name: String,
    pub status: String,
}

impl SlotWithDetails {
    /// Project down to the grid builder's input shape.
    pub fn to_view(&self) -> SlotView {
        SlotView {
            id: self.id,
            day_of_week: self.day_of_week.clone(),
            period: self.period,
            duration: self.duration,
            subject_name: self.subject_name.clone(),
            instructor_name: self.instructor_name.clone(),
            instructor_id: self.instructor_id,
            status: self.status.clone(),
        }
    }
}

/// A pending slot with every display field the approval triage screen
/// needs, across all cohorts and weeks.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingSlot {
    pub id: DbId,
    pub cohort_id: DbId,
    pub cohort_name: String,
    pub week_id: DbId,
    pub week_name: String,
    pub day_of_week: String,
    pub period: i16,
    pub duration: i16,
    pub subject_id: DbId,
    pub subject_name: String,
    pub instructor_id: DbId,
    pub instructor_name: String,
    pub created_at: Timestamp,
}

/// Request body for the assignment engine. A present `slot_id` turns the
/// request into an update of that slot.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignSlotRequest {
    pub slot_id: Option<DbId>,
    pub cohort_id: DbId,
    pub week_id: DbId,
    pub day: String,
    pub period: i16,
    #[serde(default = "default_duration")]
    pub duration: i16,
    pub subject_id: DbId,
    /// Required for administrator callers; instructors always schedule
    /// themselves and this field is ignored for them.
    pub instructor_id: Option<DbId>,
}

fn default_duration() -> i16 {
    1
}

/// Request body for the approval workflow.
#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub action: String,
}

/// Fields written when creating or rewriting a slot. Built by the engine
/// after validation; not deserialized from the wire.
#[derive(Debug, Clone)]
pub struct SlotWrite {
    pub cohort_id: DbId,
    pub week_id: DbId,
    pub day_of_week: String,
    pub period: i16,
    pub duration: i16,
    pub subject_id: DbId,
    pub instructor_id: DbId,
    pub status: String,
}
