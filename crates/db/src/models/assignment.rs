//! Subject-cohort assignment: binds one subject to one cohort with zero,
//! one, or two authorized instructors.

use quadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subject_cohort_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubjectCohortAssignment {
    pub id: DbId,
    pub subject_id: DbId,
    pub cohort_id: DbId,
    pub instructor_1_id: Option<DbId>,
    pub instructor_2_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SubjectCohortAssignment {
    /// Whether `instructor_id` is authorized by this assignment, in either
    /// instructor seat.
    pub fn authorizes(&self, instructor_id: DbId) -> bool {
        self.instructor_1_id == Some(instructor_id) || self.instructor_2_id == Some(instructor_id)
    }
}

/// An assignment joined with display names, for the cohort assignments view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentWithDetails {
    pub id: DbId,
    pub subject_id: DbId,
    pub subject_name: String,
    pub cohort_id: DbId,
    pub instructor_1_id: Option<DbId>,
    pub instructor_1_name: Option<String>,
    pub instructor_2_id: Option<DbId>,
    pub instructor_2_name: Option<String>,
}

/// DTO for creating an assignment.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub subject_id: DbId,
    pub cohort_id: DbId,
    pub instructor_1_id: Option<DbId>,
    pub instructor_2_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(first: Option<DbId>, second: Option<DbId>) -> SubjectCohortAssignment {
        SubjectCohortAssignment {
            id: 1,
            subject_id: 1,
            cohort_id: 1,
            instructor_1_id: first,
            instructor_2_id: second,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn authorizes_either_seat() {
        let a = assignment(Some(5), Some(9));
        assert!(a.authorizes(5));
        assert!(a.authorizes(9));
        assert!(!a.authorizes(7));
    }

    #[test]
    fn empty_assignment_authorizes_nobody() {
        assert!(!assignment(None, None).authorizes(5));
    }
}
