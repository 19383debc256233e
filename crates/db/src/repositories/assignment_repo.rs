//! Repository for the `subject_cohort_assignments` table.

use quadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::{
    AssignmentWithDetails, CreateAssignment, SubjectCohortAssignment,
};

/// Column list for assignment queries.
const COLUMNS: &str = "id, subject_id, cohort_id, instructor_1_id, instructor_2_id, \
    created_at, updated_at";

/// Read/write operations for subject-cohort assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<SubjectCohortAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO subject_cohort_assignments
                (subject_id, cohort_id, instructor_1_id, instructor_2_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubjectCohortAssignment>(&query)
            .bind(input.subject_id)
            .bind(input.cohort_id)
            .bind(input.instructor_1_id)
            .bind(input.instructor_2_id)
            .fetch_one(pool)
            .await
    }

    /// Find the assignment for a (subject, cohort) pair, if any.
    pub async fn find_for_subject_cohort(
        pool: &PgPool,
        subject_id: DbId,
        cohort_id: DbId,
    ) -> Result<Option<SubjectCohortAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM subject_cohort_assignments
             WHERE subject_id = $1 AND cohort_id = $2"
        );
        sqlx::query_as::<_, SubjectCohortAssignment>(&query)
            .bind(subject_id)
            .bind(cohort_id)
            .fetch_optional(pool)
            .await
    }

    /// List all assignments for a cohort, with display names, ordered by
    /// subject name.
    pub async fn list_for_cohort(
        pool: &PgPool,
        cohort_id: DbId,
    ) -> Result<Vec<AssignmentWithDetails>, sqlx::Error> {
        sqlx::query_as::<_, AssignmentWithDetails>(
            "SELECT
                a.id,
                a.subject_id,
                s.name AS subject_name,
                a.cohort_id,
                a.instructor_1_id,
                i1.full_name AS instructor_1_name,
                a.instructor_2_id,
                i2.full_name AS instructor_2_name
             FROM subject_cohort_assignments a
             JOIN subjects s ON s.id = a.subject_id
             LEFT JOIN instructors i1 ON i1.id = a.instructor_1_id
             LEFT JOIN instructors i2 ON i2.id = a.instructor_2_id
             WHERE a.cohort_id = $1
             ORDER BY s.name ASC",
        )
        .bind(cohort_id)
        .fetch_all(pool)
        .await
    }
}
