//! Repository for the `subjects` table.

use quadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::subject::{CreateSubject, Subject};

/// Column list for subject queries.
const COLUMNS: &str = "id, name, planned_hours, cycle, created_at, updated_at";

/// Read/write operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSubject) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (name, planned_hours, cycle)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.name)
            .bind(input.planned_hours)
            .bind(input.cycle)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all subjects, ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects ORDER BY name ASC");
        sqlx::query_as::<_, Subject>(&query).fetch_all(pool).await
    }
}
