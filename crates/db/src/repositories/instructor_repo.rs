//! Repository for the `instructors` table.

use quadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::instructor::{CreateInstructor, Instructor};

/// Column list for instructor queries.
const COLUMNS: &str =
    "id, user_id, full_name, registration_number, specialization, created_at, updated_at";

/// Read/write operations for instructor profiles.
pub struct InstructorRepo;

impl InstructorRepo {
    /// Insert a new instructor profile, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInstructor,
    ) -> Result<Instructor, sqlx::Error> {
        let query = format!(
            "INSERT INTO instructors (user_id, full_name, registration_number, specialization)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instructor>(&query)
            .bind(input.user_id)
            .bind(&input.full_name)
            .bind(&input.registration_number)
            .bind(&input.specialization)
            .fetch_one(pool)
            .await
    }

    /// Find an instructor by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors WHERE id = $1");
        sqlx::query_as::<_, Instructor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the instructor profile belonging to a user account, if any.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors WHERE user_id = $1");
        sqlx::query_as::<_, Instructor>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all instructors, ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Instructor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors ORDER BY full_name ASC");
        sqlx::query_as::<_, Instructor>(&query).fetch_all(pool).await
    }
}
