//! Repository for the `cohorts` table.

use quadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::cohort::{Cohort, CreateCohort};

/// Column list for cohort queries.
const COLUMNS: &str = "id, name, year, created_at, updated_at";

/// Read/write operations for cohorts.
pub struct CohortRepo;

impl CohortRepo {
    /// Insert a new cohort, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCohort) -> Result<Cohort, sqlx::Error> {
        let query = format!(
            "INSERT INTO cohorts (name, year) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cohort>(&query)
            .bind(&input.name)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Find a cohort by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cohort>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cohorts WHERE id = $1");
        sqlx::query_as::<_, Cohort>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cohorts, ordered by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Cohort>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cohorts ORDER BY name ASC");
        sqlx::query_as::<_, Cohort>(&query).fetch_all(pool).await
    }
}
