//! Repository for the `weeks` table.

use quadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::week::{CreateWeek, Week};

/// Column list for week queries.
const COLUMNS: &str = "id, name, start_date, end_date, cycle, \
    show_saturday, show_sunday, show_period_13, show_period_14, show_period_15, \
    max_periods_saturday, max_periods_sunday, created_at, updated_at";

/// Read/write operations for weeks.
pub struct WeekRepo;

impl WeekRepo {
    /// Insert a new week, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWeek) -> Result<Week, sqlx::Error> {
        let query = format!(
            "INSERT INTO weeks
                (name, start_date, end_date, cycle,
                 show_saturday, show_sunday, show_period_13, show_period_14, show_period_15,
                 max_periods_saturday, max_periods_sunday)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Week>(&query)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.cycle)
            .bind(input.show_saturday)
            .bind(input.show_sunday)
            .bind(input.show_period_13)
            .bind(input.show_period_14)
            .bind(input.show_period_15)
            .bind(input.max_periods_saturday)
            .bind(input.max_periods_sunday)
            .fetch_one(pool)
            .await
    }

    /// Find a week by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Week>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weeks WHERE id = $1");
        sqlx::query_as::<_, Week>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all weeks, most recent first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Week>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weeks ORDER BY start_date DESC");
        sqlx::query_as::<_, Week>(&query).fetch_all(pool).await
    }
}
