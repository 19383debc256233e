//! Repository for the `slots` table.
//!
//! Pool-based readers serve the grid, quota, and approval listings. The
//! write path methods take `&mut PgConnection` so the assignment engine can
//! run its conflict check and write inside one transaction; nothing is
//! visible to other requests until that transaction commits.

use quadro_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::slot::{PendingSlot, Slot, SlotWithDetails, SlotWrite};

/// Column list for slot queries.
const COLUMNS: &str = "id, cohort_id, week_id, day_of_week, period, duration, \
    subject_id, instructor_id, status, created_at, updated_at";

/// Shared SELECT for the joined detail shape.
const DETAIL_SELECT: &str = "SELECT
        sl.id,
        sl.cohort_id,
        sl.week_id,
        sl.day_of_week,
        sl.period,
        sl.duration,
        sl.subject_id,
        su.name AS subject_name,
        sl.instructor_id,
        i.full_name AS instructor_name,
        sl.status
     FROM slots sl
     JOIN subjects su ON su.id = sl.subject_id
     JOIN instructors i ON i.id = sl.instructor_id";

/// Read/write operations for scheduled slots.
pub struct SlotRepo;

impl SlotRepo {
    /// Find a slot by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Slot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slots WHERE id = $1");
        sqlx::query_as::<_, Slot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a slot by ID inside a transaction, locking the row for update.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Slot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slots WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Slot>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// All slots of one (cohort, week) with display names, for the grid.
    pub async fn list_for_cohort_week(
        pool: &PgPool,
        cohort_id: DbId,
        week_id: DbId,
    ) -> Result<Vec<SlotWithDetails>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE sl.cohort_id = $1 AND sl.week_id = $2
             ORDER BY sl.day_of_week, sl.period"
        );
        sqlx::query_as::<_, SlotWithDetails>(&query)
            .bind(cohort_id)
            .bind(week_id)
            .fetch_all(pool)
            .await
    }

    /// All pending slots across every cohort and week, oldest first, for
    /// administrator triage.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<PendingSlot>, sqlx::Error> {
        sqlx::query_as::<_, PendingSlot>(
            "SELECT
                sl.id,
                sl.cohort_id,
                c.name AS cohort_name,
                sl.week_id,
                w.name AS week_name,
                sl.day_of_week,
                sl.period,
                sl.duration,
                sl.subject_id,
                su.name AS subject_name,
                sl.instructor_id,
                i.full_name AS instructor_name,
                sl.created_at
             FROM slots sl
             JOIN cohorts c ON c.id = sl.cohort_id
             JOIN weeks w ON w.id = sl.week_id
             JOIN subjects su ON su.id = sl.subject_id
             JOIN instructors i ON i.id = sl.instructor_id
             WHERE sl.status = 'pending'
             ORDER BY sl.created_at ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Find any slot whose span overlaps the given span in the same cell
    /// column. Runs inside the assignment transaction.
    ///
    /// Overlap counts every period a multi-period slot covers, not just its
    /// start cell: an existing `(period = 3, duration = 3)` slot blocks a
    /// new slot at period 4 or 5. `exclude_id` lets the update path ignore
    /// the slot being moved, so a rewrite never collides with itself.
    pub async fn find_overlapping(
        conn: &mut PgConnection,
        cohort_id: DbId,
        week_id: DbId,
        day_of_week: &str,
        period: i16,
        duration: i16,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Slot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM slots
             WHERE cohort_id = $1
               AND week_id = $2
               AND day_of_week = $3
               AND period <= $4 + $5 - 1
               AND period + duration - 1 >= $4
               AND ($6::BIGINT IS NULL OR id <> $6)
             LIMIT 1"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(cohort_id)
            .bind(week_id)
            .bind(day_of_week)
            .bind(period)
            .bind(duration)
            .bind(exclude_id)
            .fetch_optional(conn)
            .await
    }

    /// Insert a new slot inside the assignment transaction.
    pub async fn insert(conn: &mut PgConnection, write: &SlotWrite) -> Result<Slot, sqlx::Error> {
        let query = format!(
            "INSERT INTO slots
                (cohort_id, week_id, day_of_week, period, duration,
                 subject_id, instructor_id, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(write.cohort_id)
            .bind(write.week_id)
            .bind(&write.day_of_week)
            .bind(write.period)
            .bind(write.duration)
            .bind(write.subject_id)
            .bind(write.instructor_id)
            .bind(&write.status)
            .fetch_one(conn)
            .await
    }

    /// Rewrite every field of an existing slot inside the assignment
    /// transaction. The status is reset to the caller's creation status.
    pub async fn rewrite(
        conn: &mut PgConnection,
        id: DbId,
        write: &SlotWrite,
    ) -> Result<Slot, sqlx::Error> {
        let query = format!(
            "UPDATE slots SET
                cohort_id = $2,
                week_id = $3,
                day_of_week = $4,
                period = $5,
                duration = $6,
                subject_id = $7,
                instructor_id = $8,
                status = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(id)
            .bind(write.cohort_id)
            .bind(write.week_id)
            .bind(&write.day_of_week)
            .bind(write.period)
            .bind(write.duration)
            .bind(write.subject_id)
            .bind(write.instructor_id)
            .bind(&write.status)
            .fetch_one(conn)
            .await
    }

    /// Set a slot's approval status, returning the updated row if it exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Slot>, sqlx::Error> {
        let query = format!(
            "UPDATE slots SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slot>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slot. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum the durations of confirmed slots for a (subject, cohort) pair.
    /// Pending slots are excluded by definition.
    pub async fn sum_confirmed_duration(
        pool: &PgPool,
        subject_id: DbId,
        cohort_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (sum,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(duration), 0)::BIGINT FROM slots
             WHERE subject_id = $1 AND cohort_id = $2 AND status = 'confirmed'",
        )
        .bind(subject_id)
        .bind(cohort_id)
        .fetch_one(pool)
        .await?;
        Ok(sum)
    }
}
