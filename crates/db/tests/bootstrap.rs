//! Bootstrap tests: migrations apply cleanly and the schema holds the
//! invariants the rest of the stack relies on.

use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn full_bootstrap(pool: PgPool) {
    quadro_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "cohorts",
        "weeks",
        "subjects",
        "instructors",
        "subject_cohort_assignments",
        "slots",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should exist and start empty");
    }
}

/// The slots table enforces the grid bounds at the schema level.
#[sqlx::test(migrations = "./migrations")]
async fn slot_check_constraints_hold(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO slots
            (cohort_id, week_id, day_of_week, period, duration,
             subject_id, instructor_id, status)
         VALUES (1, 1, 'monday', 0, 1, 1, 1, 'pending')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "period 0 must be rejected");

    let result = sqlx::query(
        "INSERT INTO slots
            (cohort_id, week_id, day_of_week, period, duration,
             subject_id, instructor_id, status)
         VALUES (1, 1, 'funday', 1, 1, 1, 1, 'pending')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "unknown day must be rejected");
}
