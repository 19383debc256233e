//! Repository for the `users` table. Read-mostly: account management lives
//! outside this service.

use quadro_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list for user queries.
const COLUMNS: &str = "id, username, password_hash, role, is_active, created_at, updated_at";

/// Read operations for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active user by username, for login.
    pub async fn find_active_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1 AND is_active");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user row. Used by tests and seed tooling.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(password_hash)
            .bind(role)
            .fetch_one(pool)
            .await
    }
}
