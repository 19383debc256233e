//! Instructor entity: the teaching profile attached to a user account.

use quadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `instructors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instructor {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: String,
    pub registration_number: String,
    pub specialization: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an instructor profile.
#[derive(Debug, Deserialize)]
pub struct CreateInstructor {
    pub user_id: DbId,
    pub full_name: String,
    pub registration_number: String,
    pub specialization: Option<String>,
}
