//! User account consumed by authentication. Account management itself is
//! handled elsewhere; this service only reads credentials and roles.

use quadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
///
/// `password_hash` is intentionally not serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: a bearer token plus basic identity for the client.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: DbId,
    pub role: String,
}
