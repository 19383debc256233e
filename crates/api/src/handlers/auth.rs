//! Login handler.

use axum::extract::State;
use axum::Json;

use quadro_core::error::CoreError;
use quadro_core::roles::Role;
use quadro_db::models::user::{LoginRequest, LoginResponse};
use quadro_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/auth/login
///
/// Exchange username and password for a bearer token. Inactive accounts and
/// bad credentials get the same rejection, so the response does not reveal
/// which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let user = UserRepo::find_active_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid username or password".into()))
        })?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // A role the enum does not know is a data problem, not a client error.
    let role: Role = user.role.parse().map_err(|_| {
        AppError::InternalError(format!(
            "User {} has unrecognized role '{}'",
            user.id, user.role
        ))
    })?;

    let access_token = generate_access_token(user.id, role.as_str(), &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, role = %role, "User logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            access_token,
            user_id: user.id,
            role: role.as_str().to_string(),
        },
    }))
}
