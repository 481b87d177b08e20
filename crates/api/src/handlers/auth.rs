//! Handlers for the `/auth` resource (admin login/logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use vodboard_core::error::CoreError;
use vodboard_core::types::DbId;
use vodboard_db::repositories::AdminUserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: AdminInfo,
}

/// Public admin info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub email: String,
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer access token.
/// Unknown email and wrong password produce the same message, so the
/// endpoint does not leak which admin accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = AdminUserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let access_token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(admin_id = user.id, "Admin logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: AdminInfo {
            id: user.id,
            email: user.email,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless, so logout is an authenticated acknowledgement; the
/// client discards its token.
pub async fn logout(admin: AuthAdmin) -> StatusCode {
    tracing::info!(admin_id = admin.user_id, "Admin logged out");
    StatusCode::NO_CONTENT
}
