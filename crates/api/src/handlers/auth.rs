//! Handlers for registration and login.
//!
//! Tokens issued here are not required by any product route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Message returned when either credential is missing or blank.
const MSG_CREDENTIALS_REQUIRED: &str = "Username and password are required.";

/// Message returned for an unknown user or a wrong password.
const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register` and `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Check both fields are present and non-empty, then take them.
    fn into_parts(self) -> AppResult<(String, String)> {
        let invalid = || AppError::Core(CoreError::Validation(MSG_CREDENTIALS_REQUIRED.into()));

        self.validate().map_err(|_| invalid())?;
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(invalid()),
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub username: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create an account. A taken username surfaces as 409 through the
/// `uq_users_username` constraint.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let (username, password) = input.into_parts()?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(&state.pool, &username, &password_hash).await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully.")),
    ))
}

/// POST /api/login
///
/// Verify credentials and issue an access token. Bad credentials are a 400.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let (username, password) = input.into_parts()?;

    let invalid = || AppError::Core(CoreError::Validation(MSG_INVALID_CREDENTIALS.into()));

    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    let access_token = generate_access_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful!".into(),
        access_token,
        username: user.username,
    }))
}
