/**
 * Login Handler
 *
 * This module implements the login handler for POST /auth/login.
 *
 * # Login Process
 *
 * 1. Look up the user by username
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a signed bearer token carrying the username
 *
 * # Security
 *
 * Unknown usernames and wrong passwords produce the same 401 response,
 * so a caller cannot probe which usernames exist. The distinction is
 * only visible in the server logs.
 */

use axum::{extract::State, response::Json, Form};

use crate::auth::handlers::types::{LoginForm, TokenResponse};
use crate::auth::passwords::verify_password;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies form-encoded credentials and returns a bearer token on success.
///
/// # Arguments
///
/// * `State(state)` - Application state (pool and signing keys)
/// * `Form(form)` - Login form containing username and password
///
/// # Returns
///
/// JSON `{access_token, token_type}` or an `ApiError`
///
/// # Errors
///
/// * `401 Unauthorized` - If the username is unknown or the password is wrong
/// * `500 Internal Server Error` - If the lookup, hash verification, or
///   token signing fails
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login attempt for username: {}", form.username);

    let user = match get_user_by_username(&state.db_pool, &form.username).await? {
        Some(user) => user,
        None => {
            tracing::warn!("Login failed, unknown username: {}", form.username);
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&form.password, &user.password_hash)? {
        tracing::warn!("Login failed, password mismatch for username: {}", form.username);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = state.session_keys.issue(&user.username)?;

    tracing::info!("Login successful for username: {}", user.username);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
