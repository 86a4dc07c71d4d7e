/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate username format, email format and password length
 * 2. Check whether the username or email is already taken
 * 3. Hash the password using bcrypt
 * 4. Create the user in the database
 * 5. Return a confirmation message
 *
 * # Duplicates
 *
 * The existence checks give friendly errors on the common path, but the
 * `users.username` and `users.email` unique indexes are what actually
 * enforce uniqueness. If two registrations race, the losing INSERT fails
 * with a constraint violation that maps to the same duplicate error the
 * pre-check would have produced.
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - Registration does not issue a token; clients log in afterwards
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::auth::passwords::hash_password;
use crate::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::error::ApiError;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Registration handler
///
/// This handler processes user registration requests. It validates the
/// input, stores a new user account with a hashed password, and returns a
/// confirmation message.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Registration request containing username, email and password
///
/// # Returns
///
/// JSON confirmation message, or an `ApiError`
///
/// # Errors
///
/// * `400 Bad Request` - If a field fails validation, or the username or
///   email is already registered
/// * `500 Internal Server Error` - If password hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "reader1",
///   "email": "reader1@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User registered successfully" }
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    tracing::info!(
        "Registration request for username: {}, email: {}",
        request.username,
        request.email
    );

    // Validate username format
    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err(ApiError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    // Validate email format (basic check)
    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::validation("email", "Invalid email format"));
    }

    // Validate password length
    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }

    // Check if username already exists
    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::DuplicateUsername);
    }

    // Check if email already exists
    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::DuplicateEmail);
    }

    // Hash password
    let password_hash = hash_password(&request.password)?;

    // Create user; a constraint violation here still maps to the right
    // duplicate error if another request won the race
    let user = create_user(&pool, request.username, request.email, password_hash).await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
    }))
}
