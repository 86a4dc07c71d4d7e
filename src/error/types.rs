/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each variant
 * maps to a fixed HTTP status code and a client-facing message.
 *
 * # Duplicate Detection
 *
 * Uniqueness of usernames, emails, and ISBNs is enforced by UNIQUE
 * constraints in the database. The `From<sqlx::Error>` implementation
 * inspects constraint violations and maps them back to the matching
 * `Duplicate*` variant, so a handler that pre-checks for duplicates and
 * still loses a race gets the same 400 response as one that hit the
 * fast path.
 *
 * # Information Leakage
 *
 * `InvalidCredentials` is shared between "no such user" and "wrong
 * password" so login responses cannot be used to enumerate usernames.
 * Ownership mismatches on books surface as `NotFound`, indistinguishable
 * from a record that never existed.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by HTTP handlers
///
/// Each variant carries enough context for logging; `status_code()` and
/// `message()` produce the client-facing view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input in a named field
    #[error("{message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A user with this username already exists
    #[error("Username already registered")]
    DuplicateUsername,

    /// A user with this email already exists
    #[error("Email already registered")]
    DuplicateEmail,

    /// Another book already carries this ISBN
    #[error("ISBN already registered")]
    DuplicateIsbn,

    /// Login failed; intentionally does not say whether the user exists
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Missing, malformed, invalid, or expired bearer token
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// The book does not exist, or is not owned by the requester
    #[error("Book not found")]
    NotFound,

    /// Unexpected database failure
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Password hashing or verification failure (corrupt stored hash)
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("token creation error: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a new validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. }
            | Self::DuplicateUsername
            | Self::DuplicateEmail
            | Self::DuplicateIsbn => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::TokenCreation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Internal failures are collapsed to a generic message; the detail is
    /// logged server-side instead of being sent to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) | Self::TokenCreation(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Map database errors onto the API taxonomy
///
/// UNIQUE constraint violations are attributed to the column that raised
/// them (SQLite reports `UNIQUE constraint failed: <table>.<column>`);
/// everything else is an internal database error.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                let message = db_err.message();
                if message.contains("users.username") {
                    return Self::DuplicateUsername;
                }
                if message.contains("users.email") {
                    return Self::DuplicateEmail;
                }
                if message.contains("books.isbn") {
                    return Self::DuplicateIsbn;
                }
            }
        }
        Self::Database(err)
    }
}
