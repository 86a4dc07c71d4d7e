/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * registration and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the username, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Registration response
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Login form body
///
/// Login is form-encoded, not JSON.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginForm {
    /// Registered username
    pub username: String,
    /// Password to verify against the stored hash
    pub password: String,
}

/// Successful login response
///
/// A bearer token the client passes back in the `Authorization` header.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}
