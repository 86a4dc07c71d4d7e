/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies bearer tokens from the
 * Authorization header and provides the resolved user to handlers.
 *
 * Every failure along the chain (missing header, malformed scheme, bad
 * signature, expired token, unknown subject) produces the same 401
 * response with a `WWW-Authenticate: Bearer` challenge.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user resolved from a bearer token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiry
/// 3. Resolves the token subject to a user row
/// 4. Attaches the user to request extensions for use in handlers
///
/// Returns 401 Unauthorized if any step fails. The database lookup means
/// a token for a deleted account stops working immediately.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthenticated
    })?;

    // Verify token
    let claims = state.session_keys.decode(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        ApiError::Unauthenticated
    })?;

    // Resolve the subject to a user row
    let user = get_user_by_username(&state.db_pool, &claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", claims.sub);
            ApiError::Unauthenticated
        })?;

    // Attach authenticated user to request extensions
    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// This can be used as a parameter in handlers to automatically extract
/// the authenticated user that the middleware placed in request
/// extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub CurrentUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser not found in request extensions");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
