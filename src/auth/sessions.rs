/**
 * Session Tokens
 *
 * This module handles JWT issuance and validation for user sessions.
 * Tokens are HS256-signed claims carrying the username as subject and an
 * absolute expiry. The signing material lives in `SessionKeys`, which is
 * built once from configuration at startup and shared through the
 * application state rather than read from the environment per call.
 *
 * # Security
 *
 * - Any mutation of the payload invalidates the signature
 * - Expiry is validated with zero leeway, so a token is rejected the
 *   moment its `exp` passes
 * - The decoder never yields claims from an unverified payload
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a token was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The expiry timestamp has passed
    #[error("token has expired")]
    Expired,
    /// Signature verification failed or the token is malformed
    #[error("invalid token")]
    Invalid,
}

/// Process-wide token signing and verification material
///
/// Holds the HS256 encoding/decoding keys derived from the configured
/// secret, plus the time-to-live applied to every issued token.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl SessionKeys {
    /// Build the signing material from a shared secret and a token TTL
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        let mut validation = Validation::default();
        // Default leeway is 60s; expiry here is exact.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            validation,
            ttl_minutes,
        }
    }

    /// Issue a signed token for a username
    ///
    /// The token expires `ttl_minutes` after issuance.
    pub fn issue(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.ttl_minutes)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
