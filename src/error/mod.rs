//! Error Module
//!
//! This module defines the error types used by HTTP handlers and the
//! conversions that turn them into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - malformed input (400, with field detail)
//! - `DuplicateUsername` / `DuplicateEmail` / `DuplicateIsbn` - uniqueness
//!   conflicts (400)
//! - `InvalidCredentials` - failed login (401, deliberately vague)
//! - `Unauthenticated` - missing/invalid/expired bearer token (401)
//! - `NotFound` - absent or not-owned resource (404)
//! - `Database` / `Hash` / `TokenCreation` - internal failures (500)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers can return it directly.
//! The error is converted to a JSON body with the appropriate status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
