//! Middleware Module
//!
//! This module contains the HTTP middleware for the server. Middleware
//! functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Authentication middleware for protecting routes

pub mod auth;

pub use auth::{require_auth, AuthUser, CurrentUser};
