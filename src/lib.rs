//! Bookshelf - Main Library
//!
//! Bookshelf is a minimal multi-user book catalog service built with Axum.
//! Users register and log in, then manage book records they own over a
//! JSON HTTP API authenticated with bearer tokens.
//!
//! # Overview
//!
//! This library provides:
//! - User registration and login (bcrypt password hashing, JWT sessions)
//! - Ownership-scoped CRUD on book records backed by SQLite
//! - A single authentication middleware protecting every book route
//!
//! # Module Structure
//!
//! - **`auth`** - Users, passwords, session tokens, and the auth handlers
//! - **`books`** - Book model, database operations, and CRUD handlers
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - The `ApiError` taxonomy and its HTTP conversion
//! - **`routes`** - Router assembly
//! - **`server`** - Configuration, state, and app initialization
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookshelf::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Authentication: users, credentials, tokens, handlers
pub mod auth;

/// Book catalog: model, persistence, handlers
pub mod books;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Request middleware
pub mod middleware;

/// Router assembly
pub mod routes;

/// Configuration, state, and initialization
pub mod server;
