//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! session tokens. It provides the HTTP handlers for authentication
//! endpoints and manages user data and bearer tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - Token issuance and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - Password hashing
//! ├── sessions.rs     - Token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: User provides username, email and password → User created
//! 2. **Login**: Credentials verified → Bearer token returned
//! 3. **Protected routes**: Token verified by middleware → User resolved from the database

/// User data model and database operations
pub mod users;

/// Password hashing and verification
pub mod passwords;

/// Token issuance and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginForm, RegisterRequest, RegisterResponse, TokenResponse};
pub use handlers::{login, register};
pub use sessions::SessionKeys;
