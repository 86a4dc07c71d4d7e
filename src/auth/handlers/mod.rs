//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for authentication endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - Credential verification and token issuance
//!
//! # Authentication Flow
//!
//! 1. **Register**: User provides username, email and password → User created
//! 2. **Login**: User provides username and password → Credentials verified → Bearer token returned
//! 3. **Protected routes**: Client sends `Authorization: Bearer <token>` → Middleware resolves the user
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Bearer tokens are used for stateless authentication
//! - Invalid credentials return 401 (no information leakage)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginForm, RegisterRequest, RegisterResponse, TokenResponse};

// Re-export handlers
pub use login::login;
pub use register::register;
