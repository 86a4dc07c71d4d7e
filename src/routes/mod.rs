//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Architecture
//!
//! The routes module is organized into focused submodules:
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - API endpoint wiring
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation, CORS and tracing layers
//! └── api_routes.rs - Auth and book endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! 1. **Welcome Route** - `GET /`
//! 2. **Auth Routes** - registration and login, public
//! 3. **Book Routes** - CRUD, behind the auth middleware
//! 4. **Fallback Handler** - 404 errors

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
