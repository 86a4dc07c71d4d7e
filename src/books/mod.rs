//! Books Module
//!
//! This module implements the book catalog: the record model, the
//! ownership-scoped database operations, and the CRUD handlers mounted
//! under /books.
//!
//! # Module Structure
//!
//! ```text
//! books/
//! ├── mod.rs      - Module exports and documentation
//! ├── models.rs   - Book record and request/response types
//! ├── db.rs       - Ownership-scoped database operations
//! └── handlers.rs - CRUD handlers
//! ```
//!
//! # Ownership
//!
//! Every book belongs to the user who created it. All reads and writes
//! are scoped to the authenticated user; another user's book ID behaves
//! like a missing one (404).

/// Book record and request/response types
pub mod models;

/// Database operations for books
pub mod db;

/// CRUD handlers
pub mod handlers;

// Re-export commonly used types
pub use models::{Book, BookCreate, BookUpdate, DeleteResponse};
