//! Database test fixtures and utilities
//!
//! Provides an isolated in-memory SQLite database per test, with the
//! real schema applied.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use bookshelf::server::init::init_schema;

/// Create an isolated in-memory test pool
///
/// A single connection keeps the in-memory database alive and shared
/// for the lifetime of the pool.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    init_schema(&pool)
        .await
        .expect("Failed to create test schema");

    pool
}

/// Test database fixture
///
/// Each fixture owns a fresh in-memory database; nothing is shared
/// between tests and nothing needs cleanup.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
