/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The token signing and verification material
 *
 * Both are built once at startup and read-only afterwards; cloning the
 * state clones two handles, not the underlying resources.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they need instead of the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::SessionKeys;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Token signing and verification material
    pub session_keys: SessionKeys,
}

/// Implement FromRef for the connection pool
///
/// This allows handlers that only touch the database to take
/// `State(pool): State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the session keys
///
/// This allows handlers that only issue or verify tokens to take
/// `State(keys): State<SessionKeys>`.
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}
