/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: database connection, schema creation, state assembly, and
 * route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool (creating the database file if missing)
 * 2. Ensure the schema exists
 * 3. Build the token signing material from configuration
 * 4. Assemble the application state
 * 5. Create the router
 *
 * # Schema
 *
 * The schema is created with `CREATE TABLE IF NOT EXISTS` on every
 * startup, so a fresh database and a restarted one take the same path.
 * There is no migration machinery; the two tables below are the whole
 * schema.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::auth::sessions::SessionKeys;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Server configuration built in `main`
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database cannot be opened or the schema cannot be
/// created. The catalog cannot run without its database, so startup
/// stops here rather than limping on.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing book catalog server");

    // Step 1: Connect the database pool
    let db_pool = connect_database(&config.database_url).await?;

    // Step 2: Ensure the schema exists
    init_schema(&db_pool).await?;

    // Step 3: Build the token signing material
    let session_keys = SessionKeys::new(&config.jwt_secret, config.token_ttl_minutes);

    // Step 4: Create app state
    let app_state = AppState {
        db_pool,
        session_keys,
    };

    // Step 5: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}

/// Create the database schema if it does not exist
///
/// Idempotent; safe to run on every startup. Uniqueness of usernames,
/// emails and ISBNs is enforced here, by the database, rather than by
/// application-level checks.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT,
            isbn TEXT UNIQUE,
            publication_date TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Every book query filters on the owner
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_books_user_id ON books (user_id)")
        .execute(pool)
        .await?;

    tracing::info!("Database schema ready");

    Ok(())
}
