/**
 * Server Configuration
 *
 * This module loads server configuration from the environment into an
 * explicit `ServerConfig` struct. Everything is read once at startup;
 * nothing else in the crate touches environment variables, so every
 * setting a request handler sees arrived through `AppState`.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (a `.env` file is
 * honored via dotenv in `main`), with defaults for local development.
 * The JWT secret default is insecure on purpose and logged loudly.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default SQLite database, created on first run
pub const DEFAULT_DATABASE_URL: &str = "sqlite:bookshelf.db?mode=rwc";

const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 8;
const DEFAULT_PORT: u16 = 3000;

/// Server configuration
///
/// Built once in `main` and passed into `create_app`.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Lifetime of an issued token, in minutes
    pub token_ttl_minutes: i64,
    /// TCP port the server listens on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Reads `DATABASE_URL`, `JWT_SECRET`, `TOKEN_TTL_MINUTES` and
    /// `SERVER_PORT`. Missing or unparseable values fall back to local
    /// development defaults, each fallback logged.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using an insecure development default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let token_ttl_minutes = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            database_url,
            jwt_secret,
            token_ttl_minutes,
            port,
        }
    }
}

/// Create the SQLite connection pool
///
/// The database file is created if it does not exist, and foreign keys
/// are enabled on every connection.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if the URL is malformed or the
/// connection fails. Unlike optional services, the catalog cannot run
/// without its database, so the caller treats this as fatal.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
