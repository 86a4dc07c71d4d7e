/**
 * Book Catalog Server Entry Point
 *
 * This is the main entry point for the book catalog server. It loads
 * configuration, initializes tracing, builds the Axum app, and serves it.
 */

use bookshelf::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing, honoring RUST_LOG
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Read configuration once; everything downstream receives it explicitly
    let config = ServerConfig::from_env();

    // Create the Axum app (connects the database and creates the schema)
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
