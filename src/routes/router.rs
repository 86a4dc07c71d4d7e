/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. Root welcome route
 * 2. API routes (auth, books)
 * 3. Fallback handler (404)
 *
 * # Layers
 *
 * Per-request tracing and a permissive CORS layer wrap the whole
 * router, composed through a `ServiceBuilder` so the stack reads
 * top-down. CORS is wide open, matching a development posture; tighten
 * the allowed origins before exposing this anywhere real.
 */

use axum::{
    http::StatusCode,
    response::Json,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool and session keys
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// - `GET /` - Welcome message
/// - `POST /auth/register` - User registration
/// - `POST /auth/login` - User login
/// - `POST /books`, `GET /books` - Create and list own books
/// - `GET/PUT/DELETE /books/{id}` - Operate on one own book
///
/// Unknown routes fall through to a 404 handler.
pub fn create_router(app_state: AppState) -> Router<()> {
    // Start with the welcome route
    let router = Router::new().route("/", axum::routing::get(welcome));

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    // Use AppState as router state
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

/// Root welcome handler
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Book Management API" }))
}

/// Fallback handler for unmatched routes
///
/// Same JSON error shape as every other failure on the surface.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found", "status": 404 })),
    )
}
