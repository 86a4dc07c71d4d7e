/**
 * API Route Handlers
 *
 * This module wires the API endpoints onto the router:
 * - Authentication endpoints (register, login)
 * - Book CRUD endpoints (all behind the auth middleware)
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 *
 * ## Books
 * - `POST /books` - Create a book
 * - `GET /books` - List own books
 * - `GET /books/{id}` - Get one own book
 * - `PUT /books/{id}` - Partially update one own book
 * - `DELETE /books/{id}` - Delete one own book
 */

use axum::{middleware, Router};

use crate::auth::{login, register};
use crate::books::handlers::{create_book, delete_book, get_book, list_books, update_book};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;

/// Configure API routes
///
/// Authentication routes are public. Book routes are grouped behind a
/// single `route_layer` running the auth middleware, so there is exactly
/// one place where a request either gains a resolved user or is rejected
/// with 401. Handlers never look at the Authorization header themselves.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, needed to construct the middleware
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    // Book endpoints, all protected
    let books = Router::new()
        .route(
            "/books",
            axum::routing::post(create_book).get(list_books),
        )
        .route(
            "/books/{id}",
            axum::routing::get(get_book)
                .put(update_book)
                .delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    router
        // Authentication endpoints
        .route("/auth/register", axum::routing::post(register))
        .route("/auth/login", axum::routing::post(login))
        .merge(books)
}
