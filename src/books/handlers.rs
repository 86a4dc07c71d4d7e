/**
 * Book Handlers
 *
 * This module implements the CRUD handlers for /books. All routes here sit
 * behind the authentication middleware, so every handler starts from a
 * resolved `AuthUser` and scopes its queries to that user.
 *
 * # Ownership
 *
 * A book ID belonging to another user is treated exactly like a missing
 * one: the handler returns 404. Existence of other users' books is never
 * revealed.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::books::db;
use crate::books::models::{Book, BookCreate, BookUpdate, DeleteResponse};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Create book handler
///
/// Stores a new book owned by the authenticated user and returns the
/// stored representation.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `user` - Authenticated user resolved by the middleware
/// * `Json(request)` - New book fields (title and author required)
///
/// # Returns
///
/// `201 Created` with the stored book
///
/// # Errors
///
/// * `400 Bad Request` - If title or author is empty, or the ISBN is
///   already registered
/// * `401 Unauthorized` - If the request is not authenticated
pub async fn create_book(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Json(request): Json<BookCreate>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    tracing::info!("Create book '{}' for user: {}", request.title, user.0.username);

    if request.title.trim().is_empty() {
        return Err(ApiError::validation("title", "Title must not be empty"));
    }
    if request.author.trim().is_empty() {
        return Err(ApiError::validation("author", "Author must not be empty"));
    }

    let book = db::insert_book(&pool, user.0.id, request).await?;

    tracing::info!("Book {} created for user: {}", book.id, user.0.username);

    Ok((StatusCode::CREATED, Json(book)))
}

/// List books handler
///
/// Returns every book owned by the authenticated user, oldest first.
pub async fn list_books(
    State(pool): State<SqlitePool>,
    user: AuthUser,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = db::list_books(&pool, user.0.id).await?;

    tracing::debug!("Listed {} books for user: {}", books.len(), user.0.username);

    Ok(Json(books))
}

/// Get book handler
///
/// Returns one owned book, or 404 if the ID does not resolve to a book
/// owned by the authenticated user.
pub async fn get_book(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Path(book_id): Path<i64>,
) -> Result<Json<Book>, ApiError> {
    let book = db::get_book(&pool, user.0.id, book_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(book))
}

/// Update book handler
///
/// Applies a partial update to one owned book. Fields left out of the
/// request keep their stored values; `updated_at` is bumped on every
/// successful update.
///
/// # Errors
///
/// * `400 Bad Request` - If a supplied title or author is empty, or the
///   new ISBN is already registered
/// * `404 Not Found` - If the ID does not resolve to an owned book
pub async fn update_book(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Path(book_id): Path<i64>,
    Json(request): Json<BookUpdate>,
) -> Result<Json<Book>, ApiError> {
    tracing::info!("Update book {} for user: {}", book_id, user.0.username);

    if let Some(title) = &request.title {
        if title.trim().is_empty() {
            return Err(ApiError::validation("title", "Title must not be empty"));
        }
    }
    if let Some(author) = &request.author {
        if author.trim().is_empty() {
            return Err(ApiError::validation("author", "Author must not be empty"));
        }
    }

    let mut book = db::get_book(&pool, user.0.id, book_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    request.apply(&mut book);
    let book = db::update_book(&pool, &book).await?;

    Ok(Json(book))
}

/// Delete book handler
///
/// Removes one owned book and confirms the deletion.
pub async fn delete_book(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Path(book_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    tracing::info!("Delete book {} for user: {}", book_id, user.0.username);

    if !db::delete_book(&pool, user.0.id, book_id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(DeleteResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
