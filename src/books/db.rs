//! Database operations for books
//!
//! Every query here is scoped by `user_id`. A book that exists but belongs
//! to a different user is indistinguishable from one that does not exist.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::books::models::{Book, BookCreate};

/// Insert a new book owned by `user_id`
///
/// The `books.isbn` unique index rejects an ISBN already registered by any
/// user; the violation surfaces as `sqlx::Error::Database`.
pub async fn insert_book(
    pool: &SqlitePool,
    user_id: i64,
    new_book: BookCreate,
) -> Result<Book, sqlx::Error> {
    let now = Utc::now();

    let book = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (title, author, genre, isbn, publication_date, created_at, updated_at, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, author, genre, isbn, publication_date, created_at, updated_at, user_id
        "#,
    )
    .bind(&new_book.title)
    .bind(&new_book.author)
    .bind(&new_book.genre)
    .bind(&new_book.isbn)
    .bind(new_book.publication_date)
    .bind(now)
    .bind(now)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(book)
}

/// List all books owned by `user_id`, oldest first
///
/// Ordered by creation time with the ID as a tiebreak, so the order is
/// stable across requests.
pub async fn list_books(pool: &SqlitePool, user_id: i64) -> Result<Vec<Book>, sqlx::Error> {
    let books = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, author, genre, isbn, publication_date, created_at, updated_at, user_id
        FROM books
        WHERE user_id = ?
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(books)
}

/// Get one book owned by `user_id`, or None
pub async fn get_book(
    pool: &SqlitePool,
    user_id: i64,
    book_id: i64,
) -> Result<Option<Book>, sqlx::Error> {
    let book = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, author, genre, isbn, publication_date, created_at, updated_at, user_id
        FROM books
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(book_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(book)
}

/// Write back an updated book and bump its `updated_at`
///
/// The caller has already fetched the row through [`get_book`], so the
/// ownership check has passed; the WHERE clause keeps the write scoped
/// anyway.
pub async fn update_book(pool: &SqlitePool, book: &Book) -> Result<Book, sqlx::Error> {
    let now = Utc::now();

    let book = sqlx::query_as::<_, Book>(
        r#"
        UPDATE books
        SET title = ?, author = ?, genre = ?, isbn = ?, publication_date = ?, updated_at = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, title, author, genre, isbn, publication_date, created_at, updated_at, user_id
        "#,
    )
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.genre)
    .bind(&book.isbn)
    .bind(book.publication_date)
    .bind(now)
    .bind(book.id)
    .bind(book.user_id)
    .fetch_one(pool)
    .await?;

    Ok(book)
}

/// Delete one book owned by `user_id`
///
/// Returns whether a row was actually removed.
pub async fn delete_book(
    pool: &SqlitePool,
    user_id: i64,
    book_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM books
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(book_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
