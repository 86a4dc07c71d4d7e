/**
 * Book Models
 *
 * This module defines the book record stored in the database and the
 * request/response types used by the book handlers.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Book struct representing a book in the database
///
/// Every book belongs to exactly one user; `user_id` scopes all queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    /// Unique book ID (auto-incremented)
    pub id: i64,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Genre (optional)
    pub genre: Option<String>,
    /// ISBN (optional; unique across all users when present)
    pub isbn: Option<String>,
    /// Publication date (optional, calendar date)
    pub publication_date: Option<NaiveDate>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
    /// Owning user's ID
    pub user_id: i64,
}

/// Create book request
///
/// Only title and author are required.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookCreate {
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Genre (optional)
    pub genre: Option<String>,
    /// ISBN (optional)
    pub isbn: Option<String>,
    /// Publication date (optional)
    pub publication_date: Option<NaiveDate>,
}

/// Partial update request
///
/// Every field is optional; fields left out (or set to null) keep their
/// stored value. There is no way to clear an optional field back to null
/// through an update.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookUpdate {
    /// New title, if changing
    pub title: Option<String>,
    /// New author, if changing
    pub author: Option<String>,
    /// New genre, if changing
    pub genre: Option<String>,
    /// New ISBN, if changing
    pub isbn: Option<String>,
    /// New publication date, if changing
    pub publication_date: Option<NaiveDate>,
}

impl BookUpdate {
    /// Overlay the supplied fields onto an existing book
    ///
    /// Fields that are `None` leave the book untouched.
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(genre) = self.genre {
            book.genre = Some(genre);
        }
        if let Some(isbn) = self.isbn {
            book.isbn = Some(isbn);
        }
        if let Some(publication_date) = self.publication_date {
            book.publication_date = Some(publication_date);
        }
    }
}

/// Delete confirmation response
#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteResponse {
    /// Human-readable confirmation
    pub message: String,
}
