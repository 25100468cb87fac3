//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No book with the given id exists.
    #[error("book not found: {0}")]
    NotFound(i64),

    /// An explicit insert collided with an existing id.
    #[error("book id already exists: {0}")]
    DuplicateId(i64),
}
