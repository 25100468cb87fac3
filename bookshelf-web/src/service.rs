//! Validated catalog operations on top of the record store.

use bookshelf_store::{Book, BookStore, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No book with the given id exists.
    #[error("book not found: {0}")]
    NotFound(i64),

    /// A required field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A seed entry with a fixed id, supplied as configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBook {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Catalog operations with presence validation.
///
/// The one invariant enforced here: a persisted book never has an empty
/// title or author. Everything else is delegated to the store.
#[derive(Clone)]
pub struct BookService {
    store: BookStore,
}

impl BookService {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// Returns all books in insertion order.
    pub fn list_books(&self) -> Result<Vec<Book>, ServiceError> {
        Ok(self.store.get_all()?)
    }

    /// Looks up a single book, `None` if absent.
    pub fn find_book(&self, id: i64) -> Result<Option<Book>, ServiceError> {
        Ok(self.store.get_by_id(id)?)
    }

    /// Creates a book with a store-assigned id.
    pub fn create_book(&self, title: &str, author: &str) -> Result<Book, ServiceError> {
        validate(title, author)?;
        Ok(self.store.insert(title, author)?)
    }

    /// Replaces title and author of an existing book. Idempotent.
    pub fn update_book(&self, id: i64, title: &str, author: &str) -> Result<Book, ServiceError> {
        if self.store.get_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound(id));
        }
        validate(title, author)?;
        self.store.update(id, title, author)?;
        Ok(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    /// Deletes a book by id.
    pub fn delete_book(&self, id: i64) -> Result<(), ServiceError> {
        match self.store.delete(id) {
            Err(StoreError::NotFound(id)) => Err(ServiceError::NotFound(id)),
            other => Ok(other?),
        }
    }

    /// Inserts each seed entry under its fixed id, skipping ids that
    /// already exist. Idempotent; returns the number of rows inserted.
    pub fn seed(&self, books: &[SeedBook]) -> Result<usize, ServiceError> {
        let mut inserted = 0;
        for book in books {
            match self.store.insert_with_id(book.id, &book.title, &book.author) {
                Ok(_) => inserted += 1,
                Err(StoreError::DuplicateId(id)) => {
                    warn!("book {} already exists, skipping insertion", id);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(inserted)
    }
}

fn validate(title: &str, author: &str) -> Result<(), ServiceError> {
    if title.is_empty() {
        return Err(ServiceError::EmptyField("title"));
    }
    if author.is_empty() {
        return Err(ServiceError::EmptyField("author"));
    }
    Ok(())
}
