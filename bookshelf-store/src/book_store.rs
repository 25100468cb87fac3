//! The `books` table and its CRUD operations.

use crate::error::{StoreError, StoreResult};
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A catalog entry. The sole entity of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Persistent store for books backed by SQLite.
///
/// Cloning is cheap; clones share the same connection. The internal
/// mutex serializes access, so each operation is atomic with respect
/// to every other.
#[derive(Clone)]
pub struct BookStore {
    conn: Arc<Mutex<Connection>>,
}

impl BookStore {
    /// Opens (or creates) a store at the given path and ensures the schema exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Returns all books in insertion order.
    pub fn get_all(&self) -> StoreResult<Vec<Book>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, title, author FROM books ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Book {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
            })
        })?;
        let mut books = Vec::new();
        for row in rows {
            books.push(row?);
        }
        Ok(books)
    }

    /// Looks up a single book by id.
    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Book>> {
        let conn = self.conn.lock().unwrap();
        let book = conn
            .query_row(
                "SELECT id, title, author FROM books WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Book {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        author: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(book)
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Inserts a book with a store-assigned id and returns the new record.
    pub fn insert(&self, title: &str, author: &str) -> StoreResult<Book> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO books (title, author) VALUES (?1, ?2)",
            params![title, author],
        )?;
        Ok(Book {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    /// Inserts a book with an explicit id, as used when seeding.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id is already taken.
    pub fn insert_with_id(&self, id: i64, title: &str, author: &str) -> StoreResult<Book> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO books (id, title, author) VALUES (?1, ?2, ?3)",
            params![id, title, author],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(inner, _)
                if inner.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::DuplicateId(id)
            }
            other => StoreError::Database(other),
        })?;
        Ok(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    /// Overwrites title and author of an existing book. The id is immutable.
    pub fn update(&self, id: i64, title: &str, author: &str) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute(
            "UPDATE books SET title = ?1, author = ?2 WHERE id = ?3",
            params![title, author, id],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Removes a book by id.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
