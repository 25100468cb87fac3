//! SQLite record store for the bookshelf catalog.
//!
//! Provides persistent storage for [`Book`] records in a single table,
//! keyed by an auto-incrementing integer id. The schema is created on
//! open, so callers never deal with migrations.
//!
//! Every mutation runs in SQLite autocommit mode: when a call returns,
//! the change is committed and visible to the next caller.

mod book_store;
mod error;

pub use book_store::{Book, BookStore};
pub use error::{StoreError, StoreResult};
