//! Server-rendered CRUD web application for the bookshelf catalog.
//!
//! Request flow: the axum router dispatches on (method, path) to a
//! handler, the handler calls [`BookService`] against the record
//! store, and the result is rendered as HTML, a redirect back to the
//! list view, or a JSON error body. See [`build_router`] for the full
//! route table.

pub mod error;
mod handlers;
pub mod service;
pub mod views;

use axum::Router;
use axum::routing::{get, post};
use bookshelf_store::BookStore;
use std::sync::Arc;

pub use service::{BookService, SeedBook, ServiceError};

/// Shared state for all handlers: the service plus the seed dataset
/// used by the populate route.
#[derive(Clone)]
pub struct AppState {
    pub service: BookService,
    pub seed: Arc<Vec<SeedBook>>,
}

impl AppState {
    pub fn new(store: BookStore, seed: Vec<SeedBook>) -> Self {
        Self {
            service: BookService::new(store),
            seed: Arc::new(seed),
        }
    }
}

/// The dataset inserted by `GET /books/populate`.
pub fn default_seed() -> Vec<SeedBook> {
    vec![
        SeedBook {
            id: 1,
            title: "Flask 101".to_string(),
            author: "John Doe".to_string(),
        },
        SeedBook {
            id: 2,
            title: "Python Web Development".to_string(),
            author: "Jane Smith".to_string(),
        },
    ]
}

/// Build the application router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route("/books/new", get(handlers::add_book_form))
        .route("/books/populate", get(handlers::populate_books))
        .route("/books/{id}", get(handlers::get_book))
        .route(
            "/books/{id}/edit",
            get(handlers::edit_book_form).post(handlers::edit_book),
        )
        .route("/books/{id}/confirm-delete", get(handlers::confirm_delete))
        .route("/books/{id}/delete", post(handlers::delete_book))
        .with_state(state)
}
