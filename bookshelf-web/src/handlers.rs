//! Route handlers: one function per (method, path) pair.
//!
//! Each handler parses its parameters, calls the book service, and
//! turns the outcome into HTML, a redirect, or a JSON error response.

use crate::AppState;
use crate::error::ApiError;
use crate::views;
use axum::Form;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use maud::Markup;
use serde::Deserialize;

/// Form body for create and edit. Fields default to empty strings so
/// a missing field fails presence validation instead of extraction.
#[derive(Debug, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

/// 302 back to the list view. axum's `Redirect` helpers emit 303/307,
/// and this surface promises a literal 302 Found.
fn redirect_to_books() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/books")]).into_response()
}

pub async fn hello() -> &'static str {
    "Hello, Bookshelf!"
}

pub async fn list_books(State(state): State<AppState>) -> Result<Markup, ApiError> {
    let books = state
        .service
        .list_books()
        .map_err(|e| ApiError::from_service("Error listing books", e))?;
    Ok(views::book_list(&books))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Markup, ApiError> {
    let book = state
        .service
        .find_book(id)
        .map_err(|e| ApiError::from_service("Error loading book", e))?
        .ok_or(ApiError::NotFound)?;
    Ok(views::book_detail(&book))
}

pub async fn add_book_form() -> Markup {
    views::add_book_form()
}

pub async fn create_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> Result<Response, ApiError> {
    state
        .service
        .create_book(&form.title, &form.author)
        .map_err(|e| ApiError::Internal {
            context: "Error creating book",
            source: e,
        })?;
    Ok(redirect_to_books())
}

pub async fn edit_book_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Markup, ApiError> {
    let book = state
        .service
        .find_book(id)
        .map_err(|e| ApiError::from_service("Error loading book", e))?
        .ok_or(ApiError::NotFound)?;
    Ok(views::edit_book_form(&book))
}

pub async fn edit_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<BookForm>,
) -> Result<Response, ApiError> {
    state
        .service
        .update_book(id, &form.title, &form.author)
        .map_err(|e| ApiError::from_service("Error editing book", e))?;
    Ok(redirect_to_books())
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Markup, ApiError> {
    let book = state
        .service
        .find_book(id)
        .map_err(|e| ApiError::from_service("Error loading book", e))?
        .ok_or(ApiError::NotFound)?;
    Ok(views::confirm_delete(&book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    state
        .service
        .delete_book(id)
        .map_err(|e| ApiError::from_service("Error deleting book", e))?;
    Ok(redirect_to_books())
}

pub async fn populate_books(State(state): State<AppState>) -> Result<Response, ApiError> {
    state.service.seed(&state.seed).map_err(|e| ApiError::Internal {
        context: "Error populating books",
        source: e,
    })?;
    Ok(redirect_to_books())
}
