//! HTML views rendered with maud.
//!
//! Each view is a pure function from a book (or list of books) to
//! markup. Interpolated text is escaped by maud, so user-supplied
//! titles and authors cannot inject HTML.

use bookshelf_store::Book;
use maud::{DOCTYPE, Markup, html};

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                h1 { (title) }
                (content)
            }
        }
    }
}

pub fn book_list(books: &[Book]) -> Markup {
    page(
        "Books",
        html! {
            table {
                thead {
                    tr {
                        th { "Title" }
                        th { "Author" }
                        th { "Actions" }
                    }
                }
                tbody {
                    @for book in books {
                        tr {
                            td { a href=(format!("/books/{}", book.id)) { (book.title) } }
                            td { (book.author) }
                            td {
                                a href=(format!("/books/{}/edit", book.id)) { "Edit" }
                                " "
                                a href=(format!("/books/{}/confirm-delete", book.id)) { "Delete" }
                            }
                        }
                    }
                }
            }
            p {
                a href="/books/new" { "Add a book" }
                " "
                a href="/books/populate" { "Populate" }
            }
        },
    )
}

pub fn book_detail(book: &Book) -> Markup {
    page(
        "Book Detail",
        html! {
            p { b { "Title: " } (book.title) }
            p { b { "Author: " } (book.author) }
            p {
                a href=(format!("/books/{}/edit", book.id)) { "Edit" }
                " "
                a href="/books" { "Back to list" }
            }
        },
    )
}

pub fn add_book_form() -> Markup {
    page(
        "Add Book",
        html! {
            form method="POST" action="/books" {
                input name="title" type="text" placeholder="Title";
                input name="author" type="text" placeholder="Author";
                button { "Create" }
            }
            p { a href="/books" { "Back to list" } }
        },
    )
}

pub fn edit_book_form(book: &Book) -> Markup {
    page(
        "Edit Book",
        html! {
            form method="POST" action=(format!("/books/{}/edit", book.id)) {
                input name="title" type="text" value=(book.title);
                input name="author" type="text" value=(book.author);
                button { "Save" }
            }
            p { a href="/books" { "Back to list" } }
        },
    )
}

pub fn confirm_delete(book: &Book) -> Markup {
    page(
        "Confirm Delete",
        html! {
            p { "Delete \"" (book.title) "\" by " (book.author) "?" }
            form method="POST" action=(format!("/books/{}/delete", book.id)) {
                button { "Delete" }
            }
            p { a href="/books" { "Cancel" } }
        },
    )
}
