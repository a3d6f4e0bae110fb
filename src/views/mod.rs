//! HTML views, rendered with Maud.
//!
//! Each view function returns finished `Markup`; handlers pass in
//! already-loaded data, so rendering itself cannot fail.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

const STYLESHEET: &str = "\
body{font-family:sans-serif;margin:0}\
.container{display:flex;min-height:100vh}\
.sidebar{width:200px;padding:1em;background:#f4f4f4}\
.sidebar ul{list-style:none;padding:0}\
.content{flex:1;padding:1em 2em}\
.form-group{margin-bottom:1em}\
.form-group label{display:block;margin-bottom:.25em}\
.errors{color:#b00}\
.status-available{color:#080}\
.status-maintenance{color:#b00}\
";

/// Common page chrome: sidebar navigation plus the rendered page body
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (maud::PreEscaped(STYLESHEET)) }
            }
            body {
                div class="container" {
                    nav class="sidebar" {
                        ul {
                            li { a href="/catalog" { "Home" } }
                            li { a href="/catalog/books" { "All books" } }
                            li { a href="/catalog/authors" { "All authors" } }
                            li { a href="/catalog/genres" { "All genres" } }
                            li { a href="/catalog/bookinstances" { "All book copies" } }
                        }
                        hr;
                        ul {
                            li { a href="/catalog/book/create" { "Create new book" } }
                            li { a href="/catalog/author/create" { "Create new author" } }
                            li { a href="/catalog/genre/create" { "Create new genre" } }
                            li { a href="/catalog/bookinstance/create" { "Create new book copy" } }
                        }
                    }
                    main class="content" { (content) }
                }
            }
        }
    }
}

/// Home page with record counts
pub fn index(books: i64, copies: i64, available: i64, authors: i64, genres: i64) -> Markup {
    layout(
        "Local Library Home",
        html! {
            h1 { "Local Library Home" }
            p { "Welcome to the library catalog." }
            h2 { "Dynamic content" }
            p { "The library has the following record counts:" }
            ul {
                li { strong { "Books: " } (books) }
                li { strong { "Copies: " } (copies) }
                li { strong { "Copies available: " } (available) }
                li { strong { "Authors: " } (authors) }
                li { strong { "Genres: " } (genres) }
            }
        },
    )
}

/// Generic error page used by the centralized error handler
pub fn error_page(status: StatusCode, message: &str, detail: Option<&str>) -> Markup {
    layout(
        "Error",
        html! {
            h1 { (message) }
            p {
                (status.as_u16())
                @if let Some(reason) = status.canonical_reason() { " " (reason) }
            }
            @if let Some(detail) = detail {
                pre { (detail) }
            }
        },
    )
}

/// Ordered validation messages shown beneath a re-rendered form
pub(crate) fn error_list(errors: &[String]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul class="errors" {
                @for message in errors {
                    li { (message) }
                }
            }
        }
    }
}
