//! Genre views

use maud::{html, Markup};

use crate::forms::GenreForm;
use crate::models::{Book, Genre};

use super::{error_list, layout};

pub fn list(genres: &[Genre]) -> Markup {
    layout(
        "Genre List",
        html! {
            h1 { "Genre List" }
            @if genres.is_empty() {
                p { "There are no genres in this library." }
            } @else {
                ul {
                    @for genre in genres {
                        li { a href=(genre.url()) { (genre.name) } }
                    }
                }
            }
        },
    )
}

pub fn detail(genre: &Genre, books: &[Book]) -> Markup {
    let title = format!("Genre: {}", genre.name);
    layout(
        &title,
        html! {
            h1 { "Genre: " (genre.name) }
            h2 { "Books" }
            @if books.is_empty() {
                p { "There are no books in this genre." }
            } @else {
                ul {
                    @for book in books {
                        li {
                            a href=(book.url()) { (book.title) }
                            " - " (book.summary)
                        }
                    }
                }
            }
            hr;
            p { a href=(format!("{}/update", genre.url())) { "Update genre" } }
            p { a href=(format!("{}/delete", genre.url())) { "Delete genre" } }
        },
    )
}

pub fn form(title: &str, form: &GenreForm, errors: &[String]) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            form method="post" action="" {
                div class="form-group" {
                    label for="name" { "Genre:" }
                    input type="text" name="name" id="name"
                        placeholder="Fantasy, Poetry etc." value=(form.name);
                }
                button type="submit" { "Submit" }
            }
            (error_list(errors))
        },
    )
}

pub fn delete(genre: &Genre) -> Markup {
    layout(
        "Delete Genre",
        html! {
            h1 { "Delete Genre" }
            p { strong { "Genre: " } (genre.name) }
            p { "Do you really want to delete this genre?" }
            form method="post" action="" {
                input type="hidden" name="genreid" value=(genre.id);
                button type="submit" { "Delete" }
            }
        },
    )
}
