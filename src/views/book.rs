//! Book views

use maud::{html, Markup};

use crate::forms::BookForm;
use crate::models::{Author, Book, BookInstance, Genre};

use super::{error_list, layout};

pub fn list(books: &[Book]) -> Markup {
    layout(
        "Book List",
        html! {
            h1 { "Book List" }
            @if books.is_empty() {
                p { "There are no books in this library." }
            } @else {
                ul {
                    @for book in books {
                        li {
                            a href=(book.url()) { (book.title) }
                            @if let Some(author) = &book.author_name {
                                " (" (author) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(book: &Book, instances: &[BookInstance]) -> Markup {
    layout(
        &book.title,
        html! {
            h1 { "Title: " (book.title) }
            p {
                strong { "Author: " }
                @if let Some(author) = &book.author {
                    a href=(author.url()) { (author.name()) }
                } @else {
                    "Unknown author"
                }
            }
            p { strong { "Summary: " } (book.summary) }
            p { strong { "ISBN: " } (book.isbn) }
            p {
                strong { "Genre: " }
                @for (i, genre) in book.genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(genre.url()) { (genre.name) }
                }
            }
            h2 { "Copies" }
            @if instances.is_empty() {
                p { "There are no copies of this book in the library." }
            } @else {
                ul {
                    @for instance in instances {
                        li {
                            a href=(instance.url()) { (instance.imprint) }
                            " - " (instance.status)
                        }
                    }
                }
            }
            hr;
            p { a href=(format!("{}/update", book.url())) { "Update book" } }
            p { a href=(format!("{}/delete", book.url())) { "Delete book" } }
        },
    )
}

pub fn form(
    title: &str,
    authors: &[Author],
    genres: &[Genre],
    form: &BookForm,
    errors: &[String],
) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            form method="post" action="" {
                div class="form-group" {
                    label for="title" { "Title:" }
                    input type="text" name="title" id="title" placeholder="Name of book"
                        value=(form.title);
                }
                div class="form-group" {
                    label for="author" { "Author:" }
                    select name="author" id="author" required {
                        option value="" disabled selected[form.author.is_empty()] {
                            "Select author"
                        }
                        @for author in authors {
                            option value=(author.id) selected[form.author == author.id.to_string()] {
                                (author.name())
                            }
                        }
                    }
                }
                div class="form-group" {
                    label for="summary" { "Summary:" }
                    textarea name="summary" id="summary" placeholder="Summary" {
                        (form.summary)
                    }
                }
                div class="form-group" {
                    label for="isbn" { "ISBN:" }
                    input type="text" name="isbn" id="isbn" placeholder="ISBN13"
                        value=(form.isbn);
                }
                div class="form-group" {
                    label { "Genre:" }
                    @for genre in genres {
                        div {
                            input type="checkbox" name="genre" id=(format!("genre-{}", genre.id))
                                value=(genre.id)
                                checked[form.genre.contains(&genre.id.to_string())];
                            label for=(format!("genre-{}", genre.id)) { (genre.name) }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (error_list(errors))
        },
    )
}

pub fn delete(book: &Book, instances: &[BookInstance]) -> Markup {
    layout(
        "Delete Book",
        html! {
            h1 { "Delete Book" }
            p { strong { "Title: " } (book.title) }
            p { strong { "ISBN: " } (book.isbn) }
            @if !instances.is_empty() {
                p {
                    "The library still holds " (instances.len())
                    " copies of this book. They will keep their reference to the deleted record."
                }
                ul {
                    @for instance in instances {
                        li { a href=(instance.url()) { (instance.imprint) } }
                    }
                }
            }
            p { "Do you really want to delete this book?" }
            form method="post" action="" {
                input type="hidden" name="bookid" value=(book.id);
                button type="submit" { "Delete" }
            }
        },
    )
}
