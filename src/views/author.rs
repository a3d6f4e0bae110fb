//! Author views

use maud::{html, Markup};

use crate::forms::AuthorForm;
use crate::models::{Author, Book};

use super::{error_list, layout};

pub fn list(authors: &[Author]) -> Markup {
    layout(
        "Author List",
        html! {
            h1 { "Author List" }
            @if authors.is_empty() {
                p { "There are no authors in this library." }
            } @else {
                ul {
                    @for author in authors {
                        li {
                            a href=(author.url()) { (author.name()) }
                            @let lifespan = author.lifespan();
                            @if !lifespan.is_empty() { " (" (lifespan) ")" }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(author: &Author, books: &[Book]) -> Markup {
    let title = format!("Author: {}", author.name());
    layout(
        &title,
        html! {
            h1 { "Author: " (author.name()) }
            @let lifespan = author.lifespan();
            @if !lifespan.is_empty() { p { (lifespan) } }
            h2 { "Books" }
            @if books.is_empty() {
                p { "This author has no books." }
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
            p { a href=(format!("{}/update", author.url())) { "Update author" } }
            p { a href=(format!("{}/delete", author.url())) { "Delete author" } }
        },
    )
}

pub fn form(title: &str, form: &AuthorForm, errors: &[String]) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            form method="post" action="" {
                div class="form-group" {
                    label for="first_name" { "First name:" }
                    input type="text" name="first_name" id="first_name"
                        placeholder="First name" value=(form.first_name);
                }
                div class="form-group" {
                    label for="family_name" { "Family name:" }
                    input type="text" name="family_name" id="family_name"
                        placeholder="Family name" value=(form.family_name);
                }
                div class="form-group" {
                    label for="date_of_birth" { "Date of birth:" }
                    input type="date" name="date_of_birth" id="date_of_birth"
                        value=(form.date_of_birth);
                }
                div class="form-group" {
                    label for="date_of_death" { "Date of death:" }
                    input type="date" name="date_of_death" id="date_of_death"
                        value=(form.date_of_death);
                }
                button type="submit" { "Submit" }
            }
            (error_list(errors))
        },
    )
}

pub fn delete(author: &Author, books: &[Book]) -> Markup {
    layout(
        "Delete Author",
        html! {
            h1 { "Delete Author" }
            p { strong { "Author: " } (author.name()) }
            @if !books.is_empty() {
                p {
                    "This author still has " (books.len())
                    " book(s) in the catalog. They will keep their reference to the deleted record."
                }
                ul {
                    @for book in books {
                        li { a href=(book.url()) { (book.title) } }
                    }
                }
            }
            p { "Do you really want to delete this author?" }
            form method="post" action="" {
                input type="hidden" name="authorid" value=(author.id);
                button type="submit" { "Delete" }
            }
        },
    )
}
