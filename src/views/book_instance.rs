//! Book instance (copy) views

use maud::{html, Markup};

use crate::forms::BookInstanceForm;
use crate::models::{Book, BookInstance, BookSummary, InstanceStatus};

use super::{error_list, layout};

fn status_class(status: &str) -> &'static str {
    match status {
        "Available" => "status-available",
        "Maintenance" => "status-maintenance",
        _ => "",
    }
}

pub fn list(instances: &[BookInstance]) -> Markup {
    layout(
        "Book Instance List",
        html! {
            h1 { "Book Instance List" }
            @if instances.is_empty() {
                p { "There are no book copies in this library." }
            } @else {
                ul {
                    @for instance in instances {
                        li {
                            a href=(instance.url()) {
                                @if let Some(title) = &instance.book_title {
                                    (title)
                                } @else {
                                    "Unknown book"
                                }
                                " : " (instance.imprint)
                            }
                            " - "
                            span class=(status_class(&instance.status)) { (instance.status) }
                            @if instance.status != "Available" {
                                " (Due: " (instance.due_back_formatted()) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(instance: &BookInstance, book: &Book) -> Markup {
    let title = format!("Copy: {}", book.title);
    layout(
        &title,
        html! {
            h1 { "ID: " (instance.id) }
            p { strong { "Title: " } a href=(book.url()) { (book.title) } }
            p { strong { "Imprint: " } (instance.imprint) }
            p {
                strong { "Status: " }
                span class=(status_class(&instance.status)) { (instance.status) }
            }
            @if instance.status != "Available" {
                p { strong { "Due back: " } (instance.due_back_formatted()) }
            }
            hr;
            p { a href=(format!("{}/update", instance.url())) { "Update copy" } }
            p { a href=(format!("{}/delete", instance.url())) { "Delete copy" } }
        },
    )
}

pub fn form(
    title: &str,
    books: &[BookSummary],
    form: &BookInstanceForm,
    errors: &[String],
) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            form method="post" action="" {
                div class="form-group" {
                    label for="book" { "Book:" }
                    select name="book" id="book" required {
                        option value="" disabled selected[form.book.is_empty()] {
                            "Select book"
                        }
                        @for book in books {
                            option value=(book.id) selected[form.book == book.id.to_string()] {
                                (book.title)
                            }
                        }
                    }
                }
                div class="form-group" {
                    label for="imprint" { "Imprint:" }
                    input type="text" name="imprint" id="imprint"
                        placeholder="Publisher and date information"
                        value=(form.imprint);
                }
                div class="form-group" {
                    label for="due_back" { "Date when book available:" }
                    input type="date" name="due_back" id="due_back" value=(form.due_back);
                }
                div class="form-group" {
                    label for="status" { "Status:" }
                    select name="status" id="status" {
                        @for status in InstanceStatus::ALL {
                            option value=(status.as_str())
                                selected[form.status == status.as_str()] {
                                (status.as_str())
                            }
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
            (error_list(errors))
        },
    )
}

pub fn delete(instance: &BookInstance) -> Markup {
    layout(
        "Delete Book Instance",
        html! {
            h1 { "Delete Book Instance" }
            p { strong { "ID: " } (instance.id) }
            p { strong { "Imprint: " } (instance.imprint) }
            p { strong { "Status: " } (instance.status) }
            p { "Do you really want to delete this copy?" }
            form method="post" action="" {
                input type="hidden" name="bookinstanceid" value=(instance.id);
                button type="submit" { "Delete" }
            }
        },
    )
}
