//! Book handlers

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::Form;
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::AppResult,
    forms::BookForm,
    models::Book,
    views, AppState,
};

use super::found;

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.repository.books.list().await?;
    Ok(views::book::list(&books))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let repository = &state.repository;
    let (book, instances) = tokio::try_join!(
        repository.books.get(id),
        repository.book_instances.list_by_book(id),
    )?;
    Ok(views::book::detail(&book, &instances))
}

pub async fn create_get(State(state): State<AppState>) -> AppResult<Markup> {
    let repository = &state.repository;
    let (authors, genres) = tokio::try_join!(repository.authors.list(), repository.genres.list())?;
    Ok(views::book::form(
        "Create Book",
        &authors,
        &genres,
        &BookForm::default(),
        &[],
    ))
}

pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let repository = &state.repository;
    match form.validate() {
        Ok(new) => {
            let id = repository.books.create(&new).await?;
            tracing::info!("Created book {}", id);
            Ok(found(&Book::url_for(id)))
        }
        Err((echo, errors)) => {
            let (authors, genres) =
                tokio::try_join!(repository.authors.list(), repository.genres.list())?;
            Ok(
                views::book::form("Create Book", &authors, &genres, &echo, errors.messages())
                    .into_response(),
            )
        }
    }
}

pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let repository = &state.repository;
    let (book, authors, genres) = tokio::try_join!(
        repository.books.get(id),
        repository.authors.list(),
        repository.genres.list(),
    )?;

    Ok(views::book::form(
        "Update Book",
        &authors,
        &genres,
        &BookForm::from(&book),
        &[],
    ))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let repository = &state.repository;
    match form.validate() {
        Ok(new) => {
            repository.books.update(id, &new).await?;
            Ok(found(&Book::url_for(id)))
        }
        Err((echo, errors)) => {
            let (authors, genres) =
                tokio::try_join!(repository.authors.list(), repository.genres.list())?;
            Ok(
                views::book::form("Update Book", &authors, &genres, &echo, errors.messages())
                    .into_response(),
            )
        }
    }
}

pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Response> {
    // A vanished target just goes back to the list
    let book = match state.repository.books.find(id).await? {
        Some(book) => book,
        None => return Ok(found("/catalog/books")),
    };
    // Copies are shown on the confirmation page for information only;
    // they never block the deletion.
    let instances = state.repository.book_instances.list_by_book(id).await?;
    Ok(views::book::delete(&book, &instances).into_response())
}

#[derive(Deserialize)]
pub struct DeleteBook {
    #[serde(default)]
    bookid: String,
}

pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteBook>,
) -> AppResult<Response> {
    if let Ok(id) = form.bookid.trim().parse::<i32>() {
        state.repository.books.delete(id).await?;
        tracing::info!("Deleted book {}", id);
    }
    Ok(found("/catalog/books"))
}
