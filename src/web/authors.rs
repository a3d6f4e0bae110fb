//! Author handlers

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::Form;
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::AppResult,
    forms::AuthorForm,
    models::Author,
    views, AppState,
};

use super::found;

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.repository.authors.list().await?;
    Ok(views::author::list(&authors))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let repository = &state.repository;
    let (author, books) = tokio::try_join!(
        repository.authors.get(id),
        repository.books.list_by_author(id),
    )?;
    Ok(views::author::detail(&author, &books))
}

pub async fn create_get() -> Markup {
    views::author::form("Create Author", &AuthorForm::default(), &[])
}

pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(new) => {
            let id = state.repository.authors.create(&new).await?;
            tracing::info!("Created author {}", id);
            Ok(found(&Author::url_for(id)))
        }
        Err((echo, errors)) => {
            Ok(views::author::form("Create Author", &echo, errors.messages()).into_response())
        }
    }
}

pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let author = state.repository.authors.get(id).await?;
    Ok(views::author::form(
        "Update Author",
        &AuthorForm::from(&author),
        &[],
    ))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(new) => {
            state.repository.authors.update(id, &new).await?;
            Ok(found(&Author::url_for(id)))
        }
        Err((echo, errors)) => {
            Ok(views::author::form("Update Author", &echo, errors.messages()).into_response())
        }
    }
}

pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Response> {
    // A vanished target just goes back to the list
    let author = match state.repository.authors.find(id).await? {
        Some(author) => author,
        None => return Ok(found("/catalog/authors")),
    };
    // Books are listed for information only; they never block the deletion.
    let books = state.repository.books.list_by_author(id).await?;
    Ok(views::author::delete(&author, &books).into_response())
}

#[derive(Deserialize)]
pub struct DeleteAuthor {
    #[serde(default)]
    authorid: String,
}

pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteAuthor>,
) -> AppResult<Response> {
    if let Ok(id) = form.authorid.trim().parse::<i32>() {
        state.repository.authors.delete(id).await?;
        tracing::info!("Deleted author {}", id);
    }
    Ok(found("/catalog/authors"))
}
