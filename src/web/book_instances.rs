//! Book copy (BookInstance) handlers

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::Form;
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    forms::BookInstanceForm,
    models::BookInstance,
    views, AppState,
};

use super::found;

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let instances = state.repository.book_instances.list().await?;
    Ok(views::book_instance::list(&instances))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let instance = state.repository.book_instances.get(id).await?;
    // A dangling book reference reads as a missing record
    let book = instance
        .book
        .as_ref()
        .ok_or_else(|| AppError::NotFound("Book copy not found".to_string()))?;
    Ok(views::book_instance::detail(&instance, book))
}

pub async fn create_get(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.repository.books.list_summaries().await?;
    Ok(views::book_instance::form(
        "Create BookInstance",
        &books,
        &BookInstanceForm::default(),
        &[],
    ))
}

pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(new) => {
            let id = state.repository.book_instances.create(&new).await?;
            tracing::info!("Created book instance {}", id);
            Ok(found(&BookInstance::url_for(id)))
        }
        Err((echo, errors)) => {
            let books = state.repository.books.list_summaries().await?;
            Ok(
                views::book_instance::form("Create BookInstance", &books, &echo, errors.messages())
                    .into_response(),
            )
        }
    }
}

pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let repository = &state.repository;
    let (instance, books) = tokio::try_join!(
        repository.book_instances.get(id),
        repository.books.list_summaries(),
    )?;

    Ok(views::book_instance::form(
        "Update BookInstance",
        &books,
        &BookInstanceForm::from(&instance),
        &[],
    ))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(new) => {
            state.repository.book_instances.update(id, &new).await?;
            Ok(found(&BookInstance::url_for(id)))
        }
        Err((echo, errors)) => {
            let books = state.repository.books.list_summaries().await?;
            Ok(
                views::book_instance::form("Update BookInstance", &books, &echo, errors.messages())
                    .into_response(),
            )
        }
    }
}

pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Response> {
    // A vanished target just goes back to the list
    match state.repository.book_instances.find(id).await? {
        Some(instance) => Ok(views::book_instance::delete(&instance).into_response()),
        None => Ok(found("/catalog/bookinstances")),
    }
}

#[derive(Deserialize)]
pub struct DeleteBookInstance {
    #[serde(default)]
    bookinstanceid: String,
}

pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteBookInstance>,
) -> AppResult<Response> {
    // Deletion is idempotent; an unknown or malformed id is a no-op
    if let Ok(id) = form.bookinstanceid.trim().parse::<i32>() {
        state.repository.book_instances.delete(id).await?;
        tracing::info!("Deleted book instance {}", id);
    }
    Ok(found("/catalog/bookinstances"))
}
