//! Genre handlers

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::Form;
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::AppResult,
    forms::GenreForm,
    models::Genre,
    views, AppState,
};

use super::found;

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let genres = state.repository.genres.list().await?;
    Ok(views::genre::list(&genres))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let repository = &state.repository;
    let (genre, books) = tokio::try_join!(
        repository.genres.get(id),
        repository.books.list_by_genre(id),
    )?;
    Ok(views::genre::detail(&genre, &books))
}

pub async fn create_get() -> Markup {
    views::genre::form("Create Genre", &GenreForm::default(), &[])
}

pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(new) => {
            let id = state.repository.genres.create(&new).await?;
            tracing::info!("Created genre {}", id);
            Ok(found(&Genre::url_for(id)))
        }
        Err((echo, errors)) => {
            Ok(views::genre::form("Create Genre", &echo, errors.messages()).into_response())
        }
    }
}

pub async fn update_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let genre = state.repository.genres.get(id).await?;
    Ok(views::genre::form(
        "Update Genre",
        &GenreForm::from(&genre),
        &[],
    ))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(new) => {
            state.repository.genres.update(id, &new).await?;
            Ok(found(&Genre::url_for(id)))
        }
        Err((echo, errors)) => {
            Ok(views::genre::form("Update Genre", &echo, errors.messages()).into_response())
        }
    }
}

pub async fn delete_get(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Response> {
    // A vanished target just goes back to the list
    match state.repository.genres.find(id).await? {
        Some(genre) => Ok(views::genre::delete(&genre).into_response()),
        None => Ok(found("/catalog/genres")),
    }
}

#[derive(Deserialize)]
pub struct DeleteGenre {
    #[serde(default)]
    genreid: String,
}

pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeleteGenre>,
) -> AppResult<Response> {
    if let Ok(id) = form.genreid.trim().parse::<i32>() {
        state.repository.genres.delete(id).await?;
        tracing::info!("Deleted genre {}", id);
    }
    Ok(found("/catalog/genres"))
}
