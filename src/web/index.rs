//! Home page handlers

use axum::extract::State;
use axum::response::Response;
use maud::Markup;

use crate::{error::AppResult, views, AppState};

use super::found;

/// The site root just forwards to the catalog home
pub async fn home() -> Response {
    found("/catalog")
}

/// Catalog home page with record counts, fetched concurrently
pub async fn index(State(state): State<AppState>) -> AppResult<Markup> {
    let repository = &state.repository;
    let (books, copies, available, authors, genres) = tokio::try_join!(
        repository.books.count(),
        repository.book_instances.count(),
        repository.book_instances.count_available(),
        repository.authors.count(),
        repository.genres.count(),
    )?;

    Ok(views::index(books, copies, available, authors, genres))
}
