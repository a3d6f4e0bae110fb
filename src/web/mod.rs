//! Request handlers for the catalog pages

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod index;

use axum::http::{header::LOCATION, StatusCode};
use axum::response::{IntoResponse, Response};

/// 302 redirect, used after successful form posts
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
