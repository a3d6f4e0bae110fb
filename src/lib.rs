//! Athenaeum Library Catalog
//!
//! A server-rendered web application for managing a small library catalog:
//! books, authors, genres, and the physical copies of each book.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod repository;
pub mod views;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<repository::Repository>,
}
