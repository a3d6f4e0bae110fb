//! Book model and related types

use serde::Serialize;
use sqlx::FromRow;

use super::{author::Author, genre::Genre};

/// Full book model from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
    // Computed field (populated when queried with a JOIN, None otherwise)
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    // Relations (loaded separately)
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[sqlx(skip)]
    pub genres: Vec<Genre>,
}

impl Book {
    /// Canonical URL for a book record
    pub fn url_for(id: i32) -> String {
        format!("/catalog/book/{}", id)
    }

    pub fn url(&self) -> String {
        Self::url_for(self.id)
    }
}

/// Short book representation for form choices and joins
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_derived_from_id() {
        assert_eq!(Book::url_for(42), "/catalog/book/42");
    }
}
