//! Genre model

use serde::Serialize;
use sqlx::FromRow;

/// Full genre model from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Canonical URL for a genre record
    pub fn url_for(id: i32) -> String {
        format!("/catalog/genre/{}", id)
    }

    pub fn url(&self) -> String {
        Self::url_for(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_derived_from_id() {
        let genre = Genre {
            id: 3,
            name: "Fantasy".to_string(),
        };
        assert_eq!(genre.url(), "/catalog/genre/3");
    }
}
