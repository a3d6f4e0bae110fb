//! Genre form DTO and validation chain

use serde::Deserialize;

use crate::models::Genre;

use super::{escape_html, FormErrors};

/// Raw form submission for creating or updating a genre
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

/// Validated payload for a genre write
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub name: String,
}

impl GenreForm {
    pub fn validate(&self) -> Result<NewGenre, (GenreForm, FormErrors)> {
        let mut errors = FormErrors::new();

        // Length bounds apply to the trimmed input, before escaping
        let trimmed = self.name.trim();
        let length = trimmed.chars().count();
        if length < 3 {
            errors.push("Genre name must contain at least 3 characters");
        } else if length > 100 {
            errors.push("Genre name must not exceed 100 characters");
        }
        let name = escape_html(trimmed);

        if errors.is_empty() {
            return Ok(NewGenre { name });
        }
        Err((GenreForm { name }, errors))
    }
}

impl From<&Genre> for GenreForm {
    /// Pre-populate the form from an existing record (update GET)
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> GenreForm {
        GenreForm {
            name: name.to_string(),
        }
    }

    #[test]
    fn valid_name_produces_payload() {
        let new = form("Fantasy").validate().expect("should validate");
        assert_eq!(new.name, "Fantasy");
    }

    #[test]
    fn short_name_is_rejected() {
        let (_, errors) = form("ab").validate().unwrap_err();
        assert_eq!(errors.messages(), ["Genre name must contain at least 3 characters"]);
    }

    #[test]
    fn overlong_name_is_rejected() {
        let (_, errors) = form(&"x".repeat(101)).validate().unwrap_err();
        assert_eq!(errors.messages(), ["Genre name must not exceed 100 characters"]);
    }

    #[test]
    fn name_is_trimmed_and_escaped() {
        let new = form("  Sci-Fi & Fantasy ").validate().expect("should validate");
        assert_eq!(new.name, "Sci-Fi &amp; Fantasy");
    }
}
