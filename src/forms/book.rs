//! Book form DTO and validation chain

use serde::Deserialize;

use crate::models::Book;

use super::{escape_html, required_reference, required_text, FormErrors};

/// Raw form submission for creating or updating a book.
/// `genre` collects every checked checkbox value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub genre: Vec<String>,
}

/// Validated payload for a book write
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<i32>,
}

impl BookForm {
    pub fn validate(&self) -> Result<NewBook, (BookForm, FormErrors)> {
        let mut errors = FormErrors::new();

        let title = required_text(&self.title, "Title must not be empty.", &mut errors);
        let (author, author_id) =
            required_reference(&self.author, "Author must not be empty.", &mut errors);
        let summary = required_text(&self.summary, "Summary must not be empty.", &mut errors);
        let isbn = required_text(&self.isbn, "ISBN must not be empty", &mut errors);
        // Checkbox values are our own genre ids; escape then keep the ones
        // that still parse.
        let genre: Vec<String> = self.genre.iter().map(|g| escape_html(g.trim())).collect();
        let genre_ids: Vec<i32> = genre.iter().filter_map(|g| g.parse().ok()).collect();

        if errors.is_empty() {
            if let Some(author_id) = author_id {
                return Ok(NewBook {
                    title,
                    author_id,
                    summary,
                    isbn,
                    genre_ids,
                });
            }
        }

        let echo = BookForm {
            title,
            author,
            summary,
            isbn,
            genre,
        };
        Err((echo, errors))
    }
}

impl From<&Book> for BookForm {
    /// Pre-populate the form from an existing record (update GET)
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author_id.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: book.genres.iter().map(|g| g.id.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, author: &str, summary: &str, isbn: &str) -> BookForm {
        BookForm {
            title: title.to_string(),
            author: author.to_string(),
            summary: summary.to_string(),
            isbn: isbn.to_string(),
            genre: vec!["1".to_string(), "2".to_string()],
        }
    }

    #[test]
    fn valid_submission_produces_payload() {
        let new = form("Frankenstein", "7", "A summary.", "9780")
            .validate()
            .expect("should validate");
        assert_eq!(new.author_id, 7);
        assert_eq!(new.genre_ids, [1, 2]);
    }

    #[test]
    fn empty_fields_collect_every_message() {
        let (_, errors) = form("", "", "", "").validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "Title must not be empty.",
                "Author must not be empty.",
                "Summary must not be empty.",
                "ISBN must not be empty"
            ]
        );
    }

    #[test]
    fn echo_retains_genre_selection() {
        let (echo, _) = form("", "7", "s", "i").validate().unwrap_err();
        assert_eq!(echo.genre, ["1", "2"]);
    }
}
