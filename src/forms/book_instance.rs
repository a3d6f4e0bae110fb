//! BookInstance form DTO and validation chain

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{BookInstance, InstanceStatus};

use super::{escaped_text, optional_date, required_reference, required_text, FormErrors};

/// Raw form submission for creating or updating a book instance
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookInstanceForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

/// Validated payload for a book instance write. Optional fields fall back
/// to the schema defaults at insert time.
#[derive(Debug, Clone)]
pub struct NewBookInstance {
    pub book_id: i32,
    pub imprint: String,
    pub status: Option<InstanceStatus>,
    pub due_back: Option<NaiveDate>,
}

impl BookInstanceForm {
    /// Run the sanitization chain. On failure, returns the sanitized echo
    /// of the submission (for re-rendering the form) with the ordered
    /// error messages.
    pub fn validate(&self) -> Result<NewBookInstance, (BookInstanceForm, FormErrors)> {
        let mut errors = FormErrors::new();

        let (book, book_id) = required_reference(&self.book, "Book must be specified", &mut errors);
        let imprint = required_text(&self.imprint, "Imprint must be specified", &mut errors);
        let status_raw = escaped_text(&self.status);
        let status = if status_raw.is_empty() {
            None
        } else {
            match status_raw.parse::<InstanceStatus>() {
                Ok(status) => Some(status),
                Err(()) => {
                    errors.push("Invalid status");
                    None
                }
            }
        };
        let due_back = optional_date(&self.due_back, "Invalid date", &mut errors);

        if errors.is_empty() {
            if let Some(book_id) = book_id {
                return Ok(NewBookInstance {
                    book_id,
                    imprint,
                    status,
                    due_back,
                });
            }
        }

        let echo = BookInstanceForm {
            book,
            imprint,
            status: status_raw,
            due_back: self.due_back.trim().to_string(),
        };
        Err((echo, errors))
    }
}

impl From<&BookInstance> for BookInstanceForm {
    /// Pre-populate the form from an existing record (update GET)
    fn from(instance: &BookInstance) -> Self {
        Self {
            book: instance.book_id.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.clone(),
            due_back: instance.due_back.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(book: &str, imprint: &str, status: &str, due_back: &str) -> BookInstanceForm {
        BookInstanceForm {
            book: book.to_string(),
            imprint: imprint.to_string(),
            status: status.to_string(),
            due_back: due_back.to_string(),
        }
    }

    #[test]
    fn valid_submission_produces_payload() {
        let new = form("3", "Penguin", "Available", "2024-01-01")
            .validate()
            .expect("should validate");
        assert_eq!(new.book_id, 3);
        assert_eq!(new.imprint, "Penguin");
        assert_eq!(new.status, Some(InstanceStatus::Available));
        assert_eq!(new.due_back, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn blank_status_and_date_fall_back_to_defaults() {
        let new = form("3", "Penguin", "", "").validate().expect("should validate");
        assert_eq!(new.status, None);
        assert_eq!(new.due_back, None);
    }

    #[test]
    fn missing_imprint_is_rejected() {
        let (echo, errors) = form("3", "  ", "", "").validate().unwrap_err();
        assert_eq!(errors.messages(), ["Imprint must be specified"]);
        assert_eq!(echo.book, "3");
    }

    #[test]
    fn missing_book_is_rejected() {
        let (_, errors) = form("", "Penguin", "", "").validate().unwrap_err();
        assert_eq!(errors.messages(), ["Book must be specified"]);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let (_, errors) = form("3", "Penguin", "Lost", "").validate().unwrap_err();
        assert_eq!(errors.messages(), ["Invalid status"]);
    }

    #[test]
    fn malformed_date_is_rejected_and_echoed() {
        let (echo, errors) = form("3", "Penguin", "", "not-a-date").validate().unwrap_err();
        assert_eq!(errors.messages(), ["Invalid date"]);
        assert_eq!(echo.due_back, "not-a-date");
    }

    #[test]
    fn errors_accumulate_in_field_order() {
        let (_, errors) = form("", "", "", "nope").validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            ["Book must be specified", "Imprint must be specified", "Invalid date"]
        );
    }
}
