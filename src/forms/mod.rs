//! Form input validation and sanitization.
//!
//! Each submitted field runs through an ordered chain of pure steps
//! (trim, HTML-escape, presence and format checks). Error messages
//! accumulate into a [`FormErrors`] collection that the handler hands
//! back to the form view; nothing is persisted while it is non-empty.
//!
//! Raw form DTOs (`*Form`) are plain string bags deserialized from the
//! request body. The typed payloads the repository accepts (`New*`) are
//! only produced by the `validate` methods here, so unvalidated input
//! never reaches a domain write.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

pub use author::{AuthorForm, NewAuthor};
pub use book::{BookForm, NewBook};
pub use book_instance::{BookInstanceForm, NewBookInstance};
pub use genre::{GenreForm, NewGenre};

use chrono::NaiveDate;

/// Ordered collection of validation error messages for one submission
#[derive(Debug, Default)]
pub struct FormErrors {
    messages: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// HTML-escape a value before it is stored or echoed back into a form.
/// Same character set as the original sanitizer.
pub(crate) fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// trim -> require non-empty -> escape.
/// The presence check runs on the trimmed input, before escaping, matching
/// `required_text_max`.
pub(crate) fn required_text(raw: &str, message: &'static str, errors: &mut FormErrors) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(message);
    }
    escape_html(trimmed)
}

/// trim -> escape -> require non-empty -> enforce a maximum length
pub(crate) fn required_text_max(
    raw: &str,
    max: usize,
    message: &'static str,
    too_long: &'static str,
    errors: &mut FormErrors,
) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(message);
    } else if trimmed.chars().count() > max {
        errors.push(too_long);
    }
    escape_html(trimmed)
}

/// escape only (no trim, no presence requirement)
pub(crate) fn escaped_text(raw: &str) -> String {
    escape_html(raw)
}

/// trim -> escape -> require a value that parses as a record id.
/// A non-numeric submission is indistinguishable from a missing one as far
/// as the caller is concerned; both yield the field's presence message.
pub(crate) fn required_reference(
    raw: &str,
    message: &'static str,
    errors: &mut FormErrors,
) -> (String, Option<i32>) {
    let value = escape_html(raw.trim());
    match value.parse::<i32>() {
        Ok(id) => (value, Some(id)),
        Err(_) => {
            errors.push(message);
            (value, None)
        }
    }
}

/// trim -> optional ISO-8601 date. Blank values are simply omitted so the
/// schema default applies; non-blank values must parse.
pub(crate) fn optional_date(
    raw: &str,
    message: &'static str,
    errors: &mut FormErrors,
) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b a="1">&'x'/</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#x27;x&#x27;&#x2F;&lt;&#x2F;b&gt;"
        );
    }

    #[test]
    fn required_text_trims_and_escapes() {
        let mut errors = FormErrors::new();
        let value = required_text("  Penguin & Co ", "Imprint must be specified", &mut errors);
        assert_eq!(value, "Penguin &amp; Co");
        assert!(errors.is_empty());
    }

    #[test]
    fn required_text_checks_presence_before_escaping() {
        let mut errors = FormErrors::new();
        let value = required_text("&", "Imprint must be specified", &mut errors);
        assert_eq!(value, "&amp;");
        assert!(errors.is_empty());
    }

    #[test]
    fn required_text_flags_blank_input() {
        let mut errors = FormErrors::new();
        let value = required_text("   ", "Imprint must be specified", &mut errors);
        assert_eq!(value, "");
        assert_eq!(errors.messages(), ["Imprint must be specified"]);
    }

    #[test]
    fn required_text_max_flags_overlong_input() {
        let mut errors = FormErrors::new();
        required_text_max("x".repeat(101).as_str(), 100, "req", "too long", &mut errors);
        assert_eq!(errors.messages(), ["too long"]);
    }

    #[test]
    fn required_reference_parses_id() {
        let mut errors = FormErrors::new();
        let (value, id) = required_reference(" 12 ", "Book must be specified", &mut errors);
        assert_eq!(value, "12");
        assert_eq!(id, Some(12));
        assert!(errors.is_empty());
    }

    #[test]
    fn required_reference_rejects_blank_and_garbage() {
        let mut errors = FormErrors::new();
        assert_eq!(required_reference("", "Book must be specified", &mut errors).1, None);
        assert_eq!(required_reference("abc", "Book must be specified", &mut errors).1, None);
        assert_eq!(
            errors.messages(),
            ["Book must be specified", "Book must be specified"]
        );
    }

    #[test]
    fn optional_date_blank_is_omitted() {
        let mut errors = FormErrors::new();
        assert_eq!(optional_date("", "Invalid date", &mut errors), None);
        assert_eq!(optional_date("  ", "Invalid date", &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_date_parses_iso() {
        let mut errors = FormErrors::new();
        let date = optional_date("2024-01-01", "Invalid date", &mut errors);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_date_flags_malformed_input() {
        let mut errors = FormErrors::new();
        assert_eq!(optional_date("01/02/2024", "Invalid date", &mut errors), None);
        assert_eq!(errors.messages(), ["Invalid date"]);
    }
}
