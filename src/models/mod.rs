//! Domain models for the catalog entities

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

pub use author::Author;
pub use book::{Book, BookSummary};
pub use book_instance::{BookInstance, InstanceStatus};
pub use genre::Genre;

use chrono::NaiveDate;

/// Medium date format used on detail pages, e.g. "Oct 16, 1854"
pub(crate) fn format_medium_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_date_format() {
        let date = NaiveDate::from_ymd_opt(1854, 10, 16).unwrap();
        assert_eq!(format_medium_date(date), "Oct 16, 1854");
    }

    #[test]
    fn medium_date_format_single_digit_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_medium_date(date), "Jan 1, 2024");
    }
}
