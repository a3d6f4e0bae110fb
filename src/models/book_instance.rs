//! BookInstance (physical copy) model and related types

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use super::{book::Book, format_medium_date};

/// Loan status of a physical copy. Stored in the database as its display
/// string; anything outside this enumeration is rejected by the form layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstanceStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl InstanceStatus {
    /// All statuses, in form-select display order
    pub const ALL: [InstanceStatus; 4] = [
        InstanceStatus::Maintenance,
        InstanceStatus::Available,
        InstanceStatus::Loaned,
        InstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Maintenance => "Maintenance",
            InstanceStatus::Loaned => "Loaned",
            InstanceStatus::Reserved => "Reserved",
        }
    }
}

impl Default for InstanceStatus {
    fn default() -> Self {
        InstanceStatus::Maintenance
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstanceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(InstanceStatus::Available),
            "Maintenance" => Ok(InstanceStatus::Maintenance),
            "Loaned" => Ok(InstanceStatus::Loaned),
            "Reserved" => Ok(InstanceStatus::Reserved),
            _ => Err(()),
        }
    }
}

/// Full book instance model from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: NaiveDate,
    // Computed field (populated when queried with a JOIN, None otherwise).
    // The referenced book may have been deleted; readers tolerate None.
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    // Relation (loaded separately)
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
}

impl BookInstance {
    /// Canonical URL for a book instance record
    pub fn url_for(id: i32) -> String {
        format!("/catalog/bookinstance/{}", id)
    }

    pub fn url(&self) -> String {
        Self::url_for(self.id)
    }

    /// Human-readable due-back date
    pub fn due_back_formatted(&self) -> String {
        format_medium_date(self.due_back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_display() {
        for status in InstanceStatus::ALL {
            assert_eq!(status.as_str().parse::<InstanceStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("Lost".parse::<InstanceStatus>().is_err());
        assert!("available".parse::<InstanceStatus>().is_err());
        assert!("".parse::<InstanceStatus>().is_err());
    }

    #[test]
    fn default_status_is_maintenance() {
        assert_eq!(InstanceStatus::default(), InstanceStatus::Maintenance);
    }

    #[test]
    fn url_derived_from_id() {
        assert_eq!(BookInstance::url_for(9), "/catalog/bookinstance/9");
    }

    #[test]
    fn due_back_formatting() {
        let instance = BookInstance {
            id: 1,
            book_id: 1,
            imprint: "Penguin".to_string(),
            status: "Available".to_string(),
            due_back: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            book_title: None,
            book: None,
        };
        assert_eq!(instance.due_back_formatted(), "Jan 1, 2024");
    }
}
