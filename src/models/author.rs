//! Author model and derived display helpers

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::format_medium_date;

/// Full author model from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Canonical URL for an author record
    pub fn url_for(id: i32) -> String {
        format!("/catalog/author/{}", id)
    }

    pub fn url(&self) -> String {
        Self::url_for(self.id)
    }

    /// Display name, "family, first"
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Formatted lifespan, blank segments for unknown dates
    pub fn lifespan(&self) -> String {
        match (self.date_of_birth, self.date_of_death) {
            (None, None) => String::new(),
            (birth, death) => format!(
                "{} - {}",
                birth.map(format_medium_date).unwrap_or_default(),
                death.map(format_medium_date).unwrap_or_default(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> Author {
        Author {
            id: 7,
            first_name: "Mary".to_string(),
            family_name: "Shelley".to_string(),
            date_of_birth: birth,
            date_of_death: death,
        }
    }

    #[test]
    fn display_name_is_family_comma_first() {
        assert_eq!(author(None, None).name(), "Shelley, Mary");
    }

    #[test]
    fn url_derived_from_id() {
        assert_eq!(author(None, None).url(), "/catalog/author/7");
    }

    #[test]
    fn lifespan_empty_without_dates() {
        assert_eq!(author(None, None).lifespan(), "");
    }

    #[test]
    fn lifespan_with_both_dates() {
        let a = author(
            NaiveDate::from_ymd_opt(1797, 8, 30),
            NaiveDate::from_ymd_opt(1851, 2, 1),
        );
        assert_eq!(a.lifespan(), "Aug 30, 1797 - Feb 1, 1851");
    }

    #[test]
    fn lifespan_with_birth_only() {
        let a = author(NaiveDate::from_ymd_opt(1797, 8, 30), None);
        assert_eq!(a.lifespan(), "Aug 30, 1797 - ");
    }
}
