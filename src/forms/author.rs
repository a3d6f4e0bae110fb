//! Author form DTO and validation chain

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::Author;

use super::{optional_date, required_text_max, FormErrors};

/// Raw form submission for creating or updating an author
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

/// Validated payload for an author write
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorForm {
    pub fn validate(&self) -> Result<NewAuthor, (AuthorForm, FormErrors)> {
        let mut errors = FormErrors::new();

        let first_name = required_text_max(
            &self.first_name,
            100,
            "First name must be specified.",
            "First name too long",
            &mut errors,
        );
        let family_name = required_text_max(
            &self.family_name,
            100,
            "Family name must be specified.",
            "Family name too long",
            &mut errors,
        );
        let date_of_birth = optional_date(&self.date_of_birth, "Invalid date of birth", &mut errors);
        let date_of_death = optional_date(&self.date_of_death, "Invalid date of death", &mut errors);

        if errors.is_empty() {
            return Ok(NewAuthor {
                first_name,
                family_name,
                date_of_birth,
                date_of_death,
            });
        }

        let echo = AuthorForm {
            first_name,
            family_name,
            date_of_birth: self.date_of_birth.trim().to_string(),
            date_of_death: self.date_of_death.trim().to_string(),
        };
        Err((echo, errors))
    }
}

impl From<&Author> for AuthorForm {
    /// Pre-populate the form from an existing record (update GET)
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            date_of_death: author
                .date_of_death
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_submission_produces_payload() {
        let form = AuthorForm {
            first_name: " Mary ".to_string(),
            family_name: "Shelley".to_string(),
            date_of_birth: "1797-08-30".to_string(),
            date_of_death: String::new(),
        };
        let new = form.validate().expect("should validate");
        assert_eq!(new.first_name, "Mary");
        assert_eq!(new.date_of_birth, NaiveDate::from_ymd_opt(1797, 8, 30));
        assert_eq!(new.date_of_death, None);
    }

    #[test]
    fn missing_names_are_rejected() {
        let (_, errors) = AuthorForm::default().validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            ["First name must be specified.", "Family name must be specified."]
        );
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let form = AuthorForm {
            first_name: "Mary".to_string(),
            family_name: "Shelley".to_string(),
            date_of_birth: "30/08/1797".to_string(),
            date_of_death: "never".to_string(),
        };
        let (_, errors) = form.validate().unwrap_err();
        assert_eq!(errors.messages(), ["Invalid date of birth", "Invalid date of death"]);
    }
}
