//! Author model and derived display fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name as "family_name, first_name".
    /// Empty when either part is missing so broken records never render half a name.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Canonical path for this author, used for links and post-create redirects
    pub fn url(&self) -> String {
        format!("/catalog/authors/{}", self.id)
    }

    pub fn date_of_birth_formatted(&self) -> String {
        format_date_medium(self.date_of_birth)
    }

    pub fn date_of_death_formatted(&self) -> String {
        format_date_medium(self.date_of_death)
    }

    /// Birth date as yyyy-mm-dd for form inputs
    pub fn date_of_birth_ymd(&self) -> String {
        format_date_ymd(self.date_of_birth)
    }

    /// Death date as yyyy-mm-dd for form inputs
    pub fn date_of_death_ymd(&self) -> String {
        format_date_ymd(self.date_of_death)
    }

    /// "birth - death" span; empty without a birth date, open-ended without a death date
    pub fn lifespan(&self) -> String {
        if self.date_of_birth.is_none() {
            return String::new();
        }
        format!(
            "{} - {}",
            self.date_of_birth_formatted(),
            self.date_of_death_formatted()
        )
    }
}

/// Sanitized author record ready for insertion.
/// Produced by the create-form pipeline; the length bounds are the schema
/// contract for stored records.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewAuthor {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Family name must be 1-100 characters"))]
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Raw create-form submission, exactly as posted by the client
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
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

/// Sanitized-so-far form values echoed back when re-rendering with errors
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct SanitizedAuthorForm {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
}

/// Medium date format for display, e.g. "Dec 16, 1775"; empty for absent dates
pub fn format_date_medium(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// yyyy-mm-dd format for form inputs; empty for absent dates
pub fn format_date_ymd(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: &str, family: &str) -> Author {
        Author {
            id: 1,
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(author("Jane", "Austen").name(), "Austen, Jane");
        assert_eq!(author("", "Austen").name(), "");
        assert_eq!(author("Jane", "").name(), "");
    }

    #[test]
    fn test_url() {
        assert_eq!(author("Jane", "Austen").url(), "/catalog/authors/1");
    }

    #[test]
    fn test_date_formatting() {
        let mut a = author("Jane", "Austen");
        a.date_of_birth = NaiveDate::from_ymd_opt(1775, 12, 16);
        assert_eq!(a.date_of_birth_formatted(), "Dec 16, 1775");
        assert_eq!(a.date_of_birth_ymd(), "1775-12-16");
        assert_eq!(a.date_of_death_formatted(), "");

        a.date_of_birth = NaiveDate::from_ymd_opt(1920, 1, 1);
        assert_eq!(a.date_of_birth_formatted(), "Jan 1, 1920");
    }

    #[test]
    fn test_lifespan() {
        let mut a = author("Jane", "Austen");
        assert_eq!(a.lifespan(), "");

        a.date_of_birth = NaiveDate::from_ymd_opt(1775, 12, 16);
        assert_eq!(a.lifespan(), "Dec 16, 1775 - ");

        a.date_of_death = NaiveDate::from_ymd_opt(1817, 7, 18);
        assert_eq!(a.lifespan(), "Dec 16, 1775 - Jul 18, 1817");
    }

    #[test]
    fn test_new_author_length_bounds() {
        use validator::Validate;

        let valid = NewAuthor {
            first_name: "Jane".to_string(),
            family_name: "Austen".to_string(),
            date_of_birth: None,
            date_of_death: None,
        };
        assert!(valid.validate().is_ok());

        let invalid = NewAuthor {
            first_name: String::new(),
            family_name: "x".repeat(101),
            date_of_birth: None,
            date_of_death: None,
        };
        let errors = invalid.validate().unwrap_err();
        // Both failing fields are reported, not just the first.
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("family_name"));
    }
}
