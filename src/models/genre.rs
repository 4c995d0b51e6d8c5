//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full genre model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Genre {
    pub id: i32,
    #[validate(length(min = 3, max = 100, message = "Genre name must be 3-100 characters"))]
    pub name: String,
}

impl Genre {
    /// Canonical path for this genre
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        let genre = |name: &str| Genre {
            id: 1,
            name: name.to_string(),
        };

        assert!(genre("Fantasy").validate().is_ok());
        assert!(genre("ab").validate().is_err());
        assert!(genre(&"x".repeat(101)).validate().is_err());
    }

    #[test]
    fn test_url() {
        let genre = Genre {
            id: 7,
            name: "Fantasy".to_string(),
        };
        assert_eq!(genre.url(), "/catalog/genre/7");
    }
}
