//! Book instance (physical copy) model and status codes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::author::format_date_medium;

/// Loan status of a physical copy. DB stores the single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum InstanceStatus {
    Available,
    Maintenance,
    Loaned,
    Reserved,
}

impl InstanceStatus {
    /// Return the storage code for this status
    pub fn as_code(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "a",
            InstanceStatus::Maintenance => "m",
            InstanceStatus::Loaned => "l",
            InstanceStatus::Reserved => "r",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Maintenance => "Maintenance",
            InstanceStatus::Loaned => "Loaned",
            InstanceStatus::Reserved => "Reserved",
        }
    }
}

impl From<&str> for InstanceStatus {
    fn from(s: &str) -> Self {
        match s {
            "a" => InstanceStatus::Available,
            "l" => InstanceStatus::Loaned,
            "r" => InstanceStatus::Reserved,
            // New copies start in maintenance until shelved.
            _ => InstanceStatus::Maintenance,
        }
    }
}

impl Default for InstanceStatus {
    fn default() -> Self {
        InstanceStatus::Maintenance
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Full book instance model from database.
/// `status` holds the raw storage code; convert with `InstanceStatus::from`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: NaiveDate,
}

impl BookInstance {
    /// Canonical path for this copy
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    pub fn status(&self) -> InstanceStatus {
        InstanceStatus::from(self.status.as_str())
    }

    pub fn due_back_formatted(&self) -> String {
        format_date_medium(Some(self.due_back))
    }
}

/// Short instance representation for lists, joined with the book title
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstanceShort {
    pub id: i32,
    pub book_id: i32,
    pub book_title: String,
    pub imprint: String,
    pub status: String,
    pub due_back: NaiveDate,
}

impl BookInstanceShort {
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }

    pub fn status(&self) -> InstanceStatus {
        InstanceStatus::from(self.status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for status in [
            InstanceStatus::Available,
            InstanceStatus::Maintenance,
            InstanceStatus::Loaned,
            InstanceStatus::Reserved,
        ] {
            assert_eq!(InstanceStatus::from(status.as_code()), status);
        }
    }

    #[test]
    fn test_status_default_is_maintenance() {
        assert_eq!(InstanceStatus::default(), InstanceStatus::Maintenance);
        assert_eq!(InstanceStatus::from("x"), InstanceStatus::Maintenance);
    }
}
