//! Book model and related projections

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book_instance::BookInstance;
use super::genre::Genre;

/// Full book model (DB + API). Genre and instance relations are loaded separately.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub summary: String,
    pub isbn: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[sqlx(skip)]
    #[serde(default)]
    pub instances: Vec<BookInstance>,
}

impl Book {
    /// Canonical path for this book
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }

    /// Stored summary with HTML character entities decoded for display
    pub fn decoded_summary(&self) -> String {
        decode_entities(&self.summary)
    }
}

/// Short book representation for lists
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookShort {
    pub id: i32,
    pub title: String,
    pub author_family_name: String,
    pub author_first_name: String,
}

impl BookShort {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }

    /// Author display name, same empty-on-missing rule as the author model
    pub fn author_name(&self) -> String {
        if self.author_first_name.is_empty() || self.author_family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.author_family_name, self.author_first_name)
    }
}

/// Title-and-summary projection used by the author detail view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
    pub summary: String,
}

impl BookSummary {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }

    pub fn decoded_summary(&self) -> String {
        decode_entities(&self.summary)
    }
}

/// Decode HTML character entities in stored text.
/// Handles the five named entities plus decimal and hex numeric references;
/// anything unrecognized passes through verbatim. Single pass only, so
/// double-escaped input stays escaped once.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = match tail.find(';') {
            // Entities are short; a distant semicolon means this '&' is literal.
            Some(e) if e <= 10 => e,
            _ => {
                out.push('&');
                rest = &tail[1..];
                continue;
            }
        };
        let entity = &tail[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => numeric_entity(entity),
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code)
}
