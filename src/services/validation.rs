//! Form validation and sanitization pipeline
//!
//! Each form field is checked by an ordered list of rules. Every field's
//! pipeline runs to completion before errors are reported, so a submission
//! with several bad fields comes back with the full list in one pass.

use chrono::NaiveDate;

use crate::{
    error::FieldError,
    models::author::{AuthorForm, NewAuthor, SanitizedAuthorForm},
};

/// A single validation or sanitization step.
/// Rules run in order; sanitizers rewrite the working text, checks append
/// errors. Later rules see the output of earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Strip leading/trailing whitespace
    Trim,
    /// Fail with "must be specified" when the text is empty
    Required,
    /// Fail with "has non-alphanumeric characters" when the text contains
    /// anything besides letters and digits. Empty text passes; Required owns
    /// that message.
    Alphanumeric,
    /// Rewrite markup-significant characters to HTML entities
    EscapeMarkup,
    /// Empty text passes; otherwise must parse as a yyyy-mm-dd calendar date
    OptionalIsoDate,
}

/// Working state threaded through a field's rule chain
#[derive(Debug, Clone, Default)]
pub struct FieldValue {
    pub text: String,
    pub date: Option<NaiveDate>,
}

/// Ordered rule chain for one form field
pub struct FieldPipeline {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

impl FieldPipeline {
    /// Run the chain over raw input, collecting this field's errors
    pub fn run(&self, input: &str, errors: &mut Vec<FieldError>) -> FieldValue {
        let mut value = FieldValue {
            text: input.to_string(),
            date: None,
        };

        for rule in self.rules {
            match rule {
                Rule::Trim => {
                    value.text = value.text.trim().to_string();
                }
                Rule::Required => {
                    if value.text.is_empty() {
                        errors.push(FieldError::new(
                            self.field,
                            format!("{} must be specified", self.label),
                        ));
                    }
                }
                Rule::Alphanumeric => {
                    if !value.text.is_empty() && !value.text.chars().all(char::is_alphanumeric) {
                        errors.push(FieldError::new(
                            self.field,
                            format!("{} has non-alphanumeric characters", self.label),
                        ));
                    }
                }
                Rule::EscapeMarkup => {
                    value.text = escape_markup(&value.text);
                }
                Rule::OptionalIsoDate => {
                    if !value.text.is_empty() {
                        match NaiveDate::parse_from_str(&value.text, "%Y-%m-%d") {
                            Ok(date) => value.date = Some(date),
                            Err(_) => errors.push(FieldError::new(
                                self.field,
                                format!("Invalid {}", self.label),
                            )),
                        }
                    }
                }
            }
        }

        value
    }
}

const NAME_RULES: &[Rule] = &[
    Rule::Trim,
    Rule::Required,
    Rule::Alphanumeric,
    Rule::EscapeMarkup,
];

const DATE_RULES: &[Rule] = &[Rule::Trim, Rule::OptionalIsoDate];

const AUTHOR_PIPELINES: &[FieldPipeline] = &[
    FieldPipeline {
        field: "first_name",
        label: "First name",
        rules: NAME_RULES,
    },
    FieldPipeline {
        field: "family_name",
        label: "Family name",
        rules: NAME_RULES,
    },
    FieldPipeline {
        field: "date_of_birth",
        label: "date of birth",
        rules: DATE_RULES,
    },
    FieldPipeline {
        field: "date_of_death",
        label: "date of death",
        rules: DATE_RULES,
    },
];

/// Outcome of running the author create-form pipeline.
/// `author` is populated only when `errors` is empty; `sanitized` always
/// carries the cleaned-up values for re-rendering the form.
pub struct AuthorFormResult {
    pub sanitized: SanitizedAuthorForm,
    pub errors: Vec<FieldError>,
    pub author: Option<NewAuthor>,
}

/// Validate and sanitize a raw author create-form submission
pub fn run_author_pipeline(form: &AuthorForm) -> AuthorFormResult {
    let mut errors = Vec::new();

    let first_name = AUTHOR_PIPELINES[0].run(&form.first_name, &mut errors);
    let family_name = AUTHOR_PIPELINES[1].run(&form.family_name, &mut errors);
    let date_of_birth = AUTHOR_PIPELINES[2].run(&form.date_of_birth, &mut errors);
    let date_of_death = AUTHOR_PIPELINES[3].run(&form.date_of_death, &mut errors);

    let sanitized = SanitizedAuthorForm {
        first_name: first_name.text.clone(),
        family_name: family_name.text.clone(),
        date_of_birth: date_of_birth.text.clone(),
        date_of_death: date_of_death.text.clone(),
    };

    let author = if errors.is_empty() {
        Some(NewAuthor {
            first_name: first_name.text,
            family_name: family_name.text,
            date_of_birth: date_of_birth.date,
            date_of_death: date_of_death.date,
        })
    } else {
        None
    };

    AuthorFormResult {
        sanitized,
        errors,
        author,
    }
}

/// Rewrite markup-significant characters to HTML entities
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, family: &str, birth: &str, death: &str) -> AuthorForm {
        AuthorForm {
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: birth.to_string(),
            date_of_death: death.to_string(),
        }
    }

    fn messages_for<'a>(errors: &'a [FieldError], field: &str) -> Vec<&'a str> {
        errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    #[test]
    fn test_valid_submission() {
        let result = run_author_pipeline(&form("Jane", "Austen", "1775-12-16", ""));
        assert!(result.errors.is_empty());

        let author = result.author.unwrap();
        assert_eq!(author.first_name, "Jane");
        assert_eq!(author.family_name, "Austen");
        assert_eq!(
            author.date_of_birth,
            NaiveDate::from_ymd_opt(1775, 12, 16)
        );
        assert_eq!(author.date_of_death, None);
    }

    #[test]
    fn test_trims_whitespace() {
        let result = run_author_pipeline(&form("  Jane ", " Austen  ", "", ""));
        assert!(result.errors.is_empty());
        assert_eq!(result.sanitized.first_name, "Jane");
        assert_eq!(result.sanitized.family_name, "Austen");
    }

    #[test]
    fn test_missing_names_reported_per_field() {
        let result = run_author_pipeline(&form("", "   ", "", ""));
        assert!(result.author.is_none());
        assert_eq!(
            messages_for(&result.errors, "first_name"),
            vec!["First name must be specified"]
        );
        assert_eq!(
            messages_for(&result.errors, "family_name"),
            vec!["Family name must be specified"]
        );
    }

    #[test]
    fn test_non_alphanumeric_name_rejected() {
        let result = run_author_pipeline(&form("Jane", "O'Brien123", "", ""));
        assert!(result.author.is_none());
        assert_eq!(
            messages_for(&result.errors, "family_name"),
            vec!["Family name has non-alphanumeric characters"]
        );
        // The echoed value is still sanitized for safe re-rendering.
        assert_eq!(result.sanitized.family_name, "O&#x27;Brien123");
    }

    #[test]
    fn test_all_failing_fields_reported() {
        let result = run_author_pipeline(&form("", "Brontë!", "not-a-date", "1855"));
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["first_name", "family_name", "date_of_birth", "date_of_death"]
        );
    }

    #[test]
    fn test_invalid_date_message() {
        let result = run_author_pipeline(&form("Jane", "Austen", "16/12/1775", ""));
        assert_eq!(
            messages_for(&result.errors, "date_of_birth"),
            vec!["Invalid date of birth"]
        );
    }

    #[test]
    fn test_unicode_names_accepted() {
        let result = run_author_pipeline(&form("Gabriel", "García", "", ""));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_markup(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;&#x2F;b&gt;"
        );
        assert_eq!(escape_markup("plain"), "plain");
    }
}
