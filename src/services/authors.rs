//! Author lifecycle service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{flatten_validation_errors, AppError, AppResult, FieldError},
    models::{
        author::{Author, AuthorForm, SanitizedAuthorForm},
        book::BookSummary,
    },
    repository::Repository,
    services::{notices::NoticeService, validation},
};

/// Result of a create-form submission
pub enum CreateOutcome {
    /// Author persisted; redirect the client to its canonical url
    Created(Author),
    /// One or more fields failed; re-render the form with the full error list
    Invalid {
        sanitized: SanitizedAuthorForm,
        errors: Vec<FieldError>,
    },
}

/// Result of a delete-form submission
pub enum DeleteOutcome {
    /// Record removed; the display name travels as a one-shot notice
    Deleted { name: String },
    /// Books still reference the author; re-render the confirmation view
    Blocked {
        author: Author,
        books: Vec<BookSummary>,
    },
    /// Nothing to delete; treated as an idempotent no-op
    AlreadyGone,
}

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
    notices: NoticeService,
}

impl AuthorsService {
    pub fn new(repository: Repository, notices: NoticeService) -> Self {
        Self {
            repository,
            notices,
        }
    }

    /// All authors plus the session's pending notice, consumed here
    pub async fn list(&self, session: Uuid) -> AppResult<(Vec<Author>, Option<String>)> {
        let authors = self.repository.authors.list().await?;
        let notice = self.notices.take(session);
        Ok((authors, notice))
    }

    /// An author and their books, fetched concurrently
    pub async fn detail(&self, id: i32) -> AppResult<(Author, Vec<BookSummary>)> {
        let (author, books) = tokio::try_join!(
            self.repository.authors.get_by_id(id),
            self.repository.books.list_by_author(id),
        )?;
        Ok((author, books))
    }

    /// Validate a create-form submission and persist it when clean
    pub async fn create(&self, form: &AuthorForm) -> AppResult<CreateOutcome> {
        let result = validation::run_author_pipeline(form);

        let Some(new_author) = result.author else {
            return Ok(CreateOutcome::Invalid {
                sanitized: result.sanitized,
                errors: result.errors,
            });
        };

        // Schema-level bounds still apply after sanitization; escaping can
        // push a name past the stored length limit.
        if let Err(schema_errors) = new_author.validate() {
            return Ok(CreateOutcome::Invalid {
                sanitized: result.sanitized,
                errors: flatten_validation_errors(&schema_errors),
            });
        }

        let author = self.repository.authors.insert(&new_author).await?;
        tracing::info!("Created author {} ({})", author.id, author.name());
        Ok(CreateOutcome::Created(author))
    }

    /// Author and dependent books for the delete confirmation view.
    /// None when the author no longer exists.
    pub async fn delete_preview(&self, id: i32) -> AppResult<Option<(Author, Vec<BookSummary>)>> {
        let Some(author) = self.repository.authors.find_by_id(id).await? else {
            return Ok(None);
        };
        let books = self.repository.books.list_by_author(id).await?;
        Ok(Some((author, books)))
    }

    /// Delete an author unless books still reference them
    pub async fn delete(&self, id: i32, session: Uuid) -> AppResult<DeleteOutcome> {
        let Some(author) = self.repository.authors.find_by_id(id).await? else {
            return Ok(DeleteOutcome::AlreadyGone);
        };

        let books = self.repository.books.list_by_author(id).await?;
        if !books.is_empty() {
            return Ok(DeleteOutcome::Blocked { author, books });
        }

        // The repository re-checks dependents inside its transaction; a book
        // created since the check above surfaces as a conflict here.
        match self.repository.authors.delete(id).await {
            Ok(()) => {}
            Err(AppError::DependencyConflict(_)) => {
                let books = self.repository.books.list_by_author(id).await?;
                return Ok(DeleteOutcome::Blocked { author, books });
            }
            Err(e) => return Err(e),
        }

        let name = author.name();
        tracing::info!("Deleted author {} ({})", id, name);
        self.notices
            .store(session, format!("Deleted author: {}", name));
        Ok(DeleteOutcome::Deleted { name })
    }
}
