//! Author lifecycle endpoints

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, FieldError},
    models::{
        author::{Author, AuthorForm, SanitizedAuthorForm},
        book::BookSummary,
    },
    services::authors::{CreateOutcome, DeleteOutcome},
};

use super::{client_session, found, parse_id};

/// Author with derived display fields, ready for rendering
#[derive(Serialize, ToSchema)]
pub struct AuthorView {
    pub id: i32,
    pub name: String,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: String,
    pub date_of_death: String,
    /// yyyy-mm-dd forms for pre-filling date inputs
    pub date_of_birth_ymd: String,
    pub date_of_death_ymd: String,
    pub lifespan: String,
    pub url: String,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name(),
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.date_of_birth_formatted(),
            date_of_death: author.date_of_death_formatted(),
            date_of_birth_ymd: author.date_of_birth_ymd(),
            date_of_death_ymd: author.date_of_death_ymd(),
            lifespan: author.lifespan(),
            url: author.url(),
        }
    }
}

/// Book row on the author detail and delete views
#[derive(Serialize, ToSchema)]
pub struct BookSummaryView {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub url: String,
}

impl From<&BookSummary> for BookSummaryView {
    fn from(book: &BookSummary) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            summary: book.decoded_summary(),
            url: book.url(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct AuthorListView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub authors: Vec<AuthorView>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthorDetailView {
    pub title: String,
    pub author: AuthorView,
    pub books: Vec<BookSummaryView>,
}

/// Create form, either empty or re-rendered with sanitized values and errors
#[derive(Serialize, ToSchema)]
pub struct AuthorFormView {
    pub title: String,
    pub form: SanitizedAuthorForm,
    pub errors: Vec<FieldError>,
}

/// Delete confirmation listing the books that block the delete
#[derive(Serialize, ToSchema)]
pub struct AuthorDeleteView {
    pub title: String,
    pub author: AuthorView,
    pub books: Vec<BookSummaryView>,
}

fn delete_view(author: &Author, books: &[BookSummary]) -> AuthorDeleteView {
    AuthorDeleteView {
        title: "Delete Author".to_string(),
        author: AuthorView::from(author),
        books: books.iter().map(BookSummaryView::from).collect(),
    }
}

/// List all authors
#[utoipa::path(
    get,
    path = "/catalog/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Author list, with the pending one-shot notice if any", body = AuthorListView)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<AuthorListView>)> {
    let (session, jar) = client_session(jar);
    let (authors, notice) = state.services.authors.list(session).await?;

    Ok((
        jar,
        Json(AuthorListView {
            title: "Author List".to_string(),
            notice,
            authors: authors.iter().map(AuthorView::from).collect(),
        }),
    ))
}

/// Get author details with their books
#[utoipa::path(
    get,
    path = "/catalog/authors/{id}",
    tag = "authors",
    params(
        ("id" = String, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorDetailView),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AuthorDetailView>> {
    let id = parse_id(&id)?;
    let (author, books) = state.services.authors.detail(id).await?;

    Ok(Json(AuthorDetailView {
        title: "Author Detail".to_string(),
        author: AuthorView::from(&author),
        books: books.iter().map(BookSummaryView::from).collect(),
    }))
}

/// Render the empty create form
#[utoipa::path(
    get,
    path = "/catalog/authors/create",
    tag = "authors",
    responses(
        (status = 200, description = "Empty create form", body = AuthorFormView)
    )
)]
pub async fn create_author_form() -> Json<AuthorFormView> {
    Json(AuthorFormView {
        title: "Create Author".to_string(),
        form: SanitizedAuthorForm::default(),
        errors: Vec::new(),
    })
}

/// Submit the create form
#[utoipa::path(
    post,
    path = "/catalog/authors/create",
    tag = "authors",
    request_body(content = AuthorForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Author created; Location points at its url"),
        (status = 200, description = "Validation failed; form re-rendered with the full error list", body = AuthorFormView)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    match state.services.authors.create(&form).await? {
        CreateOutcome::Created(author) => Ok(found(author.url())),
        CreateOutcome::Invalid { sanitized, errors } => Ok(Json(AuthorFormView {
            title: "Create Author".to_string(),
            form: sanitized,
            errors,
        })
        .into_response()),
    }
}

/// Render the delete confirmation
#[utoipa::path(
    get,
    path = "/catalog/authors/{id}/delete",
    tag = "authors",
    params(
        ("id" = String, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Confirmation view with dependent books", body = AuthorDeleteView),
        (status = 302, description = "Author already gone; redirected to the list"),
        (status = 400, description = "Malformed identifier")
    )
)]
pub async fn delete_author_form(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    match state.services.authors.delete_preview(id).await? {
        Some((author, books)) => Ok(Json(delete_view(&author, &books)).into_response()),
        None => Ok(found("/catalog/authors".to_string())),
    }
}

/// Submit the delete confirmation
#[utoipa::path(
    post,
    path = "/catalog/authors/{id}/delete",
    tag = "authors",
    params(
        ("id" = String, Path, description = "Author ID")
    ),
    responses(
        (status = 302, description = "Author deleted (or already gone); redirected to the list"),
        (status = 200, description = "Books still reference the author; confirmation re-rendered", body = AuthorDeleteView),
        (status = 400, description = "Malformed identifier")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> AppResult<(CookieJar, Response)> {
    let id = parse_id(&id)?;
    let (session, jar) = client_session(jar);

    let response = match state.services.authors.delete(id, session).await? {
        DeleteOutcome::Deleted { .. } | DeleteOutcome::AlreadyGone => {
            found("/catalog/authors".to_string())
        }
        DeleteOutcome::Blocked { author, books } => {
            Json(delete_view(&author, &books)).into_response()
        }
    };

    Ok((jar, response))
}
