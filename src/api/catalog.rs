//! Read-only catalog endpoints: home page, books, copies, genres

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookShort},
        book_instance::{BookInstance, BookInstanceShort},
        genre::Genre,
    },
};

use super::{authors::AuthorView, parse_id};

/// Record counts shown on the catalog home page
#[derive(Serialize, ToSchema)]
pub struct CatalogCounts {
    pub books: i64,
    pub book_instances: i64,
    pub book_instances_available: i64,
    pub authors: i64,
    pub genres: i64,
}

#[derive(Serialize, ToSchema)]
pub struct CatalogHomeView {
    pub title: String,
    pub counts: CatalogCounts,
}

#[derive(Serialize, ToSchema)]
pub struct GenreView {
    pub id: i32,
    pub name: String,
    pub url: String,
}

impl From<&Genre> for GenreView {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
            url: genre.url(),
        }
    }
}

/// Copy row on the book detail view
#[derive(Serialize, ToSchema)]
pub struct InstanceView {
    pub id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: String,
    pub url: String,
}

impl From<&BookInstance> for InstanceView {
    fn from(instance: &BookInstance) -> Self {
        Self {
            id: instance.id,
            imprint: instance.imprint.clone(),
            status: instance.status().label().to_string(),
            due_back: instance.due_back_formatted(),
            url: instance.url(),
        }
    }
}

/// Minimal book link used where only the title matters
#[derive(Serialize, ToSchema)]
pub struct BookRef {
    pub id: i32,
    pub title: String,
    pub url: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookListEntry {
    pub id: i32,
    pub title: String,
    pub author_name: String,
    pub url: String,
}

impl From<&BookShort> for BookListEntry {
    fn from(book: &BookShort) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author_name: book.author_name(),
            url: book.url(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct BookListView {
    pub title: String,
    pub books: Vec<BookListEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetailView {
    pub title: String,
    pub id: i32,
    pub summary: String,
    pub isbn: String,
    pub url: String,
    pub author: AuthorView,
    pub genres: Vec<GenreView>,
    pub instances: Vec<InstanceView>,
}

#[derive(Serialize, ToSchema)]
pub struct InstanceListEntry {
    pub id: i32,
    pub book_title: String,
    pub imprint: String,
    pub status: String,
    pub url: String,
}

impl From<&BookInstanceShort> for InstanceListEntry {
    fn from(instance: &BookInstanceShort) -> Self {
        Self {
            id: instance.id,
            book_title: instance.book_title.clone(),
            imprint: instance.imprint.clone(),
            status: instance.status().label().to_string(),
            url: instance.url(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct InstanceListView {
    pub title: String,
    pub book_instances: Vec<InstanceListEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct InstanceDetailView {
    pub title: String,
    pub instance: InstanceView,
    pub book: BookRef,
}

#[derive(Serialize, ToSchema)]
pub struct GenreListView {
    pub title: String,
    pub genres: Vec<GenreView>,
}

#[derive(Serialize, ToSchema)]
pub struct GenreDetailView {
    pub title: String,
    pub genre: GenreView,
    pub books: Vec<BookListEntry>,
}

/// Catalog home page with record counts
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Record counts", body = CatalogHomeView)
    )
)]
pub async fn catalog_home(
    State(state): State<crate::AppState>,
) -> AppResult<Json<CatalogHomeView>> {
    let counts = state.services.catalog.counts().await?;
    Ok(Json(CatalogHomeView {
        title: "Local Library Home".to_string(),
        counts,
    }))
}

/// List all books
#[utoipa::path(
    get,
    path = "/catalog/books",
    tag = "catalog",
    responses(
        (status = 200, description = "Book list", body = BookListView)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<BookListView>> {
    let books = state.services.catalog.book_list().await?;
    Ok(Json(BookListView {
        title: "Book List".to_string(),
        books: books.iter().map(BookListEntry::from).collect(),
    }))
}

/// Get book details with genres and copies
#[utoipa::path(
    get,
    path = "/catalog/book/{id}",
    tag = "catalog",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailView),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookDetailView>> {
    let id = parse_id(&id)?;
    let (book, author) = state.services.catalog.book_detail(id).await?;

    Ok(Json(book_detail_view(&book, AuthorView::from(&author))))
}

fn book_detail_view(book: &Book, author: AuthorView) -> BookDetailView {
    BookDetailView {
        title: book.title.clone(),
        id: book.id,
        summary: book.decoded_summary(),
        isbn: book.isbn.clone(),
        url: book.url(),
        author,
        genres: book.genres.iter().map(GenreView::from).collect(),
        instances: book.instances.iter().map(InstanceView::from).collect(),
    }
}

/// List all book copies
#[utoipa::path(
    get,
    path = "/catalog/bookinstances",
    tag = "catalog",
    responses(
        (status = 200, description = "Copy list", body = InstanceListView)
    )
)]
pub async fn list_book_instances(
    State(state): State<crate::AppState>,
) -> AppResult<Json<InstanceListView>> {
    let instances = state.services.catalog.instance_list().await?;
    Ok(Json(InstanceListView {
        title: "Book Instance List".to_string(),
        book_instances: instances.iter().map(InstanceListEntry::from).collect(),
    }))
}

/// Get copy details
#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}",
    tag = "catalog",
    params(
        ("id" = String, Path, description = "Book instance ID")
    ),
    responses(
        (status = 200, description = "Copy details", body = InstanceDetailView),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_book_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<InstanceDetailView>> {
    let id = parse_id(&id)?;
    let (instance, book) = state.services.catalog.instance_detail(id).await?;

    Ok(Json(InstanceDetailView {
        title: format!("Copy: {}", book.title),
        instance: InstanceView::from(&instance),
        book: BookRef {
            id: book.id,
            title: book.title.clone(),
            url: book.url(),
        },
    }))
}

/// List all genres
#[utoipa::path(
    get,
    path = "/catalog/genres",
    tag = "catalog",
    responses(
        (status = 200, description = "Genre list", body = GenreListView)
    )
)]
pub async fn list_genres(State(state): State<crate::AppState>) -> AppResult<Json<GenreListView>> {
    let genres = state.services.catalog.genre_list().await?;
    Ok(Json(GenreListView {
        title: "Genre List".to_string(),
        genres: genres.iter().map(GenreView::from).collect(),
    }))
}

/// Get genre details with its books
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}",
    tag = "catalog",
    params(
        ("id" = String, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = GenreDetailView),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<GenreDetailView>> {
    let id = parse_id(&id)?;
    let (genre, books) = state.services.catalog.genre_detail(id).await?;

    Ok(Json(GenreDetailView {
        title: "Genre Detail".to_string(),
        genre: GenreView::from(&genre),
        books: books.iter().map(BookListEntry::from).collect(),
    }))
}
