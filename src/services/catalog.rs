//! Read-only catalog service for books, copies, and genres

use crate::{
    api::catalog::CatalogCounts,
    error::AppResult,
    models::{
        author::Author,
        book::{Book, BookShort},
        book_instance::{BookInstance, BookInstanceShort},
        genre::Genre,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record counts for the catalog home page, fetched concurrently
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let (books, book_instances, book_instances_available, authors, genres) = tokio::try_join!(
            self.repository.books.count(),
            self.repository.book_instances.count(),
            self.repository.book_instances.count_available(),
            self.repository.authors.count(),
            self.repository.genres.count(),
        )?;

        Ok(CatalogCounts {
            books,
            book_instances,
            book_instances_available,
            authors,
            genres,
        })
    }

    /// All books with author names
    pub async fn book_list(&self) -> AppResult<Vec<BookShort>> {
        self.repository.books.list_short().await
    }

    /// A book with genres and copies loaded, plus its author
    pub async fn book_detail(&self, id: i32) -> AppResult<(Book, Author)> {
        let book = self.repository.books.get_by_id(id).await?;
        let author = self.repository.authors.get_by_id(book.author_id).await?;
        Ok((book, author))
    }

    /// All copies with their book titles
    pub async fn instance_list(&self) -> AppResult<Vec<BookInstanceShort>> {
        self.repository.book_instances.list_short().await
    }

    /// A copy plus the book it belongs to
    pub async fn instance_detail(&self, id: i32) -> AppResult<(BookInstance, Book)> {
        let instance = self.repository.book_instances.get_by_id(id).await?;
        let book = self.repository.books.get_by_id(instance.book_id).await?;
        Ok((instance, book))
    }

    /// All genres ordered by name
    pub async fn genre_list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// A genre and the books filed under it, fetched concurrently
    pub async fn genre_detail(&self, id: i32) -> AppResult<(Genre, Vec<BookShort>)> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.get_by_id(id),
            self.repository.books.list_by_genre(id),
        )?;
        Ok((genre, books))
    }

    /// Round-trip to the database, used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.repository.pool)
            .await?;
        Ok(())
    }
}
