//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookShort, BookSummary},
        book_instance::BookInstance,
        genre::Genre,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All books with their author's name, ordered by title
    pub async fn list_short(&self) -> AppResult<Vec<BookShort>> {
        let books = sqlx::query_as::<_, BookShort>(
            r#"
            SELECT b.id, b.title,
                   a.family_name AS author_family_name,
                   a.first_name AS author_first_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            ORDER BY b.title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Books referencing an author, projected to title and summary
    pub async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<BookSummary>> {
        let books = sqlx::query_as::<_, BookSummary>(
            r#"
            SELECT id, title, summary
            FROM books
            WHERE author_id = $1
            ORDER BY title
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get a book by ID with genres and instances loaded
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let mut book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author_id, summary, isbn
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        book.genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY g.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        book.instances = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT id, book_id, imprint, status, due_back
            FROM book_instances
            WHERE book_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(book)
    }

    /// Books referencing a genre, with author names
    pub async fn list_by_genre(&self, genre_id: i32) -> AppResult<Vec<BookShort>> {
        let books = sqlx::query_as::<_, BookShort>(
            r#"
            SELECT b.id, b.title,
                   a.family_name AS author_family_name,
                   a.first_name AS author_first_name
            FROM book_genres bg
            JOIN books b ON b.id = bg.book_id
            JOIN authors a ON a.id = b.author_id
            WHERE bg.genre_id = $1
            ORDER BY b.title
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Total number of books
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
