//! Book instances repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book_instance::{BookInstance, BookInstanceShort, InstanceStatus},
};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All copies joined with their book title, ordered by book title
    pub async fn list_short(&self) -> AppResult<Vec<BookInstanceShort>> {
        let instances = sqlx::query_as::<_, BookInstanceShort>(
            r#"
            SELECT bi.id, bi.book_id, b.title AS book_title,
                   bi.imprint, bi.status, bi.due_back
            FROM book_instances bi
            JOIN books b ON b.id = bi.book_id
            ORDER BY b.title, bi.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(instances)
    }

    /// Get a copy by ID, failing with NotFound when absent
    pub async fn get_by_id(&self, id: i32) -> AppResult<BookInstance> {
        let instance = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT id, book_id, imprint, status, due_back
            FROM book_instances
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book instance with id {} not found", id)))?;

        Ok(instance)
    }

    /// Total number of copies
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of copies currently available for loan
    pub async fn count_available(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
                .bind(InstanceStatus::Available.as_code())
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
