//! Book instances (physical copies) repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    forms::NewBookInstance,
    models::{Book, BookInstance},
};

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all copies with the book title resolved. The book reference
    /// may dangle after a book deletion; the join is LEFT so such copies
    /// still list, with no title.
    pub async fn list(&self) -> AppResult<Vec<BookInstance>> {
        let rows = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT bi.id, bi.book_id, bi.imprint, bi.status, bi.due_back,
                   b.title AS book_title
            FROM book_instances bi
            LEFT JOIN books b ON b.id = bi.book_id
            ORDER BY bi.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a copy by ID with its book resolved, or None if the record is
    /// gone. A dangling book reference leaves `book` as None.
    pub async fn find(&self, id: i32) -> AppResult<Option<BookInstance>> {
        let instance = sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, status, due_back FROM book_instances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let mut instance = match instance {
            Some(instance) => instance,
            None => return Ok(None),
        };

        instance.book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(instance.book_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(Some(instance))
    }

    /// Get a copy by ID with its book resolved
    pub async fn get(&self, id: i32) -> AppResult<BookInstance> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book copy not found".to_string()))
    }

    /// All copies of a given book
    pub async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<BookInstance>> {
        let rows = sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, status, due_back FROM book_instances WHERE book_id = $1 ORDER BY id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new copy, returning the assigned id. Omitted status and
    /// due-back fall back to the schema defaults.
    pub async fn create(&self, new: &NewBookInstance) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO book_instances (book_id, imprint, status, due_back)
            VALUES ($1, $2, COALESCE($3, 'Maintenance'), COALESCE($4, CURRENT_DATE))
            RETURNING id
            "#,
        )
        .bind(new.book_id)
        .bind(&new.imprint)
        .bind(new.status.map(|s| s.as_str()))
        .bind(new.due_back)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Full replace of the validated fields
    pub async fn update(&self, id: i32, new: &NewBookInstance) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE book_instances
            SET book_id = $1, imprint = $2,
                status = COALESCE($3, 'Maintenance'),
                due_back = COALESCE($4, CURRENT_DATE)
            WHERE id = $5
            "#,
        )
        .bind(new.book_id)
        .bind(&new.imprint)
        .bind(new.status.map(|s| s.as_str()))
        .bind(new.due_back)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book copy not found".to_string()));
        }
        Ok(())
    }

    /// Remove a copy. Removing an already-removed id is a no-op, so a
    /// repeated delete submission stays harmless.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count all copies
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count copies currently available for loan
    pub async fn count_available(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = 'Available'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
