//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    forms::NewBook,
    models::{Book, BookSummary, Genre},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books with the author display name resolved, sorted by title.
    /// The author reference may dangle; the join is LEFT so such books still list.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn,
                   a.family_name || ', ' || a.first_name AS author_name
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            ORDER BY b.title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Books projected to id and title, for form choice lists
    pub async fn list_summaries(&self) -> AppResult<Vec<BookSummary>> {
        let rows = sqlx::query_as::<_, BookSummary>("SELECT id, title FROM books ORDER BY title")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID with author and genres resolved, or None if the
    /// record is gone
    pub async fn find(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let mut book = match book {
            Some(book) => book,
            None => return Ok(None),
        };

        // Author lookup tolerates a dangling reference
        book.author = sqlx::query_as("SELECT * FROM authors WHERE id = $1")
            .bind(book.author_id)
            .fetch_optional(&self.pool)
            .await?;

        book.genres = self.get_book_genres(id).await?;

        Ok(Some(book))
    }

    /// Get book by ID with author and genres resolved
    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Load all genres for a book via the book_genres junction table
    async fn get_book_genres(&self, book_id: i32) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY g.name
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All books by a given author, sorted by title
    pub async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author_id = $1 ORDER BY title",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All books tagged with a given genre, sorted by title
    pub async fn list_by_genre(&self, genre_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.*
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = $1
            ORDER BY b.title
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new book with its genre links, returning the assigned id
    pub async fn create(&self, new: &NewBook) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author_id, summary, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.title)
        .bind(new.author_id)
        .bind(&new.summary)
        .bind(&new.isbn)
        .fetch_one(&self.pool)
        .await?;

        self.replace_genres(id, &new.genre_ids).await?;
        Ok(id)
    }

    /// Full replace of the validated fields and genre links
    pub async fn update(&self, id: i32, new: &NewBook) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author_id = $2, summary = $3, isbn = $4
            WHERE id = $5
            "#,
        )
        .bind(&new.title)
        .bind(new.author_id)
        .bind(&new.summary)
        .bind(&new.isbn)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        self.replace_genres(id, &new.genre_ids).await?;
        Ok(())
    }

    async fn replace_genres(&self, book_id: i32, genre_ids: &[i32]) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;
        for genre_id in genre_ids {
            sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2)")
                .bind(book_id)
                .bind(genre_id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Remove a book and its genre links. Copies referencing it are left
    /// behind and readers treat the dangling reference as not found.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count all books
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
