//! Genres repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    forms::NewGenre,
    models::Genre,
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all genres, sorted alphabetically
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>("SELECT * FROM genres ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get genre by ID, or None if the record is gone
    pub async fn find(&self, id: i32) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(genre)
    }

    /// Get genre by ID
    pub async fn get(&self, id: i32) -> AppResult<Genre> {
        self.find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))
    }

    /// Insert a new genre, returning the assigned id
    pub async fn create(&self, new: &NewGenre) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
            .bind(&new.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    /// Full replace of the validated fields
    pub async fn update(&self, id: i32, new: &NewGenre) -> AppResult<()> {
        let result = sqlx::query("UPDATE genres SET name = $1 WHERE id = $2")
            .bind(&new.name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Genre not found".to_string()));
        }
        Ok(())
    }

    /// Remove a genre. Removing an already-removed id is a no-op.
    /// Junction rows go with it; books themselves are untouched.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE genre_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count all genres
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
