//! PostgreSQL implementation of the movie store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::MovieStore;
use super::models::{MOVIE_COLUMNS, MovieRow};
use crate::config::DatabaseConfig;
use crate::domain::{Movie, MovieId, NewMovie};
use crate::error::ApiError;

/// PostgreSQL-backed movie store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresMovieStore {
    pool: PgPool,
}

impl PostgresMovieStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a bounded connection pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] if the connection options are
    /// invalid or the first connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ApiError> {
        let options = config.connect_options().map_err(storage_failure)?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(storage_failure)?;

        tracing::info!(
            max_connections = config.max_connections,
            "database pool ready"
        );
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] if a migration fails.
    pub async fn run_migrations(&self) -> Result<(), ApiError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::StorageFailure(e.to_string()))?;
        tracing::info!("database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl MovieStore for PostgresMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, ApiError> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id");
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_failure)?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn get(&self, id: MovieId) -> Result<Option<Movie>, ApiError> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_failure)?;

        Ok(row.map(Movie::from))
    }

    async fn insert(&self, movie: &NewMovie) -> Result<Movie, ApiError> {
        let query = format!(
            "INSERT INTO movies (title_file, disk, file, sub_file, type_file, size, is_new) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {MOVIE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&movie.title_file)
            .bind(&movie.disk)
            .bind(&movie.file)
            .bind(&movie.sub_file)
            .bind(&movie.type_file)
            .bind(&movie.size)
            .bind(movie.is_new)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_failure)?;

        Ok(Movie::from(row))
    }

    async fn update(&self, id: MovieId, movie: &NewMovie) -> Result<Option<Movie>, ApiError> {
        let query = format!(
            "UPDATE movies SET title_file = $1, disk = $2, file = $3, sub_file = $4, \
             type_file = $5, size = $6, is_new = $7 \
             WHERE id = $8 \
             RETURNING {MOVIE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&movie.title_file)
            .bind(&movie.disk)
            .bind(&movie.file)
            .bind(&movie.sub_file)
            .bind(&movie.type_file)
            .bind(&movie.size)
            .bind(movie.is_new)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_failure)?;

        Ok(row.map(Movie::from))
    }

    async fn delete(&self, id: MovieId) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_failure)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), ApiError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(storage_failure)?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

fn storage_failure(e: sqlx::Error) -> ApiError {
    ApiError::StorageFailure(e.to_string())
}
