//! Movie service: maps store results onto the API's error model.

use std::sync::Arc;

use crate::domain::{Movie, MovieId, NewMovie};
use crate::error::ApiError;
use crate::persistence::MovieStore;

/// Orchestration layer for all movie operations.
///
/// Stateless coordinator over an injected [`MovieStore`]. Every lookup or
/// mutation that touches zero rows becomes [`ApiError::MovieNotFound`].
#[derive(Debug, Clone)]
pub struct MovieService {
    store: Arc<dyn MovieStore>,
}

impl MovieService {
    /// Creates a new `MovieService`.
    #[must_use]
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    /// Lists every movie in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] on storage failure.
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.store.list().await
    }

    /// Fetches a single movie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MovieNotFound`] if no row has this id.
    pub async fn get_movie(&self, id: MovieId) -> Result<Movie, ApiError> {
        self.store
            .get(id)
            .await?
            .ok_or(ApiError::MovieNotFound(id))
    }

    /// Stores a new movie and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] on storage failure.
    pub async fn create_movie(&self, movie: NewMovie) -> Result<Movie, ApiError> {
        let created = self.store.insert(&movie).await?;
        tracing::info!(movie_id = %created.id, title = %created.title_file, "movie created");
        Ok(created)
    }

    /// Replaces every column of an existing movie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MovieNotFound`] if no row has this id; nothing
    /// is created in that case.
    pub async fn update_movie(&self, id: MovieId, movie: NewMovie) -> Result<Movie, ApiError> {
        let updated = self
            .store
            .update(id, &movie)
            .await?
            .ok_or(ApiError::MovieNotFound(id))?;
        tracing::info!(movie_id = %id, "movie updated");
        Ok(updated)
    }

    /// Deletes a movie.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MovieNotFound`] if no row has this id.
    pub async fn delete_movie(&self, id: MovieId) -> Result<(), ApiError> {
        if !self.store.delete(id).await? {
            return Err(ApiError::MovieNotFound(id));
        }
        tracing::info!(movie_id = %id, "movie deleted");
        Ok(())
    }

    /// Reports whether the backing store is reachable.
    pub async fn storage_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "storage health check failed");
                false
            }
        }
    }
}
