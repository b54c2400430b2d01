//! Persistence layer: the movie store and its backends.
//!
//! [`MovieStore`] is the single gateway to movie storage. Every operation
//! issues one statement; there are no multi-statement transactions and no
//! retries. Driver failures surface as [`ApiError::StorageFailure`].
//!
//! Two backends exist: [`PostgresMovieStore`] over a `sqlx::PgPool`, and
//! [`InMemoryMovieStore`], used when persistence is switched off.

pub mod memory;
pub mod models;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

pub use memory::InMemoryMovieStore;
pub use postgres::PostgresMovieStore;

use crate::domain::{Movie, MovieId, NewMovie};
use crate::error::ApiError;

/// Storage gateway for movie records.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait MovieStore: Send + Sync + fmt::Debug {
    /// Returns every stored movie in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] on storage failure.
    async fn list(&self) -> Result<Vec<Movie>, ApiError>;

    /// Fetches one movie, or `None` when no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] on storage failure.
    async fn get(&self, id: MovieId) -> Result<Option<Movie>, ApiError>;

    /// Inserts a movie and returns it with its storage-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] on storage failure.
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, ApiError>;

    /// Overwrites every column of an existing movie.
    ///
    /// Returns `None` when no row was affected; never creates a row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] on storage failure.
    async fn update(&self, id: MovieId, movie: &NewMovie) -> Result<Option<Movie>, ApiError>;

    /// Deletes a movie. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] on storage failure.
    async fn delete(&self, id: MovieId) -> Result<bool, ApiError>;

    /// Checks that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StorageFailure`] when it is not.
    async fn ping(&self) -> Result<(), ApiError>;

    /// Releases backend resources. Called once on shutdown.
    async fn close(&self);
}
