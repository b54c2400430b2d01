//! In-process movie store.
//!
//! [`InMemoryMovieStore`] keeps all rows in a `BTreeMap` behind a
//! [`tokio::sync::RwLock`], so listing yields ascending id order just like
//! the PostgreSQL backend. Ids start at 1 and are never reused.
//!
//! Selected with `PERSISTENCE_ENABLED=false`; contents are lost on exit.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::MovieStore;
use crate::domain::{Movie, MovieId, NewMovie};
use crate::error::ApiError;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<MovieId, Movie>,
    last_id: i64,
}

/// Movie store backed by process memory.
///
/// # Concurrency
///
/// - Reads run concurrently.
/// - Writes are serialized on a single lock, so id assignment is
///   race-free.
#[derive(Debug)]
pub struct InMemoryMovieStore {
    table: RwLock<Table>,
}

impl InMemoryMovieStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Returns the number of stored movies.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if no movies are stored.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, ApiError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: MovieId) -> Result<Option<Movie>, ApiError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, movie: &NewMovie) -> Result<Movie, ApiError> {
        let mut table = self.table.write().await;
        let next = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| ApiError::StorageFailure("movie id sequence exhausted".to_string()))?;
        table.last_id = next;

        let id = MovieId::new(next);
        let stored = movie.clone().into_movie(id);
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: MovieId, movie: &NewMovie) -> Result<Option<Movie>, ApiError> {
        let mut table = self.table.write().await;
        let Some(slot) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        *slot = movie.clone().into_movie(id);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: MovieId) -> Result<bool, ApiError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn close(&self) {}
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryMovieStore::new();
        let Ok(first) = store.insert(&NewMovie::titled("Alien")).await else {
            panic!("insert failed");
        };
        let Ok(second) = store.insert(&NewMovie::titled("Aliens")).await else {
            panic!("insert failed");
        };
        assert_eq!(first.id, MovieId::new(1));
        assert_eq!(second.id, MovieId::new(2));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryMovieStore::new();
        let Ok(first) = store.insert(&NewMovie::titled("Alien")).await else {
            panic!("insert failed");
        };
        assert!(matches!(store.delete(first.id).await, Ok(true)));

        let Ok(second) = store.insert(&NewMovie::titled("Aliens")).await else {
            panic!("insert failed");
        };
        assert_eq!(second.id, MovieId::new(2));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let store = InMemoryMovieStore::new();
        assert!(matches!(store.get(MovieId::new(1)).await, Ok(None)));
    }

    #[tokio::test]
    async fn update_nonexistent_creates_nothing() {
        let store = InMemoryMovieStore::new();
        let result = store.update(MovieId::new(3), &NewMovie::titled("Heat")).await;
        assert!(matches!(result, Ok(None)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_replaces_all_columns() {
        let store = InMemoryMovieStore::new();
        let original = NewMovie {
            disk: Some("D1".to_string()),
            is_new: true,
            ..NewMovie::titled("Heat")
        };
        let Ok(created) = store.insert(&original).await else {
            panic!("insert failed");
        };

        let Ok(Some(updated)) = store
            .update(created.id, &NewMovie::titled("Heat (1995)"))
            .await
        else {
            panic!("update failed");
        };
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title_file, "Heat (1995)");
        assert_eq!(updated.disk, None);
        assert!(!updated.is_new);
    }

    #[tokio::test]
    async fn delete_nonexistent_returns_false() {
        let store = InMemoryMovieStore::new();
        assert!(matches!(store.delete(MovieId::new(1)).await, Ok(false)));
    }

    #[tokio::test]
    async fn list_returns_rows_in_id_order() {
        let store = InMemoryMovieStore::new();
        for title in ["Contact", "Alien", "Brazil"] {
            let Ok(_) = store.insert(&NewMovie::titled(title)).await else {
                panic!("insert failed");
            };
        }

        let Ok(all) = store.list().await else {
            panic!("list failed");
        };
        let ids: Vec<i64> = all.iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
