//! Type-safe movie identifier.
//!
//! [`MovieId`] is a newtype wrapper around the `BIGSERIAL` primary key of
//! the `movies` table so that movie identifiers cannot be confused with
//! other integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a stored movie.
///
/// Assigned by storage on insert and immutable thereafter. Serializes as a
/// plain JSON integer and binds as a plain `BIGINT` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MovieId(i64);

impl MovieId {
    /// Creates a `MovieId` from a raw database key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw database key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<MovieId> for i64 {
    fn from(id: MovieId) -> Self {
        id.0
    }
}
