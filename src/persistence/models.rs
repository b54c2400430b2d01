//! Database row model for the `movies` table.

use sqlx::FromRow;

use crate::domain::{Movie, MovieId};

/// Column list shared by every statement that returns movie rows.
pub const MOVIE_COLUMNS: &str = "id, title_file, disk, file, sub_file, type_file, size, is_new";

/// A row of the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// `TEXT NOT NULL`.
    pub title_file: String,
    /// Nullable `TEXT`.
    pub disk: Option<String>,
    /// Nullable `TEXT`.
    pub file: Option<String>,
    /// Nullable `TEXT`.
    pub sub_file: Option<String>,
    /// Nullable `TEXT`.
    pub type_file: Option<String>,
    /// Nullable `TEXT`.
    pub size: Option<String>,
    /// `BOOLEAN NOT NULL DEFAULT FALSE`.
    pub is_new: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: MovieId::new(row.id),
            title_file: row.title_file,
            disk: row.disk,
            file: row.file,
            sub_file: row.sub_file,
            type_file: row.type_file,
            size: row.size,
            is_new: row.is_new,
        }
    }
}
