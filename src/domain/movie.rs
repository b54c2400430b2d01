//! The movie record and its validated write payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MovieId;

/// A media file record as stored in the `movies` table.
///
/// Optional text columns are omitted from the JSON output when null;
/// `is_new` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// Storage-assigned primary key.
    #[schema(value_type = i64, example = 1)]
    pub id: MovieId,
    /// Title of the file.
    #[schema(example = "Inception")]
    pub title_file: String,
    /// Disk the file lives on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<String>,
    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Subtitle file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_file: Option<String>,
    /// File extension or container type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_file: Option<String>,
    /// Human-readable size, e.g. `"1.4 GB"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Whether the movie was recently added.
    #[serde(default)]
    pub is_new: bool,
}

/// Validated column values for an insert or a full-replacement update.
///
/// Built from a request body by
/// [`MovieInput::validate`](crate::api::dto::MovieInput::validate); the
/// required title is guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    /// Title of the file.
    pub title_file: String,
    /// Disk the file lives on.
    pub disk: Option<String>,
    /// File name.
    pub file: Option<String>,
    /// Subtitle file name.
    pub sub_file: Option<String>,
    /// File extension or container type.
    pub type_file: Option<String>,
    /// Human-readable size.
    pub size: Option<String>,
    /// Whether the movie was recently added.
    pub is_new: bool,
}

impl NewMovie {
    /// Creates a payload with only the required title set.
    #[must_use]
    pub fn titled(title_file: impl Into<String>) -> Self {
        Self {
            title_file: title_file.into(),
            disk: None,
            file: None,
            sub_file: None,
            type_file: None,
            size: None,
            is_new: false,
        }
    }

    /// Attaches a storage-assigned id, producing the stored record.
    #[must_use]
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title_file: self.title_file,
            disk: self.disk,
            file: self.file,
            sub_file: self.sub_file,
            type_file: self.type_file,
            size: self.size,
            is_new: self.is_new,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn null_columns_are_omitted_from_json() {
        let movie = NewMovie {
            is_new: true,
            ..NewMovie::titled("Inception")
        }
        .into_movie(MovieId::new(1));

        let Ok(json) = serde_json::to_value(&movie) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title_file": "Inception", "is_new": true})
        );
    }

    #[test]
    fn is_new_is_always_serialized() {
        let movie = NewMovie::titled("Heat").into_movie(MovieId::new(2));
        let Ok(json) = serde_json::to_value(&movie) else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("is_new"), Some(&serde_json::Value::Bool(false)));
    }

    #[test]
    fn into_movie_keeps_every_column() {
        let input = NewMovie {
            title_file: "Alien".to_string(),
            disk: Some("D2".to_string()),
            file: Some("alien.mkv".to_string()),
            sub_file: Some("alien.srt".to_string()),
            type_file: Some("mkv".to_string()),
            size: Some("4.2 GB".to_string()),
            is_new: false,
        };
        let movie = input.clone().into_movie(MovieId::new(9));
        assert_eq!(movie.id, MovieId::new(9));
        assert_eq!(movie.title_file, input.title_file);
        assert_eq!(movie.disk, input.disk);
        assert_eq!(movie.file, input.file);
        assert_eq!(movie.sub_file, input.sub_file);
        assert_eq!(movie.type_file, input.type_file);
        assert_eq!(movie.size, input.size);
    }
}
