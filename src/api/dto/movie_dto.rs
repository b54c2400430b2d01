//! Movie request DTO and its boundary validation.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::NewMovie;
use crate::error::ApiError;

/// Message returned when the required title is missing or blank.
pub const TITLE_REQUIRED_MESSAGE: &str = "Le champ title_file est requis";

/// Request body for `POST /movies` and `PUT /movies/{id}`.
///
/// Any `id` in the body is ignored. On `PUT` every optional field that is
/// omitted is stored as null and an omitted `is_new` is stored as `false`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MovieInput {
    /// Title of the file. Required, must not be blank.
    #[schema(required = true, example = "Inception")]
    pub title_file: Option<String>,
    /// Disk the file lives on.
    #[serde(default)]
    pub disk: Option<String>,
    /// File name.
    #[serde(default)]
    pub file: Option<String>,
    /// Subtitle file name.
    #[serde(default)]
    pub sub_file: Option<String>,
    /// File extension or container type.
    #[serde(default)]
    pub type_file: Option<String>,
    /// Human-readable size.
    #[serde(default)]
    pub size: Option<String>,
    /// Whether the movie was recently added. Defaults to `false`.
    #[serde(default)]
    pub is_new: Option<bool>,
}

impl MovieInput {
    /// Checks required fields and produces the column values to store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `title_file` is missing or
    /// blank.
    pub fn validate(self) -> Result<NewMovie, ApiError> {
        let title_file = self
            .title_file
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::Validation(TITLE_REQUIRED_MESSAGE.to_string()))?;

        Ok(NewMovie {
            title_file,
            disk: self.disk,
            file: self.file,
            sub_file: self.sub_file,
            type_file: self.type_file,
            size: self.size,
            is_new: self.is_new.unwrap_or(false),
        })
    }
}
