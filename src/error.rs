//! Service error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type. Each variant maps to a specific
//! HTTP status code and JSON body. Not-found kinds answer with a fixed
//! `{"message": ...}` body; every other kind answers with an
//! [`ErrorResponse`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::dto::MessageResponse;
use crate::domain::MovieId;

/// Body returned when a movie id matches no row.
pub const MOVIE_NOT_FOUND_MESSAGE: &str = "Film non trouvé";

/// Body returned by the catch-all route.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route non trouvée";

/// Generic body returned for server-side failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne du serveur";

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": "Erreur interne du serveur",
///   "code": 3001,
///   "reference": "0b5c7f0e-8d1f-4a7e-9a52-1f3f0c1d2e3f"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message. Never contains driver output.
    pub error: String,
    /// Numeric error code (see [`ApiError`] for ranges).
    pub code: u32,
    /// Correlation id of the server-side log line, present on 5xx only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Uuid>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No movie row matched the given id.
    #[error("movie not found: {0}")]
    MovieNotFound(MovieId),

    /// No route matched the request.
    #[error("route not found")]
    RouteNotFound,

    /// Request was rejected before reaching storage.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Any database or driver failure.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::RouteNotFound => 2000,
            Self::MovieNotFound(_) => 2001,
            Self::StorageFailure(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MovieNotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        match self {
            Self::MovieNotFound(_) => {
                (status, Json(MessageResponse::new(MOVIE_NOT_FOUND_MESSAGE))).into_response()
            }
            Self::RouteNotFound => {
                (status, Json(MessageResponse::new(ROUTE_NOT_FOUND_MESSAGE))).into_response()
            }
            Self::Validation(message) => {
                tracing::debug!(code, %message, "request rejected");
                let body = ErrorResponse {
                    error: message,
                    code,
                    reference: None,
                };
                (status, Json(body)).into_response()
            }
            Self::StorageFailure(_) => {
                let reference = Uuid::new_v4();
                tracing::error!(%reference, code, error = %self, "request failed");
                let body = ErrorResponse {
                    error: INTERNAL_ERROR_MESSAGE.to_string(),
                    code,
                    reference: Some(reference),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
