//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single-message body used for not-found and deletion responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    #[schema(example = "Film non trouvé")]
    pub message: String,
}

impl MessageResponse {
    /// Wraps a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
