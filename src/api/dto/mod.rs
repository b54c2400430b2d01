//! Data Transfer Objects for REST request/response serialization.
//!
//! Responses carrying a movie serialize [`crate::domain::Movie`] directly.

pub mod common_dto;
pub mod movie_dto;

pub use common_dto::*;
pub use movie_dto::*;
