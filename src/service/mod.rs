//! Service layer: business logic orchestration.
//!
//! [`MovieService`] sits between the HTTP handlers and the
//! [`crate::persistence::MovieStore`], turning empty results into
//! not-found errors.

pub mod movie_service;

pub use movie_service::MovieService;
