//! # movies-api
//!
//! REST API over a single `movies` table.
//!
//! Five routes list, fetch, create, replace and delete movie records. Each
//! handler validates its input, issues one parameterized statement through
//! the [`persistence::MovieStore`] and serializes the result as JSON. The
//! OpenAPI document generated from the handler annotations is served at `/`.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── MovieService (service/)
//!     │
//!     ├── MovieStore (persistence/)
//!     │       ├── PostgresMovieStore
//!     │       └── InMemoryMovieStore
//!     │
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
