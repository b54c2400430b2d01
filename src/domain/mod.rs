//! Domain layer: the movie record and its identifier.

pub mod movie;
pub mod movie_id;

pub use movie::{Movie, NewMovie};
pub use movie_id::MovieId;
