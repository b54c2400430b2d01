//! Movie CRUD handlers: list, get, create, update, delete.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{MessageResponse, MovieInput};
use crate::app_state::AppState;
use crate::domain::{Movie, MovieId, NewMovie};
use crate::error::{ApiError, ErrorResponse};

/// Message returned after a successful deletion.
pub const MOVIE_DELETED_MESSAGE: &str = "Film supprimé avec succès";

/// `GET /movies` — List every movie.
///
/// # Errors
///
/// Returns [`ApiError::StorageFailure`] on storage failure.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    summary = "List movies",
    description = "Returns every stored movie in ascending id order.",
    responses(
        (status = 200, description = "All movies", body = Vec<Movie>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.movie_service.list_movies().await?;
    Ok(Json(movies))
}

/// `GET /movies/{id}` — Fetch one movie.
///
/// # Errors
///
/// Returns [`ApiError::MovieNotFound`] if the movie does not exist.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Get a movie",
    description = "Returns a single movie by its id.",
    params(
        ("id" = i64, Path, description = "Movie id"),
    ),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_movie_id(id)?;
    let movie = state.movie_service.get_movie(id).await?;
    Ok(Json(movie))
}

/// `POST /movies` — Create a movie.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] if `title_file` is missing.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    summary = "Create a movie",
    description = "Stores a new movie. `title_file` is required; `is_new` defaults to false. The id is assigned by storage.",
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = parse_body(body)?;
    let created = state.movie_service.create_movie(movie).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /movies/{id}` — Replace a movie.
///
/// # Errors
///
/// Returns [`ApiError::MovieNotFound`] if the movie does not exist.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Replace a movie",
    description = "Overwrites every column of an existing movie. Omitted optional fields are stored as null. Never creates a movie.",
    params(
        ("id" = i64, Path, description = "Movie id"),
    ),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_movie_id(id)?;
    let movie = parse_body(body)?;
    let updated = state.movie_service.update_movie(id, movie).await?;
    Ok(Json(updated))
}

/// `DELETE /movies/{id}` — Remove a movie.
///
/// # Errors
///
/// Returns [`ApiError::MovieNotFound`] if the movie does not exist.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    summary = "Delete a movie",
    description = "Removes a movie permanently.",
    params(
        ("id" = i64, Path, description = "Movie id"),
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_movie_id(id)?;
    state.movie_service.delete_movie(id).await?;
    Ok(Json(MessageResponse::new(MOVIE_DELETED_MESSAGE)))
}

/// Movie routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}

fn parse_movie_id(path: Result<Path<i64>, PathRejection>) -> Result<MovieId, ApiError> {
    let Path(raw) = path.map_err(|rejection| {
        ApiError::Validation(format!(
            "identifiant de film invalide: {}",
            rejection.body_text()
        ))
    })?;
    Ok(MovieId::new(raw))
}

fn parse_body(body: Result<Json<MovieInput>, JsonRejection>) -> Result<NewMovie, ApiError> {
    let Json(input) = body.map_err(|rejection| {
        ApiError::Validation(format!("corps JSON invalide: {}", rejection.body_text()))
    })?;
    input.validate()
}
