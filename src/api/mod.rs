//! REST API layer: route handlers, DTOs, router composition and the
//! generated OpenAPI document.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::api::dto::{MessageResponse, MovieInput};
use crate::app_state::AppState;
use crate::domain::Movie;
use crate::error::ErrorResponse;

/// OpenAPI document generated from the handler annotations.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        description = "CRUD operations over the `movies` table."
    ),
    paths(
        handlers::movies::list_movies,
        handlers::movies::get_movie,
        handlers::movies::create_movie,
        handlers::movies::update_movie,
        handlers::movies::delete_movie,
        handlers::system::openapi_handler,
        handlers::system::health_handler,
    ),
    components(schemas(Movie, MovieInput, MessageResponse, ErrorResponse)),
    tags(
        (name = "Movies", description = "Movie records"),
        (name = "System", description = "Documentation and health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router, including the catch-all 404 handler.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .fallback(handlers::system::route_not_found)
        .method_not_allowed_fallback(handlers::system::route_not_found);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
