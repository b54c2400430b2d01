//! System endpoints: API document, health check, unmatched routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::ApiDoc;
use crate::app_state::AppState;
use crate::error::ApiError;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    database: String,
    timestamp: String,
    version: String,
}

/// `GET /` — Generated OpenAPI document.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "API document",
    description = "Returns the OpenAPI document generated from the handler annotations.",
    responses(
        (status = 200, description = "OpenAPI document", body = serde_json::Value),
    )
)]
pub async fn openapi_handler() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// `GET /health` — Service and storage health.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Reports whether the service can reach its storage backend.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Storage is unreachable", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = state.movie_service.storage_healthy().await;
    let (code, (status, database)) = if healthy {
        (StatusCode::OK, ("healthy", "up"))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ("degraded", "down"))
    };
    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Catch-all for requests no route matched, by path or by method.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(openapi_handler))
        .route("/health", get(health_handler))
}
