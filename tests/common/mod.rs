#![allow(dead_code, clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use movies_api::api;
use movies_api::app_state::AppState;
use movies_api::domain::{Movie, MovieId, NewMovie};
use movies_api::error::ApiError;
use movies_api::persistence::{InMemoryMovieStore, MovieStore};

/// Driver text the failing store reports; must never reach a client.
pub const DRIVER_ERROR: &str = "connection refused (os error 111) at 10.0.0.5:5432";

/// Store whose every operation fails like an unreachable database.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl MovieStore for FailingStore {
    async fn list(&self) -> Result<Vec<Movie>, ApiError> {
        Err(ApiError::StorageFailure(DRIVER_ERROR.to_string()))
    }

    async fn get(&self, _id: MovieId) -> Result<Option<Movie>, ApiError> {
        Err(ApiError::StorageFailure(DRIVER_ERROR.to_string()))
    }

    async fn insert(&self, _movie: &NewMovie) -> Result<Movie, ApiError> {
        Err(ApiError::StorageFailure(DRIVER_ERROR.to_string()))
    }

    async fn update(&self, _id: MovieId, _movie: &NewMovie) -> Result<Option<Movie>, ApiError> {
        Err(ApiError::StorageFailure(DRIVER_ERROR.to_string()))
    }

    async fn delete(&self, _id: MovieId) -> Result<bool, ApiError> {
        Err(ApiError::StorageFailure(DRIVER_ERROR.to_string()))
    }

    async fn ping(&self) -> Result<(), ApiError> {
        Err(ApiError::StorageFailure(DRIVER_ERROR.to_string()))
    }

    async fn close(&self) {}
}

/// Builds the application router over the given store.
pub fn build_app(store: Arc<dyn MovieStore>) -> Router {
    api::build_router().with_state(AppState::new(store))
}

/// Builds the application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_app(Arc::new(InMemoryMovieStore::new()))
}

/// Sends one request through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    let Ok(request) = request else {
        panic!("failed to build request for {uri}");
    };
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router failed for {uri}");
    };
    response
}

/// Sends a request with a raw, possibly malformed, JSON body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw));
    let Ok(request) = request else {
        panic!("failed to build request for {uri}");
    };
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router failed for {uri}");
    };
    response
}

/// `GET` helper.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

/// Reads the response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("failed to read body");
    };
    let Ok(json) = serde_json::from_slice(&bytes) else {
        panic!("body is not JSON: {}", String::from_utf8_lossy(&bytes));
    };
    json
}

/// Asserts the status and returns the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
