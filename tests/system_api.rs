//! Integration tests for the API document, health check and fallback route.

#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{build_app, build_test_app, expect_json, get, send};
use serde_json::{Value, json};

#[tokio::test]
async fn unknown_route_returns_404_with_message() {
    let app = build_test_app();
    let json = expect_json(get(&app, "/unknown").await, StatusCode::NOT_FOUND).await;
    assert_eq!(json, json!({"message": "Route non trouvée"}));
}

#[tokio::test]
async fn unknown_route_with_other_method_returns_404() {
    let app = build_test_app();
    let response = send(&app, Method::POST, "/films", Some(json!({}))).await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json, json!({"message": "Route non trouvée"}));
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_404() {
    let app = build_test_app();
    for (method, uri) in [
        (Method::PATCH, "/movies"),
        (Method::DELETE, "/movies"),
        (Method::POST, "/movies/1"),
        (Method::PUT, "/health"),
    ] {
        let response = send(&app, method, uri, None).await;
        let json = expect_json(response, StatusCode::NOT_FOUND).await;
        assert_eq!(json, json!({"message": "Route non trouvée"}), "{uri}");
    }
}

#[tokio::test]
async fn root_serves_openapi_document() {
    let app = build_test_app();
    let doc = expect_json(get(&app, "/").await, StatusCode::OK).await;

    let version = doc.get("openapi").and_then(Value::as_str).unwrap_or_default();
    assert!(version.starts_with("3."), "unexpected openapi version {version}");

    let Some(paths) = doc.get("paths").and_then(Value::as_object) else {
        panic!("document has no paths: {doc}");
    };
    assert!(paths.contains_key("/movies"));
    assert!(paths.contains_key("/movies/{id}"));

    let movie_schema = doc
        .get("components")
        .and_then(|c| c.get("schemas"))
        .and_then(|s| s.get("Movie"));
    assert!(movie_schema.is_some(), "Movie schema missing");
}

#[tokio::test]
async fn health_reports_up_for_reachable_store() {
    let app = build_test_app();
    let json = expect_json(get(&app, "/health").await, StatusCode::OK).await;
    assert_eq!(json.get("status"), Some(&json!("healthy")));
    assert_eq!(json.get("database"), Some(&json!("up")));
    assert!(json.get("version").is_some_and(Value::is_string));
}

#[tokio::test]
async fn health_reports_degraded_for_unreachable_store() {
    let app = build_app(Arc::new(common::FailingStore));
    let json = expect_json(get(&app, "/health").await, StatusCode::SERVICE_UNAVAILABLE).await;
    assert_eq!(json.get("status"), Some(&json!("degraded")));
    assert_eq!(json.get("database"), Some(&json!("down")));
}
