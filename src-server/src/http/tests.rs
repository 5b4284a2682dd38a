//! Router Tests
//!
//! Exercise the full router against an in-memory database.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::ConnectInfo;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{router, RATE_LIMITED_MESSAGE};
use crate::config::Settings;
use crate::repository::{init_db, ItemRepository};
use crate::AppState;

async fn setup_app(settings: Settings) -> Router {
    let db_state = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
    let state = Arc::new(AppState {
        items: ItemRepository::new(db_state.connection()),
    });
    router(state, &settings)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = setup_app(Settings::default()).await;
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_root_message() {
    let app = setup_app(Settings::default()).await;
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the Demo API");
}

#[tokio::test]
async fn test_create_then_list() {
    let app = setup_app(Settings::default()).await;

    let (status, created) = send(
        &app,
        post_json("/items", json!({"name": "Widget", "description": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["description"], "");
    assert!(created["id"].as_i64().unwrap() > 0);
    assert!(created["created_at"].is_string());

    send(&app, post_json("/items", json!({"name": "Gadget"}))).await;

    let (status, items) = send(&app, get("/items")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Widget", "Gadget"]);

    let (_, window) = send(&app, get("/items?skip=1&limit=1")).await;
    assert_eq!(window.as_array().unwrap().len(), 1);
    assert_eq!(window[0]["name"], "Gadget");
}

#[tokio::test]
async fn test_create_with_empty_name_is_unprocessable() {
    let app = setup_app(Settings::default()).await;

    let (status, body) = send(&app, post_json("/items", json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("name"));

    let (_, items) = send(&app, get("/items")).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn test_get_item() {
    let app = setup_app(Settings::default()).await;
    let (_, created) = send(&app, post_json("/items", json!({"name": "Widget"}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, found) = send(&app, get(&format!("/items/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    let (status, body) = send(&app, get("/items/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Item not found"}));
}

#[tokio::test]
async fn test_rate_limit_per_client() {
    let settings = Settings {
        rate_limit_max: 2,
        rate_limit_window: Duration::from_secs(60),
        ..Settings::default()
    };
    let app = setup_app(settings).await;

    let from = |addr: &str| {
        let mut request = get("/health");
        let addr: SocketAddr = addr.parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));
        request
    };

    assert_eq!(send(&app, from("10.0.0.1:5000")).await.0, StatusCode::OK);
    assert_eq!(send(&app, from("10.0.0.1:5001")).await.0, StatusCode::OK);
    let (status, body) = send(&app, from("10.0.0.1:5002")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({"error": RATE_LIMITED_MESSAGE}));

    assert_eq!(send(&app, from("10.0.0.2:5000")).await.0, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allows_frontend_origin() {
    let app = setup_app(Settings::default()).await;

    let request = Request::builder()
        .uri("/items")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );

    let request = Request::builder()
        .uri("/items")
        .header(header::ORIGIN, "http://evil.test")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
