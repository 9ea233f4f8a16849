//! Handler validation tests
//!
//! These drive the router with a lazy pool: every request here is rejected
//! during validation, before any query runs, so no database is needed.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use prepline_server::http::{build_router, AppState};

fn app() -> axum::Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/prepline_unreachable")
        .expect("lazy pool");
    build_router(AppState { pool })
}

async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn message(body: &Value) -> String {
    body["message"].as_str().unwrap_or_default().to_owned()
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_task_requires_station_id() {
    let (status, body) = send("POST", "/tasks", Some(json!({ "title": "Pick herbs" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(message(&body).contains("station_id"));
}

#[tokio::test]
async fn create_task_requires_title() {
    let (status, body) = send("POST", "/tasks", Some(json!({ "station_id": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("title"));
}

#[tokio::test]
async fn create_task_rejects_blank_title() {
    let (status, body) = send(
        "POST",
        "/tasks",
        Some(json!({ "station_id": 1, "title": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("title"));
}

#[tokio::test]
async fn create_task_rejects_unknown_priority() {
    let (status, body) = send(
        "POST",
        "/tasks",
        Some(json!({ "station_id": 1, "title": "Stock", "priority": "urgent" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("priority"));
}

#[tokio::test]
async fn create_task_rejects_malformed_date() {
    let (status, body) = send(
        "POST",
        "/tasks",
        Some(json!({ "station_id": 1, "title": "Stock", "target_date": "next tuesday" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("target_date"));
}

#[tokio::test]
async fn update_task_rejects_non_numeric_id() {
    let (status, body) = send(
        "PATCH",
        "/tasks/grill",
        Some(json!({ "is_done": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("task id"));
}

#[tokio::test]
async fn update_task_rejects_empty_patch() {
    let (status, body) = send("PATCH", "/tasks/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "no fields to update");
}

#[tokio::test]
async fn update_task_rejects_unknown_priority() {
    let (status, body) = send(
        "PATCH",
        "/tasks/1",
        Some(json!({ "priority": "asap" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("priority"));
}

#[tokio::test]
async fn delete_task_rejects_non_numeric_id() {
    let (status, body) = send("DELETE", "/tasks/soon", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("task id"));
}

#[tokio::test]
async fn mep_rejects_unparseable_date() {
    let (status, body) = send("GET", "/mep/someday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("date"));
}

#[tokio::test]
async fn create_station_requires_name() {
    let (status, body) = send("POST", "/stations", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("name"));
}

#[tokio::test]
async fn create_station_rejects_blank_name() {
    let (status, body) = send("POST", "/stations", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("station name"));
}
