#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use school_api::config::ServerConfig;
use school_api::router::build_app_router;
use school_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with the production middleware stack,
/// backed by the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send_json(app, "POST", uri, json.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send_json(app, "PUT", uri, json.to_string()).await
}

/// Send a raw body with a JSON content type, for malformed-body tests.
pub async fn send_json(app: Router, method: &str, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_is_empty(response: Response<Body>) -> bool {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    bytes.is_empty()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_student(pool: &PgPool, name: &str) -> i64 {
    let local: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/students",
        serde_json::json!({
            "name": name,
            "email": format!("{local}@example.com"),
            "birthdate": "2006-03-14",
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "student fixture should be created");
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn create_course(pool: &PgPool, title: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/courses", serde_json::json!({ "title": title })).await;
    assert_eq!(response.status(), 201, "course fixture should be created");
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn enroll(pool: &PgPool, student_id: i64, course_id: i64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/enrollments",
        serde_json::json!({ "student_id": student_id, "course_id": course_id }),
    )
    .await;
    assert_eq!(response.status(), 201, "enrollment fixture should be created");
    body_json(response).await["id"].as_i64().unwrap()
}
