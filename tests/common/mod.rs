#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use starwars_api::{app, apply_migrations, Config};
use std::time::Duration;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub type TestApp = NormalizePath<Router>;

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://127.0.0.1:1/unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_connections: 2,
        body_limit_bytes: 64 * 1024,
    }
}

/// App over a pool that never connects unless a handler touches the database.
/// Port 1 refuses connections, so any database access fails fast.
pub fn offline_app() -> TestApp {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    app(pool, &config)
}

/// Create the entity tables in the per-test database handed out by `#[sqlx::test]`.
pub async fn migrate(pool: &PgPool) {
    apply_migrations(pool).await.expect("apply migrations");
}

pub fn build_test_app(pool: PgPool) -> TestApp {
    app(pool, &test_config())
}

pub async fn send(app: TestApp, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("infallible")
}

pub async fn get(app: TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_json(app: TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: TestApp, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
