//! Router-level tests that never reach the database: sitemap, fallbacks,
//! id parsing and body validation.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, delete, get, get_json, offline_app, post_json, post_raw, send};
use serde_json::json;

#[tokio::test]
async fn sitemap_json_lists_every_route() {
    let response = get_json(offline_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let routes = json["routes"].as_array().unwrap();

    for expected in [
        json!({"method": "GET", "path": "/"}),
        json!({"method": "GET", "path": "/users"}),
        json!({"method": "GET", "path": "/user/:id"}),
        json!({"method": "POST", "path": "/user"}),
        json!({"method": "DELETE", "path": "/user/:id"}),
        json!({"method": "GET", "path": "/characters"}),
        json!({"method": "POST", "path": "/character"}),
        json!({"method": "GET", "path": "/planets"}),
        json!({"method": "DELETE", "path": "/planet/:id"}),
    ] {
        assert!(routes.contains(&expected), "missing {expected}");
    }
}

#[tokio::test]
async fn sitemap_html_links_collections() {
    let response = get(offline_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let html = body_text(response).await;
    assert!(html.contains(r#"<a href="/characters">/characters</a>"#));
}

#[tokio::test]
async fn health_ignores_trailing_slash() {
    let response = get(offline_app(), "/health/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn ready_reports_unavailable_database() {
    let response = get(offline_app(), "/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"], "unavailable");
}

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let response = get(offline_app(), "/starships").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 404);
    assert_eq!(json["message"], "route /starships not found");
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let response = get(offline_app(), "/planet/tatooine").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 400);
    assert_eq!(json["message"], "invalid id 'tatooine'");

    let response = delete(offline_app(), "/user/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_field_is_a_bad_request() {
    let response = post_json(offline_app(), "/user", json!({"email": "a@b.com"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "missing field `password`");
    assert_eq!(json["status_code"], 400);
}

#[tokio::test]
async fn character_without_eyes_color_is_rejected() {
    let response = post_json(
        offline_app(),
        "/character",
        json!({"name": "Luke Skywalker", "heigth": 172, "weigth": 77}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "missing field `eyes_color`");
}

#[tokio::test]
async fn boolean_mass_is_rejected() {
    let response = post_json(
        offline_app(),
        "/planet",
        json!({"name": "Hoth", "diameter": 7200, "mass": true, "orbit": 549}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let response = post_raw(offline_app(), "/planet", "{\"name\": ".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 400);
}

#[tokio::test]
async fn array_body_is_a_bad_request() {
    let body = json!([{"email": "a@b.com", "password": "x"}]);
    let response = post_json(offline_app(), "/user", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "body must be a JSON object");
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let response = post_json(offline_app(), "/users", json!({})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    // Test config caps bodies at 64 KiB.
    let body = format!("{{\"name\": \"{}\"}}", "x".repeat(70 * 1024));
    let response = post_raw(offline_app(), "/planet", body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 413);
}

#[tokio::test]
async fn missing_content_type_is_unsupported_media_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/user")
        .body(Body::from(json!({"email": "a@b.com", "password": "x"}).to_string()))
        .unwrap();
    let response = send(offline_app(), request).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = body_json(response).await;
    assert_eq!(json["status_code"], 415);
}
