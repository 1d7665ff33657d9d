//! `GET /`: developer-facing listing of every registered route.
//! HTML for browsers, JSON when the client asks for `application/json`.

use crate::routes::RouteInfo;
use crate::state::AppState;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct SitemapBody<'a> {
    pub routes: &'a [RouteInfo],
}

pub async fn sitemap(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if wants_json(&headers) {
        Json(SitemapBody { routes: &state.routes }).into_response()
    } else {
        Html(render_html(&state.routes)).into_response()
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json") && !accept.contains("text/html"))
        .unwrap_or(false)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Parameterless GET routes become links; the full table lists everything.
pub fn render_html(routes: &[RouteInfo]) -> String {
    let links: String = routes
        .iter()
        .filter(|r| r.method == "GET" && r.path != "/" && !r.path.contains(':'))
        .map(|r| {
            let p = escape(&r.path);
            format!("<li><a href=\"{p}\">{p}</a></li>")
        })
        .collect();
    let rows: String = routes
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td><code>{}</code></td></tr>",
                r.method,
                escape(&r.path)
            )
        })
        .collect();
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{name}</title></head>\
         <body style=\"text-align: center; font-family: sans-serif\">\
         <h1>{name} {version}</h1>\
         <p>Start working on your project by following the links below.</p>\
         <ul style=\"list-style: none; padding: 0\">{links}</ul>\
         <table style=\"margin: 0 auto\"><thead><tr><th>Method</th><th>Path</th></tr></thead>\
         <tbody>{rows}</tbody></table></body></html>",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    )
}
