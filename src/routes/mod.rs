//! Route table. Every route is added through `RouteRegistry`, which records
//! (method, path) as it goes so the sitemap always matches the router.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::config::Config;
use crate::handlers::{not_found, sitemap};
use crate::models::{Character, Planet, User};
use crate::state::AppState;
use axum::handler::Handler;
use axum::routing::{self, MethodRouter};
use axum::Router;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: String,
}

impl RouteInfo {
    pub fn new(method: &'static str, path: impl Into<String>) -> Self {
        RouteInfo {
            method,
            path: path.into(),
        }
    }
}

#[derive(Default)]
pub struct RouteRegistry {
    router: Router<AppState>,
    routes: Vec<RouteInfo>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(
        mut self,
        method: &'static str,
        path: &str,
        method_router: MethodRouter<AppState>,
    ) -> Self {
        self.routes.push(RouteInfo::new(method, path));
        self.router = self.router.route(path, method_router);
        self
    }

    pub fn get<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.add("GET", path, routing::get(handler))
    }

    pub fn post<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.add("POST", path, routing::post(handler))
    }

    pub fn delete<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.add("DELETE", path, routing::delete(handler))
    }

    pub fn into_parts(self) -> (Router<AppState>, Vec<RouteInfo>) {
        (self.router, self.routes)
    }
}

/// Full route table: sitemap, operational routes, and CRUD for each entity.
pub fn registry() -> RouteRegistry {
    let registry = RouteRegistry::new().get("/", sitemap);
    let registry = common_routes(registry);
    let registry = entity_routes::<User>(registry);
    let registry = entity_routes::<Character>(registry);
    entity_routes::<Planet>(registry)
}

/// Router with state and middleware applied (trace, CORS, body limit).
pub fn router(pool: PgPool, body_limit_bytes: usize) -> Router {
    let (router, routes) = registry().into_parts();
    let state = AppState {
        pool,
        routes: Arc::from(routes),
    };
    router
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The application service: `router` wrapped so trailing slashes are ignored.
pub fn app(pool: PgPool, config: &Config) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(pool, config.body_limit_bytes))
}
