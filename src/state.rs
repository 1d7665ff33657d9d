//! Shared application state for all routes.

use crate::routes::RouteInfo;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Every (method, path) registered on the router; read by the sitemap.
    pub routes: Arc<[RouteInfo]>,
}
