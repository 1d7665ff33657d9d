//! HTTP handlers: entity CRUD, sitemap, and the JSON 404 fallback.

pub mod entity;
pub mod sitemap;
pub use entity::*;
pub use sitemap::*;

use crate::error::AppError;

/// Fallback for unmatched paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}
