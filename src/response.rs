//! Response envelopes: `results`, `created`, `delete`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Results<T> {
    pub results: T,
}

#[derive(Serialize)]
pub struct Created<T> {
    pub created: T,
}

#[derive(Serialize)]
pub struct Deleted<T> {
    pub delete: T,
}

/// 200 `{"results": ...}` for a single row or a list.
pub fn results<T: Serialize>(data: T) -> (StatusCode, Json<Results<T>>) {
    (StatusCode::OK, Json(Results { results: data }))
}

/// 201 `{"created": ...}`.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<Created<T>>) {
    (StatusCode::CREATED, Json(Created { created: data }))
}

/// 200 `{"delete": ...}` carrying the removed row.
pub fn deleted<T: Serialize>(data: T) -> (StatusCode, Json<Deleted<T>>) {
    (StatusCode::OK, Json(Deleted { delete: data }))
}
