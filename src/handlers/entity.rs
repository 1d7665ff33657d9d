//! Entity CRUD handlers, generic over the entity type: list, read, create, delete.

use crate::error::AppError;
use crate::extractors::{AppJson, EntityId};
use crate::models::Entity;
use crate::response::{created, deleted, results};
use crate::service::{CrudService, RequestValidator};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::Value;

fn not_found<E: Entity>(id: EntityId) -> AppError {
    AppError::NotFound(format!("{} {}", E::NAME, id.0))
}

pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<E>(&state.pool).await?;
    Ok(results(rows))
}

pub async fn read<E: Entity>(
    State(state): State<AppState>,
    id: EntityId,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::read::<E>(&state.pool, id.0)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(results(row))
}

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::parse::<E::New>(body)?;
    let row = CrudService::create::<E>(&state.pool, new).await?;
    tracing::info!(entity = E::NAME, "created");
    Ok(created(row))
}

pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    id: EntityId,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::delete::<E>(&state.pool, id.0)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    tracing::info!(entity = E::NAME, id = id.0, "deleted");
    Ok(deleted(row))
}
