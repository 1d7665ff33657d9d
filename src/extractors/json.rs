//! JSON body extractor whose rejection is an `AppError`.

use crate::error::AppError;
use axum::extract::FromRequest;

/// Like `axum::Json`, but malformed bodies become `AppError::InvalidInput` (400).
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

