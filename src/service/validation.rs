//! Request validation: JSON body -> typed create request.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Body must be a JSON object carrying every required field with the right type.
    /// Unknown keys are ignored. Field contents are stored as submitted.
    pub fn parse<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
        if !body.is_object() {
            return Err(AppError::InvalidInput("body must be a JSON object".into()));
        }
        serde_json::from_value(body).map_err(|e| AppError::InvalidInput(e.to_string()))
    }
}
