//! Request extractors that reject with `AppError`, so failures share the JSON error envelope.

mod id;
mod json;

pub use id::EntityId;
pub use json::AppJson;
