//! HTTP handlers, one module per resource.

pub mod category;
pub mod product;

use crate::error::AppError;
use serde_json::{Map, Value};

/// Request bodies must be flat JSON objects.
pub(crate) fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
