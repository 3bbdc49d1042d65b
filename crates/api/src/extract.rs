//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections.

use axum::extract::{FromRequest, Request};
use axum::Json;
use school_core::types::DbId;
use school_core::validation::Payload;
use serde_json::Value;

use crate::error::AppError;

/// A request body that must be a JSON object. Field-level checks are left
/// to the resource validators.
#[derive(Debug)]
pub struct JsonPayload(pub Payload);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        match value {
            Value::Object(map) => Ok(JsonPayload(map)),
            other => Err(AppError::BadRequest(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse an id path segment. A segment that is not an integer cannot name
/// any row, so callers treat `None` like a miss.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}
