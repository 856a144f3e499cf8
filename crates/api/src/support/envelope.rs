#![forbid(unsafe_code)]

use fc_storage::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiRequest {
    #[serde(default)]
    pub(crate) id: Option<Value>,
    pub(crate) method: String,
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) body: Option<Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct ApiResponse {
    pub(crate) id: Option<Value>,
    pub(crate) status: u16,
    pub(crate) body: Value,
}

impl ApiResponse {
    pub(crate) fn new(id: Option<Value>, status: u16, body: Value) -> Self {
        Self { id, status, body }
    }

    pub(crate) fn ok<T: Serialize>(id: Option<Value>, payload: &T) -> Self {
        Self::serialized(id, 200, payload)
    }

    pub(crate) fn created<T: Serialize>(id: Option<Value>, payload: &T) -> Self {
        Self::serialized(id, 201, payload)
    }

    pub(crate) fn no_content(id: Option<Value>) -> Self {
        Self::new(id, 204, Value::Null)
    }

    pub(crate) fn not_found(id: Option<Value>) -> Self {
        Self::new(id, 404, Value::Null)
    }

    pub(crate) fn method_not_allowed(id: Option<Value>) -> Self {
        Self::new(id, 405, Value::Null)
    }

    pub(crate) fn bad_request(id: Option<Value>, field: &str, message: &str) -> Self {
        let mut errors = Map::new();
        errors.insert(field.to_string(), Value::String(message.to_string()));
        Self::field_errors(id, errors)
    }

    pub(crate) fn field_errors(id: Option<Value>, errors: Map<String, Value>) -> Self {
        Self::new(id, 400, json!({ "errors": errors }))
    }

    pub(crate) fn internal(id: Option<Value>) -> Self {
        Self::new(id, 500, json!({ "error": "internal error" }))
    }

    fn serialized<T: Serialize>(id: Option<Value>, status: u16, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self::new(id, status, body),
            Err(err) => {
                tracing::error!(error = %err, "response serialization failed");
                Self::internal(id)
            }
        }
    }

    /// NotFound → 404 with an empty body, validation → 400 with field errors,
    /// anything else → 500.
    pub(crate) fn from_store_error(id: Option<Value>, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id: missing } => {
                tracing::debug!(%entity, id = missing, "not found");
                Self::not_found(id)
            }
            StoreError::Validation { field, reason } => Self::bad_request(id, field, &reason),
            other => {
                tracing::error!(error = %other, "store failure");
                Self::internal(id)
            }
        }
    }
}
