#![forbid(unsafe_code)]

use super::ApiResponse;
use fc_core::model::{EntityName, Stock};
use serde_json::{Map, Value};

/// Field-level checks done at the boundary before any store call.
///
/// Errors for every offending field are collected into one 400 payload.
#[derive(Default)]
pub(crate) struct BodyCheck {
    errors: Map<String, Value>,
}

impl BodyCheck {
    pub(crate) fn name(&mut self, body: Option<&Value>) -> Option<String> {
        let Some(value) = field(body, "name") else {
            self.reject("name", "is required");
            return None;
        };
        let Some(raw) = value.as_str() else {
            self.reject("name", "must be a string");
            return None;
        };
        match EntityName::try_new(raw) {
            Ok(name) => Some(name.into_string()),
            Err(err) => {
                self.reject("name", &err.to_string());
                None
            }
        }
    }

    pub(crate) fn stock(&mut self, body: Option<&Value>) -> Option<i64> {
        let Some(value) = field(body, "stock") else {
            self.reject("stock", "is required");
            return None;
        };
        let Some(raw) = value.as_i64() else {
            self.reject("stock", "must be an integer");
            return None;
        };
        match Stock::try_new(raw) {
            Ok(stock) => Some(stock.get()),
            Err(err) => {
                self.reject("stock", &err.to_string());
                None
            }
        }
    }

    /// Only meaningful after a check returned `None`.
    pub(crate) fn into_response(self, id: Option<Value>) -> ApiResponse {
        ApiResponse::field_errors(id, self.errors)
    }

    fn reject(&mut self, key: &str, message: &str) {
        self.errors
            .insert(key.to_string(), Value::String(message.to_string()));
    }
}

fn field<'a>(body: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    body.and_then(|body| body.get(key))
        .filter(|value| !value.is_null())
}
