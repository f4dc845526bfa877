use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ProtocolError, ProtocolResult};

const MESSAGE_FIELD: &str = "message";
const CODE_FIELD: &str = "code";

/// Structured description of why a peer or validator refused a request.
///
/// Only `message` is interpreted here. `code` is lifted out because handlers
/// branch on it most often; every other protocol field lives in `extra` and is
/// flattened back into the same JSON object on serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RejectionMessage {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RejectionMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            extra: Map::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attaches a protocol-specific field. `message` and `code` are reserved.
    pub fn try_with_field(mut self, name: impl Into<String>, value: Value) -> ProtocolResult<Self> {
        let name = name.into();
        if name == MESSAGE_FIELD || name == CODE_FIELD {
            return Err(ProtocolError::InvalidArgument(format!(
                "`{name}` is a reserved rejection field"
            )));
        }
        self.extra.insert(name, value);
        Ok(self)
    }

    /// Validates an untyped payload handed over by a collaborator.
    pub fn from_value(value: Value) -> ProtocolResult<Self> {
        serde_json::from_value(value)
            .map_err(|err| ProtocolError::InvalidArgument(err.to_string()))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Looks up a protocol field by name; `code` is served from the typed slot.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            MESSAGE_FIELD => Some(Value::String(self.message.clone())),
            CODE_FIELD => self.code.clone().map(Value::String),
            _ => self.extra.get(name).cloned(),
        }
    }
}
