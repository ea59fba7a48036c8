//! Wire types for the agent endpoints.
//!
//! # Design
//! The agent's payloads are not schema-checked: card and health documents
//! are whatever JSON the service returns. The only structured type is the
//! outgoing JSON-RPC envelope, whose shape is fixed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
    pub id: u64,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, params: Value, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// A response body: parsed JSON when possible, otherwise the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Parse `body` as JSON, keeping the raw text if that fails.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(body.to_string()),
        }
    }

    /// JSON with two-space indentation; raw text is rendered as a JSON string,
    /// matching how a pretty-printer treats a string value.
    pub fn pretty(&self) -> String {
        match self {
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Payload::Text(text) => Value::String(text.clone()).to_string(),
        }
    }

    /// Whether the payload counts as present, using JavaScript truthiness:
    /// empty text, `null`, `false`, `0` and `""` do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Payload::Text(text) => !text.is_empty(),
            Payload::Json(Value::Null) => false,
            Payload::Json(Value::Bool(b)) => *b,
            Payload::Json(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Payload::Json(Value::String(s)) => !s.is_empty(),
            Payload::Json(Value::Array(_) | Value::Object(_)) => true,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }
}
