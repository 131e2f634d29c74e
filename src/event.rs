//! Invocation events delivered by the hosting runtime.

use crate::error::{Error, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Key holding the base64-encoded document.
pub const BODY_KEY: &str = "body";

/// One invocation's input: a JSON object of which only `body` is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationEvent {
    fields: Map<String, Value>,
}

impl InvocationEvent {
    /// Create an empty event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event whose body is the given string.
    pub fn with_body(body: impl Into<String>) -> Self {
        let mut event = Self::new();
        event.insert(BODY_KEY, Value::String(body.into()));
        event
    }

    /// Create an event carrying `bytes` base64-encoded in its body.
    pub fn from_document_bytes(bytes: &[u8]) -> Self {
        Self::with_body(base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    /// Build an event from an arbitrary JSON value; it must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::Json(serde::de::Error::custom(format!(
                "event must be a JSON object, found {}",
                json_type_name(&other)
            )))),
        }
    }

    /// Parse an event from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Load an event from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set a field.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Get a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the event has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw body value.
    pub fn body(&self) -> Option<&Value> {
        self.get(BODY_KEY)
    }

    /// Textual representation of the body.
    ///
    /// Strings are returned verbatim; any other JSON value is rendered as compact
    /// JSON, so a `null` body reads as `"null"`.
    pub fn body_text(&self) -> Result<String> {
        match self.body() {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(Error::MissingBody),
        }
    }

    /// Describe the event shape for diagnostics.
    pub fn type_description(&self) -> String {
        format!("object ({} fields)", self.fields.len())
    }

    /// JSON type name of the body, or `missing`.
    pub fn body_type_name(&self) -> &'static str {
        self.body().map(json_type_name).unwrap_or("missing")
    }
}

impl From<Map<String, Value>> for InvocationEvent {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
