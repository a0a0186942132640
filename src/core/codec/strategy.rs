// src/core/codec/strategy.rs

//! Pluggable serialization strategies.
//!
//! A `CodecConfig` holds one serializer and one deserializer. The standard
//! JSON strategy is bound by default; closures can be plugged in directly.

use crate::core::JsonColumnError;
use serde_json::Value;

/// Renders a JSON document as text.
pub trait JsonSerializer: Send + Sync {
    fn serialize(&self, value: &Value) -> Result<String, JsonColumnError>;
}

/// Parses text back into a JSON document.
pub trait JsonDeserializer: Send + Sync {
    fn deserialize(&self, text: &str) -> Result<Value, JsonColumnError>;
}

/// The process-wide default strategy, backed by `serde_json`. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardJson;

impl JsonSerializer for StandardJson {
    fn serialize(&self, value: &Value) -> Result<String, JsonColumnError> {
        serde_json::to_string(value).map_err(|e| JsonColumnError::Serialization(e.to_string()))
    }
}

impl JsonDeserializer for StandardJson {
    fn deserialize(&self, text: &str) -> Result<Value, JsonColumnError> {
        serde_json::from_str(text).map_err(|e| JsonColumnError::Deserialization(e.to_string()))
    }
}

impl<F> JsonSerializer for F
where
    F: Fn(&Value) -> Result<String, JsonColumnError> + Send + Sync,
{
    fn serialize(&self, value: &Value) -> Result<String, JsonColumnError> {
        self(value)
    }
}

impl<F> JsonDeserializer for F
where
    F: Fn(&str) -> Result<Value, JsonColumnError> + Send + Sync,
{
    fn deserialize(&self, text: &str) -> Result<Value, JsonColumnError> {
        self(text)
    }
}
