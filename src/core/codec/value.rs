// src/core/codec/value.rs

//! The application-side and storage-side value shapes handled by the codec.

use bytes::Bytes;
use serde_json::Value;

/// A value bound for a JSON column.
///
/// The three null-like states are kept apart because a storage NULL and a
/// stored JSON `null` literal are different things once they reach the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// The application supplied no value. Stored as NULL when the column's
    /// `none_as_null` policy is on, otherwise as the JSON literal `null`.
    Null,
    /// The JSON `null` literal, requested explicitly. Always serialized,
    /// regardless of `none_as_null`.
    JsonNull,
    /// An explicit request for storage NULL. Never serialized.
    SqlNull,
    /// A JSON document. A bare `Value::Null` here means the same as `BindValue::Null`.
    Value(Value),
}

impl From<Value> for BindValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => BindValue::Null,
            other => BindValue::Value(other),
        }
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(BindValue::Null, Into::into)
    }
}

/// A single column value as exchanged with the backend driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedScalar {
    /// The backend's own NULL marker.
    Null,
    /// Native text.
    Text(String),
    /// Text transcoded into the configured character encoding.
    Bytes(Bytes),
}

impl EncodedScalar {
    pub fn is_null(&self) -> bool {
        matches!(self, EncodedScalar::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            EncodedScalar::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            EncodedScalar::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for EncodedScalar {
    fn from(s: String) -> Self {
        EncodedScalar::Text(s)
    }
}

impl From<&str> for EncodedScalar {
    fn from(s: &str) -> Self {
        EncodedScalar::Text(s.to_string())
    }
}

impl From<Bytes> for EncodedScalar {
    fn from(b: Bytes) -> Self {
        EncodedScalar::Bytes(b)
    }
}

impl From<Vec<u8>> for EncodedScalar {
    fn from(b: Vec<u8>) -> Self {
        EncodedScalar::Bytes(Bytes::from(b))
    }
}

impl<T: Into<EncodedScalar>> From<Option<T>> for EncodedScalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(EncodedScalar::Null, Into::into)
    }
}
