// src/core/path/segment.rs

//! Path segments: one step of a walk into a JSON document.

use crate::core::JsonColumnError;
use serde_json::Value;

/// Represents a single segment of a path, either an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Array index. Negative values are passed through to the backend untouched.
    Index(i64),
    Key(String),
}

impl From<i64> for PathSegment {
    fn from(index: i64) -> Self {
        PathSegment::Index(index)
    }
}

impl From<i32> for PathSegment {
    fn from(index: i32) -> Self {
        PathSegment::Index(index.into())
    }
}

impl TryFrom<usize> for PathSegment {
    type Error = JsonColumnError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        i64::try_from(index)
            .map(PathSegment::Index)
            .map_err(|_| JsonColumnError::Compilation(format!("index {index} is out of range")))
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl TryFrom<&Value> for PathSegment {
    type Error = JsonColumnError;

    /// Accepts integers and strings. Booleans are not indices, and floats are
    /// rejected even when they hold a whole number.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(key) => Ok(PathSegment::Key(key.clone())),
            Value::Number(n) => n.as_i64().map(PathSegment::Index).ok_or_else(|| {
                JsonColumnError::Compilation(format!("{n} is not an integer index"))
            }),
            Value::Null => Err(JsonColumnError::Compilation("null segment".into())),
            Value::Bool(b) => Err(JsonColumnError::Compilation(format!("boolean segment {b}"))),
            Value::Array(_) => Err(JsonColumnError::Compilation("array segment".into())),
            Value::Object(_) => Err(JsonColumnError::Compilation("object segment".into())),
        }
    }
}

impl TryFrom<Value> for PathSegment {
    type Error = JsonColumnError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        PathSegment::try_from(&value)
    }
}
