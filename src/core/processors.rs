// src/core/processors.rs

//! Column-type processor factories.
//!
//! The type layer asks a column type for a bind processor (application value to
//! driver value) and a result processor (driver value to application value)
//! once per dialect, then calls them for every row.

use crate::core::JsonColumnError;
use crate::core::codec::{self, BindValue, CodecConfig, EncodedScalar};
use crate::core::path::{self, PathSegment};
use serde_json::Value;

pub type BindProcessor =
    Box<dyn Fn(&BindValue) -> Result<EncodedScalar, JsonColumnError> + Send + Sync>;
pub type ResultProcessor =
    Box<dyn Fn(&EncodedScalar) -> Result<Option<Value>, JsonColumnError> + Send + Sync>;
pub type IndexBindProcessor = Box<dyn Fn(&PathSegment) -> String + Send + Sync>;
pub type PathBindProcessor = Box<dyn Fn(&[PathSegment]) -> String + Send + Sync>;

/// A JSON column. `none_as_null` is a per-column setting and overrides the
/// dialect config's value in the processors this type builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonType {
    pub none_as_null: bool,
}

impl JsonType {
    pub fn new(none_as_null: bool) -> Self {
        Self { none_as_null }
    }

    fn column_config(&self, dialect: &CodecConfig) -> CodecConfig {
        dialect.clone().with_none_as_null(self.none_as_null)
    }

    pub fn bind_processor(&self, dialect: &CodecConfig) -> BindProcessor {
        let config = self.column_config(dialect);
        Box::new(move |value: &BindValue| codec::encode(value, &config))
    }

    pub fn result_processor(&self, dialect: &CodecConfig) -> ResultProcessor {
        let config = self.column_config(dialect);
        Box::new(move |stored: &EncodedScalar| codec::decode(stored, &config))
    }
}

/// The type of a single-step index expression, e.g. `doc['name']` or `doc[2]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonIndexType;

impl JsonIndexType {
    pub fn bind_processor(&self) -> IndexBindProcessor {
        Box::new(path::compile_segment)
    }
}

/// The type of a multi-step path expression, e.g. `doc[('a', 2, 'b')]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonPathType;

impl JsonPathType {
    pub fn bind_processor(&self) -> PathBindProcessor {
        Box::new(path::compile_path)
    }
}
