// src/core/codec/config.rs

//! The configuration contract read by `encode` and `decode`.

use super::charset;
use super::strategy::{JsonDeserializer, JsonSerializer, StandardJson};
use crate::core::JsonColumnError;
use encoding_rs::Encoding;
use std::fmt;
use std::sync::Arc;

/// Serializer, deserializer, output encoding and null policy for one dialect or session.
///
/// Cloning shares the strategies. The codec only ever reads a config.
#[derive(Clone)]
pub struct CodecConfig {
    pub serializer: Arc<dyn JsonSerializer>,
    pub deserializer: Arc<dyn JsonDeserializer>,
    /// When set, encode emits bytes in this encoding and decode transcodes bytes from it.
    pub output_encoding: Option<&'static Encoding>,
    /// Store a logical null as storage NULL instead of the JSON literal `null`.
    pub none_as_null: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            serializer: Arc::new(StandardJson),
            deserializer: Arc::new(StandardJson),
            output_encoding: None,
            none_as_null: false,
        }
    }
}

impl fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecConfig")
            .field("output_encoding", &self.output_encoding.map(Encoding::name))
            .field("none_as_null", &self.none_as_null)
            .finish_non_exhaustive()
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_serializer<S: JsonSerializer + 'static>(mut self, serializer: S) -> Self {
        self.serializer = Arc::new(serializer);
        self
    }

    pub fn with_deserializer<D: JsonDeserializer + 'static>(mut self, deserializer: D) -> Self {
        self.deserializer = Arc::new(deserializer);
        self
    }

    /// Sets the output encoding by label. Fails on labels `encoding_rs` cannot encode to.
    pub fn with_output_encoding(mut self, label: &str) -> Result<Self, JsonColumnError> {
        self.output_encoding = Some(charset::resolve_label(label)?);
        Ok(self)
    }

    pub fn without_output_encoding(mut self) -> Self {
        self.output_encoding = None;
        self
    }

    pub fn with_none_as_null(mut self, none_as_null: bool) -> Self {
        self.none_as_null = none_as_null;
        self
    }
}
