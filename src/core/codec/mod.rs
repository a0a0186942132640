// src/core/codec/mod.rs

//! Converts JSON column values to and from their stored scalar form.
//!
//! Both directions are pure: they read a `CodecConfig` and their own input,
//! and return either a result or the first error raised along the way.

pub mod charset;
pub mod config;
pub mod strategy;
pub mod value;

pub use self::config::CodecConfig;
pub use self::strategy::{JsonDeserializer, JsonSerializer, StandardJson};
pub use self::value::{BindValue, EncodedScalar};

use crate::core::JsonColumnError;
use serde_json::Value;
use std::borrow::Cow;
use tracing::trace;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodes a value for storage.
///
/// Storage NULL is returned for `BindValue::SqlNull`, and for a logical null
/// when `none_as_null` is set; the serializer is not consulted in either case.
/// `BindValue::JsonNull` always serializes to the literal `null`.
pub fn encode(value: &BindValue, config: &CodecConfig) -> Result<EncodedScalar, JsonColumnError> {
    let null = Value::Null;
    let document = match value {
        BindValue::SqlNull => {
            trace!("encode: explicit storage NULL");
            return Ok(EncodedScalar::Null);
        }
        BindValue::Null | BindValue::Value(Value::Null) if config.none_as_null => {
            trace!("encode: logical null stored as storage NULL");
            return Ok(EncodedScalar::Null);
        }
        BindValue::Null | BindValue::JsonNull => &null,
        BindValue::Value(v) => v,
    };

    let text = config.serializer.serialize(document)?;
    match config.output_encoding {
        Some(encoding) => {
            trace!(encoding = encoding.name(), len = text.len(), "encode: bytes");
            charset::encode_text(&text, encoding).map(EncodedScalar::Bytes)
        }
        None => {
            trace!(len = text.len(), "encode: text");
            Ok(EncodedScalar::Text(text))
        }
    }
}

/// Decodes a stored scalar.
///
/// Returns `None` for storage NULL without touching the deserializer, so a
/// stored JSON `null` (`Some(Value::Null)`) stays distinguishable from it.
/// Bytes are transcoded with the configured encoding, or read as UTF-8 (with
/// an optional leading BOM) when none is configured.
pub fn decode(stored: &EncodedScalar, config: &CodecConfig) -> Result<Option<Value>, JsonColumnError> {
    let text: Cow<'_, str> = match stored {
        EncodedScalar::Null => {
            trace!("decode: storage NULL");
            return Ok(None);
        }
        EncodedScalar::Text(text) => Cow::Borrowed(text.as_str()),
        EncodedScalar::Bytes(bytes) => match config.output_encoding {
            Some(encoding) => {
                trace!(encoding = encoding.name(), len = bytes.len(), "decode: bytes");
                Cow::Owned(charset::decode_bytes(bytes, encoding)?)
            }
            None => {
                trace!(len = bytes.len(), "decode: bytes as utf-8");
                // Without a configured encoding a leading BOM is not part of the document.
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
                Cow::Borrowed(
                    std::str::from_utf8(bytes)
                        .map_err(|e| JsonColumnError::Decoding(e.to_string()))?,
                )
            }
        },
    };

    config.deserializer.deserialize(&text).map(Some)
}
