// src/core/codec/charset.rs

//! Character-encoding transcoding for drivers that exchange raw bytes.

use crate::core::JsonColumnError;
use bytes::Bytes;
use encoding_rs::Encoding;

/// Resolves an encoding label (e.g. `utf-8`, `latin1`, `shift_jis`).
///
/// Labels that name an encoding `encoding_rs` can only decode (the UTF-16
/// family, `replacement`) are rejected, since encode would silently emit UTF-8.
pub fn resolve_label(label: &str) -> Result<&'static Encoding, JsonColumnError> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| JsonColumnError::UnknownEncoding(label.to_string()))?;
    if encoding.output_encoding() != encoding {
        return Err(JsonColumnError::UnknownEncoding(label.to_string()));
    }
    Ok(encoding)
}

/// Transcodes text into `encoding`. Unmappable characters are an error.
pub fn encode_text(text: &str, encoding: &'static Encoding) -> Result<Bytes, JsonColumnError> {
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(JsonColumnError::Encoding(format!(
            "text is not representable in {}",
            encoding.name()
        )));
    }
    Ok(Bytes::from(bytes.into_owned()))
}

/// Transcodes bytes in `encoding` into text. Malformed sequences are an error.
pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Result<String, JsonColumnError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            JsonColumnError::Decoding(format!("byte sequence is not valid {}", encoding.name()))
        })
}
