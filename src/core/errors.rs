// src/core/errors.rs

//! Defines the primary error type for the codec and the path compiler.

use thiserror::Error;

/// Every failure the JSON column core can surface.
/// Errors are returned to the caller unchanged; nothing in this crate recovers from them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonColumnError {
    /// The configured serializer could not render the value as text.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The stored text is not valid input for the configured deserializer.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Stored bytes are not valid in the configured character encoding.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Serialized text contains characters the output encoding cannot represent.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The configured encoding label is unknown or cannot be used for output.
    #[error("Unknown encoding '{0}'")]
    UnknownEncoding(String),

    /// A path segment is neither an integer index nor a string key.
    #[error("Cannot compile path segment: {0}")]
    Compilation(String),
}
