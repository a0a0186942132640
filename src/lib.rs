// src/lib.rs

pub mod config;
pub mod core;

// Re-export
pub use crate::core::{
    BindValue, CodecConfig, EncodedScalar, JsonColumnError, JsonIndexType, JsonPathType, JsonType,
    PathSegment, compile_path, compile_segment, decode, encode,
};
