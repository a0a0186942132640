// src/core/mod.rs

//! The JSON column core: the value codec and the path compiler.

pub mod codec;
pub mod errors;
pub mod path;
pub mod processors;

pub use codec::{BindValue, CodecConfig, EncodedScalar, decode, encode};
pub use errors::JsonColumnError;
pub use path::{PathSegment, compile_path, compile_segment};
pub use processors::{JsonIndexType, JsonPathType, JsonType};
