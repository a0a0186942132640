// src/core/path/mod.rs

//! Compiles path descriptors into backend path expressions such as `$.a.[2].b`.

pub mod compiler;
pub mod segment;

pub use self::compiler::{compile_path, compile_path_values, compile_segment, compile_segment_value};
pub use self::segment::PathSegment;
