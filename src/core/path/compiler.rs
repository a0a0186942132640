// src/core/path/compiler.rs

//! Renders path segments into the backend's `$`-rooted path-expression grammar.
//!
//! Keys are inserted verbatim. A key containing `.`, `[` or `]` yields an
//! ambiguous expression; quoting such keys would change what the backend
//! receives, so it is left to the caller.

use super::segment::PathSegment;
use crate::core::JsonColumnError;
use serde_json::Value;
use tracing::trace;

/// Renders one segment: `$.[<index>]` for an index, `$.<key>` for a key.
pub fn compile_segment(segment: &PathSegment) -> String {
    let compiled = match segment {
        PathSegment::Index(index) => format!("$.[{index}]"),
        PathSegment::Key(key) => format!("$.{key}"),
    };
    trace!(path = %compiled, "compiled single segment");
    compiled
}

/// Renders an ordered walk. Segments are joined with `.` and prefixed with `$.`;
/// an index segment renders as `[<index>]` and still gets its separating dot,
/// so `["a", 2, "b"]` becomes `$.a.[2].b`. The empty walk renders as `$.`.
pub fn compile_path(segments: &[PathSegment]) -> String {
    let walk = segments
        .iter()
        .map(|segment| match segment {
            PathSegment::Index(index) => format!("[{index}]"),
            PathSegment::Key(key) => key.clone(),
        })
        .collect::<Vec<_>>()
        .join(".");
    let compiled = format!("$.{walk}");
    trace!(path = %compiled, segments = segments.len(), "compiled path");
    compiled
}

/// Like `compile_segment`, for a segment that arrives as a loosely typed JSON value.
pub fn compile_segment_value(segment: &Value) -> Result<String, JsonColumnError> {
    PathSegment::try_from(segment).map(|s| compile_segment(&s))
}

/// Like `compile_path`, for a walk that arrives as loosely typed JSON values.
/// The first segment that is neither an integer nor a string fails the whole walk.
pub fn compile_path_values(segments: &[Value]) -> Result<String, JsonColumnError> {
    let segments = segments
        .iter()
        .map(PathSegment::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(compile_path(&segments))
}
