// tests/property/path_test.rs

//! Property-based tests for path compilation

use proptest::prelude::*;
use spineljson::{PathSegment, compile_path, compile_segment};

fn segment() -> impl Strategy<Value = PathSegment> {
    prop_oneof![
        any::<i64>().prop_map(PathSegment::Index),
        "[a-zA-Z_][a-zA-Z0-9_]{0,10}".prop_map(PathSegment::Key),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_single_segment_path_matches_compile_segment(seg in segment()) {
        prop_assert_eq!(compile_path(std::slice::from_ref(&seg)), compile_segment(&seg));
    }

    #[test]
    fn test_path_preserves_segment_order(segments in prop::collection::vec(segment(), 1..10)) {
        let compiled = compile_path(&segments);
        let walk = compiled.strip_prefix("$.").unwrap();
        let parts: Vec<&str> = walk.split('.').collect();
        prop_assert_eq!(parts.len(), segments.len());
        for (part, seg) in parts.iter().zip(&segments) {
            match seg {
                PathSegment::Index(i) => prop_assert_eq!(*part, format!("[{i}]")),
                PathSegment::Key(k) => prop_assert_eq!(*part, k.as_str()),
            }
        }
    }

    #[test]
    fn test_compile_is_deterministic(segments in prop::collection::vec(segment(), 0..10)) {
        prop_assert_eq!(compile_path(&segments), compile_path(&segments.clone()));
    }

    #[test]
    fn test_keys_render_verbatim(key in r"[a-z.\[\] $]{0,12}|.{0,12}") {
        prop_assert_eq!(compile_segment(&PathSegment::Key(key.clone())), format!("$.{key}"));
        prop_assert_eq!(compile_path(&[PathSegment::Key(key.clone())]), format!("$.{key}"));
    }
}
