// tests/common/test_helpers.rs

//! Shared helpers for the test suites: tracing setup and value generators.

#![allow(dead_code)]

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Routes crate trace events to the test writer. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("spineljson=trace")
        .with_test_writer()
        .try_init();
}

/// Arbitrary JSON documents. Floats are left out: their text form does not
/// always parse back to the identical `f64` without serde_json's
/// `float_roundtrip` feature.
pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-zA-Z0-9_]{1,8}", inner), 0..6).prop_map(|entries| {
                Value::Object(entries.into_iter().collect::<Map<String, Value>>())
            }),
        ]
    })
}
