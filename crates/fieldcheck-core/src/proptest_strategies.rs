//! Property-based testing strategies for generating test documents
//!
//! Candidate documents make no promises at all before validation, so the
//! generators here deliberately produce absent, wrong-shaped, and
//! plausible values in equal measure.

#![cfg(test)]

use proptest::option;
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for generating arbitrary scalar values
pub fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,40}".prop_map(Value::String),
    ]
}

/// Strategy for documents shaped for the validator's property-test
/// schema: each field independently absent, wrong-shaped, or plausible.
pub fn candidate_strategy() -> impl Strategy<Value = Value> {
    (
        option::of(scalar_strategy()),                  // headline
        option::of(scalar_strategy()),                  // rating
        option::of(prop_oneof![
            scalar_strategy(),
            proptest::collection::vec(scalar_strategy(), 0..4).prop_map(Value::Array),
        ]),                                             // tags
    )
        .prop_map(|(headline, rating, tags)| {
            let mut doc = serde_json::Map::new();
            if let Some(v) = headline {
                doc.insert("headline".to_string(), v);
            }
            if let Some(v) = rating {
                doc.insert("rating".to_string(), v);
            }
            if let Some(v) = tags {
                doc.insert("tags".to_string(), v);
            }
            Value::Object(doc)
        })
}
