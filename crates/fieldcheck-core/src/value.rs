//! Helpers over the document value model
//!
//! A document is a `serde_json::Value`: a closed variant over null,
//! booleans, numbers, strings, arrays, and mappings that traversal code
//! can match exhaustively. Absence is a valid state for any field, never
//! an engine error.

use serde_json::Value;

/// Look up a named member of a document node.
///
/// Returns `None` when the node is not a mapping or the key is missing.
pub fn member<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    node.as_object().and_then(|map| map.get(name))
}

/// Whether a value counts as absent for the `required` constraint.
///
/// A missing key, `null`, and the empty string are absent. Empty arrays
/// and empty mappings are present; their emptiness is the business of
/// `min`, not `required`.
pub fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Character count of a string (not byte length).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Human-readable name of a value's shape, for diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
