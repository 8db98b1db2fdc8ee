//! Built-in constraint and shape checks
//!
//! Each check takes a present value and returns at most one outcome; the
//! engine calls every applicable check so independent violations on one
//! field are all reported.

use super::types::ValidationOutcome;
use crate::path::FieldPath;
use crate::registry::TypeKind;
use crate::rule::{Constraint, ConstraintKind, Severity};
use crate::value;
use chrono::DateTime;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Literal pattern, cannot fail to compile.
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
    })
}

/// The magnitude min/max compare against: numeric value, character count,
/// or element count, depending on the field type.
fn magnitude(value: &Value, kind: TypeKind) -> Option<f64> {
    match kind {
        TypeKind::Number => value.as_f64(),
        TypeKind::Text => value.as_str().map(|s| value::char_len(s) as f64),
        TypeKind::Array => value.as_array().map(|a| a.len() as f64),
        TypeKind::Datetime | TypeKind::Object | TypeKind::Reference => None,
    }
}

fn violation(
    constraint: &Constraint,
    path: &FieldPath,
    default: String,
    expected: Option<String>,
    actual: Option<String>,
) -> ValidationOutcome {
    ValidationOutcome {
        path: path.clone(),
        severity: constraint.severity,
        message: constraint.message.clone().unwrap_or(default),
        expected,
        actual,
    }
}

/// Evaluate one built-in constraint against a present, shape-checked
/// value. `Required` and `Custom` are the engine's business, not ours.
pub(super) fn check_builtin(
    value: &Value,
    kind: TypeKind,
    constraint: &Constraint,
    path: &FieldPath,
) -> Option<ValidationOutcome> {
    match &constraint.kind {
        ConstraintKind::Min(bound) => {
            let found = magnitude(value, kind)?;
            if found < *bound {
                let default = match kind {
                    TypeKind::Number => format!("Must be greater than or equal to {}", bound),
                    TypeKind::Array => format!("Must have at least {} items", bound),
                    _ => format!("Must be at least {} characters long", bound),
                };
                return Some(violation(
                    constraint,
                    path,
                    default,
                    Some(format!(">= {}", bound)),
                    Some(format!("{}", found)),
                ));
            }
            None
        }
        ConstraintKind::Max(bound) => {
            let found = magnitude(value, kind)?;
            if found > *bound {
                let default = match kind {
                    TypeKind::Number => format!("Must be less than or equal to {}", bound),
                    TypeKind::Array => format!("Must have at most {} items", bound),
                    _ => format!("Must be at most {} characters long", bound),
                };
                return Some(violation(
                    constraint,
                    path,
                    default,
                    Some(format!("<= {}", bound)),
                    Some(format!("{}", found)),
                ));
            }
            None
        }
        ConstraintKind::Email => {
            let s = value.as_str()?;
            if !email_regex().is_match(s) {
                return Some(violation(
                    constraint,
                    path,
                    "Must be a valid email address".to_string(),
                    Some("email address".to_string()),
                    Some(s.to_string()),
                ));
            }
            None
        }
        ConstraintKind::Membership(allowed) => {
            if !allowed.iter().any(|v| v == value) {
                let rendered: Vec<String> = allowed
                    .iter()
                    .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                    .collect();
                return Some(violation(
                    constraint,
                    path,
                    format!("Value must be one of: {}", rendered.join(", ")),
                    Some(rendered.join(", ")),
                    Some(value.to_string()),
                ));
            }
            None
        }
        ConstraintKind::Required | ConstraintKind::Custom(_) => None,
    }
}

/// Check that a present value has the shape its declared type demands.
///
/// A mismatch is always error-severity: it is a structural defect, not a
/// tunable constraint.
pub(super) fn check_shape(
    value: &Value,
    kind: TypeKind,
    type_label: &str,
    path: &FieldPath,
) -> Option<ValidationOutcome> {
    let matches = match kind {
        TypeKind::Text => value.is_string(),
        TypeKind::Number => value.is_number(),
        TypeKind::Datetime => {
            let Some(s) = value.as_str() else {
                return Some(mismatch(value, type_label, path));
            };
            if DateTime::parse_from_rfc3339(s).is_err() {
                return Some(ValidationOutcome {
                    path: path.clone(),
                    severity: Severity::Error,
                    message: "Must be a valid RFC 3339 datetime".to_string(),
                    expected: Some("RFC 3339 datetime".to_string()),
                    actual: Some(s.to_string()),
                });
            }
            true
        }
        TypeKind::Object => value.is_object(),
        TypeKind::Array => value.is_array(),
        TypeKind::Reference => value.is_string() || value.is_object(),
    };
    if matches {
        None
    } else {
        Some(mismatch(value, type_label, path))
    }
}

fn mismatch(value: &Value, type_label: &str, path: &FieldPath) -> ValidationOutcome {
    ValidationOutcome {
        path: path.clone(),
        severity: Severity::Error,
        message: format!(
            "Expected {} but found {}",
            type_label,
            value::type_name(value)
        ),
        expected: Some(type_label.to_string()),
        actual: Some(value::type_name(value).to_string()),
    }
}

/// Structural check for a reference value: a non-empty string identifier,
/// or a mapping carrying a string `_ref`. The engine never dereferences.
pub(super) fn check_reference_shape(value: &Value, path: &FieldPath) -> Option<ValidationOutcome> {
    let ok = match value {
        Value::String(id) => !id.is_empty(),
        Value::Object(map) => map
            .get("_ref")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty()),
        _ => false,
    };
    if ok {
        None
    } else {
        Some(ValidationOutcome {
            path: path.clone(),
            severity: Severity::Error,
            message: "Reference must carry a document identifier".to_string(),
            expected: Some("identifier string or '_ref' member".to_string()),
            actual: Some(value::type_name(value).to_string()),
        })
    }
}
