//! Outcome types for the validator

use crate::path::FieldPath;
use crate::rule::Severity;
use serde::Serialize;

/// One violated constraint, located by field path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    /// Path from the document root to the offending field
    pub path: FieldPath,
    pub severity: Severity,
    pub message: String,
    /// What the constraint expected, when it can be stated briefly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// What was actually found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}
