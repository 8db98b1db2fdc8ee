//! Fieldcheck Core - Schema-driven document validation engine
//!
//! This crate provides the generic validation engine behind Fieldcheck:
//! given an immutable document type definition (a tree of typed fields,
//! each carrying a declarative rule set) and a candidate document, the
//! engine walks both in lockstep and produces an ordered report of
//! violations at two severities.
//!
//! # Main Components
//!
//! - **Error Handling**: `SchemaError` for authoring-time defects, kept
//!   strictly apart from document-content outcomes
//! - **Rule Builder**: fluent accumulation of required/min/max/email/
//!   membership/custom constraints into an immutable `RuleSet`
//! - **Type Registry**: maps field type names to their structural shape
//!   and the constraint vocabulary legal for them
//! - **Validator**: depth-first traversal collecting every reachable
//!   violation in one pass
//! - **Report**: the ordered, caller-owned result of one validation call
//!
//! # Example
//!
//! ```
//! use fieldcheck_core::{DocumentType, FieldDefinition, Rule};
//! use serde_json::json;
//!
//! let schema = DocumentType::new("article", "Article").fields(vec![
//!     FieldDefinition::new("headline", "string")
//!         .validation(Rule::new().required().max(80)),
//! ]);
//!
//! let report = fieldcheck_core::validate(&schema, &json!({}))?;
//! assert!(report.has_errors());
//! # Ok::<(), fieldcheck_core::SchemaError>(())
//! ```

pub mod error;
pub mod initial;
pub mod path;
pub mod registry;
pub mod report;
pub mod rule;
pub mod schema;
pub mod validator;
pub mod value;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use error::{Result, SchemaError};
pub use initial::{Clock, FixedClock, InitialValue, SystemClock};
pub use path::{FieldPath, PathSegment};
pub use registry::{ConstraintTag, TypeKind, TypeRegistry, TypeSpec};
pub use report::Report;
pub use rule::{
    Constraint, ConstraintKind, CustomCheck, CustomContext, CustomFn, Rule, RuleSet, Severity,
};
pub use schema::{DocumentType, ElementType, FieldDefinition, FieldOptions, ListOption};
pub use validator::{ValidationOutcome, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate a document against a document type using the built-in type
/// registry.
///
/// This is the common entry point; construct a [`Validator`] directly when
/// a customized [`TypeRegistry`] is needed.
pub fn validate(schema: &DocumentType, document: &serde_json::Value) -> Result<Report> {
    let registry = TypeRegistry::builtin();
    Validator::new(&registry).validate(schema, document)
}
