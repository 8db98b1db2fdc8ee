//! Error types for the Fieldcheck core library
//!
//! Schema authoring defects are a separate taxonomy from document-content
//! violations: a [`SchemaError`] aborts the whole validation call, while
//! content problems are collected as
//! [`ValidationOutcome`](crate::ValidationOutcome)s in the report.

use thiserror::Error;

/// Authoring-time defect in a document type definition.
///
/// Each variant carries the schema path that triggered it, rendered as
/// `document-type.field.nested-field`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field references a type name the registry does not know
    #[error("schema error at '{path}': unknown field type '{type_name}'")]
    UnknownType { path: String, type_name: String },

    /// A field was declared with an empty name
    #[error("schema error at '{path}': field name is empty")]
    EmptyFieldName { path: String },

    /// Two sibling fields share a name
    #[error("schema error at '{path}': duplicate field name '{name}'")]
    DuplicateField { path: String, name: String },

    /// An array field without an element-type descriptor
    #[error("schema error at '{path}': array field declares no element type")]
    MissingElementType { path: String },

    /// A reference field without at least one target type
    #[error("schema error at '{path}': reference field declares no target type")]
    MissingReferenceTarget { path: String },

    /// A constraint that the field's declared type does not support
    #[error("schema error at '{path}': constraint '{constraint}' is not supported by type '{type_name}'")]
    UnsupportedConstraint {
        path: String,
        constraint: &'static str,
        type_name: String,
    },

    /// More than one custom constraint on a single field
    #[error("schema error at '{path}': more than one custom constraint on a single field")]
    MultipleCustomConstraints { path: String },
}

/// Convenience type alias for Results using our SchemaError type
pub type Result<T> = std::result::Result<T, SchemaError>;
