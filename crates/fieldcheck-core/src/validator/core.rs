//! Core validation engine
//!
//! `Validator` checks the schema tree for authoring defects, then walks
//! schema and document together. Within one call every reachable content
//! problem is collected; only a schema defect aborts.

use super::constraints;
use super::types::ValidationOutcome;
use crate::error::{Result, SchemaError};
use crate::path::FieldPath;
use crate::registry::{TypeKind, TypeRegistry, TypeSpec};
use crate::report::Report;
use crate::rule::{ConstraintKind, CustomCheck, CustomContext, RuleSet};
use crate::schema::{DocumentType, ElementType, FieldDefinition};
use crate::value;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Schema-driven document validator.
///
/// Holds a reference to the type registry consulted during traversal;
/// both the registry and the document type are read-only, so one
/// validator may serve concurrent calls.
pub struct Validator<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Validate a document against a document type.
    ///
    /// Returns `Err` only for schema authoring defects; document content
    /// problems, however many, land in the report.
    pub fn validate(&self, schema: &DocumentType, document: &Value) -> Result<Report> {
        self.check_fields(&schema.fields, &schema.name)?;
        debug!(schema = %schema.name, "validating document");

        let mut outcomes = Vec::new();
        for field in &schema.fields {
            let candidate = value::member(document, &field.name);
            let path = FieldPath::root().child(&field.name);
            self.validate_field(field, candidate, document, path, &mut outcomes)?;
        }

        debug!(schema = %schema.name, outcomes = outcomes.len(), "validation finished");
        Ok(Report::new(outcomes))
    }

    // ---- schema pass -------------------------------------------------

    fn lookup(&self, type_name: &str, path: &str) -> Result<&TypeSpec> {
        self.registry
            .get(type_name)
            .ok_or_else(|| SchemaError::UnknownType {
                path: path.to_string(),
                type_name: type_name.to_string(),
            })
    }

    fn check_fields(&self, fields: &[FieldDefinition], path: &str) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for field in fields {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    path: path.to_string(),
                });
            }
            if !seen.insert(&field.name) {
                return Err(SchemaError::DuplicateField {
                    path: path.to_string(),
                    name: field.name.clone(),
                });
            }

            let field_path = format!("{}.{}", path, field.name);
            let spec = self.lookup(&field.type_name, &field_path)?;
            self.check_rules(&field.rules, spec, &field_path)?;

            match spec.kind() {
                TypeKind::Array => match &field.element {
                    None => {
                        return Err(SchemaError::MissingElementType { path: field_path });
                    }
                    Some(ElementType::Primitive(type_name)) => {
                        self.lookup(type_name, &field_path)?;
                    }
                    Some(ElementType::Object(nested)) => {
                        self.check_fields(nested, &field_path)?;
                    }
                    Some(ElementType::Reference(targets)) => {
                        if targets.is_empty() {
                            return Err(SchemaError::MissingReferenceTarget { path: field_path });
                        }
                    }
                },
                TypeKind::Reference => {
                    if field.reference_to.is_empty() {
                        return Err(SchemaError::MissingReferenceTarget { path: field_path });
                    }
                }
                TypeKind::Object => {
                    self.check_fields(&field.fields, &field_path)?;
                }
                TypeKind::Text | TypeKind::Number | TypeKind::Datetime => {}
            }
        }
        Ok(())
    }

    fn check_rules(&self, rules: &RuleSet, spec: &TypeSpec, path: &str) -> Result<()> {
        let mut customs = 0;
        for constraint in rules.constraints() {
            if !spec.allows(constraint.kind.tag()) {
                return Err(SchemaError::UnsupportedConstraint {
                    path: path.to_string(),
                    constraint: constraint.kind.name(),
                    type_name: spec.name().to_string(),
                });
            }
            if matches!(constraint.kind, ConstraintKind::Custom(_)) {
                customs += 1;
            }
        }
        if customs > 1 {
            return Err(SchemaError::MultipleCustomConstraints {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    // ---- traversal ---------------------------------------------------

    fn validate_field(
        &self,
        field: &FieldDefinition,
        candidate: Option<&Value>,
        document: &Value,
        path: FieldPath,
        outcomes: &mut Vec<ValidationOutcome>,
    ) -> Result<()> {
        let spec = self.lookup(&field.type_name, &field.name)?;

        if value::is_absent(candidate) {
            // Exactly one outcome for a required absence; no cascade into
            // the other constraints, custom included.
            if let Some(required) = field.rules.required_constraint() {
                outcomes.push(ValidationOutcome {
                    path,
                    severity: required.severity,
                    message: required
                        .message
                        .clone()
                        .unwrap_or_else(|| "Required".to_string()),
                    expected: Some("a value".to_string()),
                    actual: Some("nothing".to_string()),
                });
            }
            return Ok(());
        }
        let Some(present) = candidate else {
            return Ok(());
        };

        let shape_ok =
            match constraints::check_shape(present, spec.kind(), spec.name(), &path) {
                Some(outcome) => {
                    outcomes.push(outcome);
                    false
                }
                None => true,
            };

        if shape_ok {
            // Every applicable built-in runs; no short-circuit on the
            // first failure.
            for constraint in field.rules.constraints() {
                if let Some(outcome) =
                    constraints::check_builtin(present, spec.kind(), constraint, &path)
                {
                    outcomes.push(outcome);
                }
            }

            match spec.kind() {
                TypeKind::Object => {
                    for nested in &field.fields {
                        let candidate = value::member(present, &nested.name);
                        self.validate_field(
                            nested,
                            candidate,
                            document,
                            path.child(&nested.name),
                            outcomes,
                        )?;
                    }
                }
                TypeKind::Array => {
                    if let (Some(items), Some(element)) = (present.as_array(), &field.element) {
                        for (index, item) in items.iter().enumerate() {
                            self.validate_element(
                                element,
                                item,
                                document,
                                path.index(index),
                                outcomes,
                            )?;
                        }
                    }
                }
                TypeKind::Reference => {
                    if let Some(outcome) = constraints::check_reference_shape(present, &path) {
                        outcomes.push(outcome);
                    }
                }
                TypeKind::Text | TypeKind::Number | TypeKind::Datetime => {}
            }
        }

        // Custom runs last, even when built-ins already failed;
        // independent signals are not suppressed.
        if let Some(constraint) = field.rules.custom_constraint() {
            if let ConstraintKind::Custom(predicate) = &constraint.kind {
                let context = CustomContext {
                    document,
                    path: &path,
                };
                if let CustomCheck::Fail(message) = predicate(present, &context) {
                    outcomes.push(ValidationOutcome {
                        path,
                        severity: constraint.severity,
                        message: constraint.message.clone().unwrap_or(message),
                        expected: None,
                        actual: None,
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_element(
        &self,
        element: &ElementType,
        item: &Value,
        document: &Value,
        path: FieldPath,
        outcomes: &mut Vec<ValidationOutcome>,
    ) -> Result<()> {
        match element {
            ElementType::Primitive(type_name) => {
                let spec = self.lookup(type_name, type_name)?;
                if let Some(outcome) =
                    constraints::check_shape(item, spec.kind(), spec.name(), &path)
                {
                    outcomes.push(outcome);
                }
            }
            ElementType::Object(fields) => {
                if !item.is_object() {
                    if let Some(outcome) =
                        constraints::check_shape(item, TypeKind::Object, "object", &path)
                    {
                        outcomes.push(outcome);
                    }
                    return Ok(());
                }
                for nested in fields {
                    let candidate = value::member(item, &nested.name);
                    self.validate_field(
                        nested,
                        candidate,
                        document,
                        path.child(&nested.name),
                        outcomes,
                    )?;
                }
            }
            ElementType::Reference(_) => {
                if let Some(outcome) = constraints::check_reference_shape(item, &path) {
                    outcomes.push(outcome);
                }
            }
        }
        Ok(())
    }
}
