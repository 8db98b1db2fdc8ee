//! Constraints, severities, and the fluent rule builder
//!
//! [`Rule`] accumulates constraints into an immutable [`RuleSet`].
//! Chaining is sugar, not semantics: the engine only ever sees the
//! ordered constraint list the builder produces.

use crate::path::FieldPath;
use crate::registry::ConstraintTag;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Severity of a violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocking; downstream persistence should be rejected
    Error,
    /// Advisory only
    Warning,
}

/// Read-only context handed to a custom predicate.
///
/// Carries the root document so a predicate can compare the current field
/// against its siblings, plus the path of the field under test. Predicates
/// must be pure functions of this context: no I/O, no external lookups.
pub struct CustomContext<'a> {
    /// The full document being validated
    pub document: &'a Value,
    /// Path of the field the predicate is attached to
    pub path: &'a FieldPath,
}

/// Result of a custom predicate.
pub enum CustomCheck {
    Pass,
    Fail(String),
}

impl CustomCheck {
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }
}

/// Boxed custom predicate: (candidate value, context) -> pass or fail.
pub type CustomFn = Arc<dyn Fn(&Value, &CustomContext<'_>) -> CustomCheck + Send + Sync>;

/// A single checkable rule.
#[derive(Clone)]
pub enum ConstraintKind {
    /// Value must be present (missing key, `null`, and `""` are absent)
    Required,
    /// Inclusive lower bound: numeric value, character count, or element count
    Min(f64),
    /// Inclusive upper bound: numeric value, character count, or element count
    Max(f64),
    /// Value must look like an email address
    Email,
    /// Value must be one of the allowed values
    Membership(Vec<Value>),
    /// Custom predicate, evaluated last with access to the whole document
    Custom(CustomFn),
}

impl ConstraintKind {
    /// Constraint vocabulary tag, used by the type registry.
    pub fn tag(&self) -> ConstraintTag {
        match self {
            Self::Required => ConstraintTag::Required,
            Self::Min(_) => ConstraintTag::Min,
            Self::Max(_) => ConstraintTag::Max,
            Self::Email => ConstraintTag::Email,
            Self::Membership(_) => ConstraintTag::Membership,
            Self::Custom(_) => ConstraintTag::Custom,
        }
    }

    /// Stable name for diagnostics and schema errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Email => "email",
            Self::Membership(_) => "membership",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::Min(bound) => write!(f, "Min({})", bound),
            Self::Max(bound) => write!(f, "Max({})", bound),
            Self::Email => write!(f, "Email"),
            Self::Membership(values) => write!(f, "Membership({:?})", values),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// One constraint with its severity and optional message override.
///
/// When `message` is `None`, the engine supplies a default message for the
/// constraint kind.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub severity: Severity,
    pub message: Option<String>,
}

impl Constraint {
    /// A constraint at the default (error) severity with no message override.
    pub fn new(kind: ConstraintKind) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: None,
        }
    }
}

/// Immutable, ordered list of constraints attached to one field.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    constraints: Vec<Constraint>,
}

impl RuleSet {
    /// Assemble a rule set directly from constraints.
    ///
    /// [`Rule`] is the usual way to build one; this exists for callers that
    /// construct constraint lists programmatically. The validator's schema
    /// pass still enforces the single-custom invariant on hand-assembled
    /// sets.
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The `required` constraint, if one was declared.
    pub fn required_constraint(&self) -> Option<&Constraint> {
        self.constraints
            .iter()
            .find(|c| matches!(c.kind, ConstraintKind::Required))
    }

    pub fn is_required(&self) -> bool {
        self.required_constraint().is_some()
    }

    /// The custom constraint, if one was declared.
    pub fn custom_constraint(&self) -> Option<&Constraint> {
        self.constraints
            .iter()
            .find(|c| matches!(c.kind, ConstraintKind::Custom(_)))
    }
}

/// Fluent constraint accumulator for one field.
///
/// ```
/// use fieldcheck_core::Rule;
///
/// let rules = Rule::new()
///     .required()
///     .min(5)
///     .max(50)
///     .warning("Should be between 5 and 50 characters.")
///     .build();
/// assert!(rules.is_required());
/// ```
///
/// A trailing [`warning`](Rule::warning) or [`error`](Rule::error) covers
/// the run of constraints added since the previous severity call; with no
/// preceding constraint it covers nothing. Declaring a second custom
/// predicate replaces the first (last declared wins).
#[derive(Debug, Clone, Default)]
pub struct Rule {
    constraints: Vec<Constraint>,
    // Index of the first constraint not yet covered by a severity call.
    severity_mark: usize,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, kind: ConstraintKind) -> Self {
        self.constraints.push(Constraint::new(kind));
        self
    }

    /// The field must have a value.
    pub fn required(self) -> Self {
        self.push(ConstraintKind::Required)
    }

    /// Inclusive lower bound on numeric value, character count, or element
    /// count, depending on the field type.
    pub fn min(self, bound: impl Into<f64>) -> Self {
        self.push(ConstraintKind::Min(bound.into()))
    }

    /// Inclusive upper bound; see [`min`](Rule::min).
    pub fn max(self, bound: impl Into<f64>) -> Self {
        self.push(ConstraintKind::Max(bound.into()))
    }

    /// The value must look like an email address.
    pub fn email(self) -> Self {
        self.push(ConstraintKind::Email)
    }

    /// The value must be one of the given values.
    pub fn one_of(self, values: impl IntoIterator<Item = Value>) -> Self {
        self.push(ConstraintKind::Membership(values.into_iter().collect()))
    }

    /// Attach a custom predicate, evaluated last during validation.
    ///
    /// A later call replaces an earlier predicate.
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value, &CustomContext<'_>) -> CustomCheck + Send + Sync + 'static,
    {
        if let Some(pos) = self
            .constraints
            .iter()
            .position(|c| matches!(c.kind, ConstraintKind::Custom(_)))
        {
            self.constraints.remove(pos);
            if pos < self.severity_mark {
                self.severity_mark -= 1;
            }
        }
        self.push(ConstraintKind::Custom(Arc::new(predicate)))
    }

    /// Mark the constraints accumulated since the previous severity call as
    /// warnings, with the given message.
    pub fn warning(self, message: impl Into<String>) -> Self {
        self.mark(Severity::Warning, message.into())
    }

    /// Mark the constraints accumulated since the previous severity call as
    /// errors, with the given message.
    pub fn error(self, message: impl Into<String>) -> Self {
        self.mark(Severity::Error, message.into())
    }

    fn mark(mut self, severity: Severity, message: String) -> Self {
        for constraint in &mut self.constraints[self.severity_mark..] {
            constraint.severity = severity;
            constraint.message = Some(message.clone());
        }
        self.severity_mark = self.constraints.len();
        self
    }

    /// Finish accumulation.
    pub fn build(self) -> RuleSet {
        RuleSet {
            constraints: self.constraints,
        }
    }
}

impl From<Rule> for RuleSet {
    fn from(rule: Rule) -> Self {
        rule.build()
    }
}
