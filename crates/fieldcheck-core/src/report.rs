//! Validation reports
//!
//! A [`Report`] is the ordered outcome list produced by one validation
//! call: fields in declaration order, array elements in ascending index
//! order. It is created fresh per call, owned by the caller, and purely a
//! read view; the engine attaches no policy to it.

use crate::rule::Severity;
use crate::validator::ValidationOutcome;
use serde::Serialize;

/// Ordered collection of validation outcomes for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    outcomes: Vec<ValidationOutcome>,
}

impl Report {
    pub fn new(outcomes: Vec<ValidationOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[ValidationOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// True iff any outcome is a blocking error.
    pub fn has_errors(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.severity == Severity::Error)
    }

    /// True iff the report is non-empty and every outcome is advisory.
    pub fn warnings_only(&self) -> bool {
        !self.is_empty() && !self.has_errors()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.severity == Severity::Warning)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationOutcome> {
        self.outcomes.iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ValidationOutcome;
    type IntoIter = std::slice::Iter<'a, ValidationOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
