//! Validator engine
//!
//! Traverses a document type and a candidate document in lockstep,
//! depth-first in declaration order, evaluating each field's rule set and
//! collecting every reachable violation in one pass.

mod constraints;
mod core;
mod types;

#[cfg(test)]
mod tests;

pub use self::core::Validator;
pub use types::ValidationOutcome;
