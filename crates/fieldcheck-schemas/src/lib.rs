//! Fieldcheck Schemas - sample document types
//!
//! The three content-document shapes of the store - product, order, and
//! shipment - expressed as [`DocumentType`] trees for the Fieldcheck
//! validation engine. These are configuration, not engine code: every
//! constraint here is declared through the core rule builder.
//!
//! ```
//! use serde_json::json;
//!
//! let order = fieldcheck_schemas::order();
//! let report = fieldcheck_core::validate(&order, &json!({ "items": [] }))?;
//! assert!(report.has_errors());
//! # Ok::<(), fieldcheck_core::SchemaError>(())
//! ```

mod order;
mod product;
mod shipment;

pub use order::order;
pub use product::product;
pub use shipment::shipment;

use fieldcheck_core::DocumentType;

/// All built-in document types, in registration order.
pub fn all() -> Vec<DocumentType> {
    vec![product(), order(), shipment()]
}

/// Look up a built-in document type by name.
pub fn find(name: &str) -> Option<DocumentType> {
    all().into_iter().find(|schema| schema.name == name)
}
