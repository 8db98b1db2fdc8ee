//! Initial values and the clock collaborator
//!
//! Fields may declare a value to seed into newly created documents: a
//! static constant or a deferred generator. Generators take an explicit
//! time source so document creation stays deterministic under test. The
//! validator never evaluates initial values; seeding belongs to the
//! document-creation collaborator.

use crate::schema::{DocumentType, FieldDefinition};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Injectable time source.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant, for tests and reproducible seeding.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Value seeded into a new document for one field.
#[derive(Debug, Clone)]
pub enum InitialValue {
    /// Static constant
    Static(Value),
    /// The creation timestamp, rendered as RFC 3339
    CurrentTimestamp,
}

impl InitialValue {
    /// Resolve against the given time source.
    pub fn resolve(&self, clock: &dyn Clock) -> Value {
        match self {
            Self::Static(value) => value.clone(),
            Self::CurrentTimestamp => Value::String(clock.now().to_rfc3339()),
        }
    }
}

impl DocumentType {
    /// Seed a fresh document from the declared initial values.
    ///
    /// Fields without an initial value are omitted; object-shaped fields
    /// contribute a sub-object when any of their nested fields declare
    /// one.
    pub fn initial_document(&self, clock: &dyn Clock) -> Value {
        Value::Object(seed_fields(&self.fields, clock))
    }
}

fn seed_fields(fields: &[FieldDefinition], clock: &dyn Clock) -> Map<String, Value> {
    let mut seeded = Map::new();
    for field in fields {
        if let Some(initial) = &field.initial_value {
            seeded.insert(field.name.clone(), initial.resolve(clock));
        } else if !field.fields.is_empty() {
            let nested = seed_fields(&field.fields, clock);
            if !nested.is_empty() {
                seeded.insert(field.name.clone(), Value::Object(nested));
            }
        }
    }
    seeded
}
