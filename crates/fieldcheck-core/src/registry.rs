//! Field type registry
//!
//! Maps field type names to their structural shape and the built-in
//! constraint vocabulary legal for them. The registry is populated once at
//! startup (see [`TypeRegistry::builtin`]) and read-only during
//! validation; a field referencing an unregistered type name is a schema
//! authoring defect, not a document problem.

use std::collections::HashMap;

/// Structural behavior of a registered type during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Scalar string value
    Text,
    /// Scalar numeric value
    Number,
    /// String value that must parse as an RFC 3339 datetime
    Datetime,
    /// Named mapping; traversal recurses into the declared nested fields
    Object,
    /// Ordered list; traversal recurses into each element
    Array,
    /// Opaque identifier pointing at another document, never dereferenced
    Reference,
}

/// Tags for the built-in constraint vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintTag {
    Required,
    Min,
    Max,
    Email,
    Membership,
    Custom,
}

/// Shape and constraint vocabulary of one registered type.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    name: String,
    kind: TypeKind,
    constraints: Vec<ConstraintTag>,
}

impl TypeSpec {
    pub fn new(
        name: impl Into<String>,
        kind: TypeKind,
        constraints: impl IntoIterator<Item = ConstraintTag>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            constraints: constraints.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether the given constraint is legal for this type.
    pub fn allows(&self, tag: ConstraintTag) -> bool {
        self.constraints.contains(&tag)
    }
}

/// Registry of field type names.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeSpec>,
}

impl TypeRegistry {
    /// An empty registry. Most callers want [`TypeRegistry::builtin`].
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// The built-in type vocabulary of the content store: string, text,
    /// number, datetime, image, object, array, reference, document.
    pub fn builtin() -> Self {
        use ConstraintTag::*;

        let mut registry = Self::empty();
        registry.register(TypeSpec::new(
            "string",
            TypeKind::Text,
            [Required, Min, Max, Email, Membership, Custom],
        ));
        registry.register(TypeSpec::new(
            "text",
            TypeKind::Text,
            [Required, Min, Max, Membership, Custom],
        ));
        registry.register(TypeSpec::new(
            "number",
            TypeKind::Number,
            [Required, Min, Max, Membership, Custom],
        ));
        registry.register(TypeSpec::new(
            "datetime",
            TypeKind::Datetime,
            [Required, Custom],
        ));
        registry.register(TypeSpec::new("image", TypeKind::Object, [Required, Custom]));
        registry.register(TypeSpec::new(
            "object",
            TypeKind::Object,
            [Required, Custom],
        ));
        registry.register(TypeSpec::new(
            "document",
            TypeKind::Object,
            [Required, Custom],
        ));
        registry.register(TypeSpec::new(
            "array",
            TypeKind::Array,
            [Required, Min, Max, Custom],
        ));
        registry.register(TypeSpec::new(
            "reference",
            TypeKind::Reference,
            [Required, Custom],
        ));
        registry
    }

    /// Register a type, replacing any previous spec under the same name.
    /// Intended for startup configuration only; the registry must not be
    /// mutated once validation calls are running.
    pub fn register(&mut self, spec: TypeSpec) {
        self.types.insert(spec.name.clone(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&TypeSpec> {
        self.types.get(name)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
