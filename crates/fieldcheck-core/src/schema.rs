//! Document type definitions
//!
//! A [`DocumentType`] is the static, authored description of one content
//! shape: an ordered list of [`FieldDefinition`]s, each with a type name,
//! optional nested fields, optional reference targets, display options,
//! an optional initial value, and a rule set. Document types are
//! constructed once at process start and immutable thereafter; the
//! validator only ever reads them.

use crate::initial::InitialValue;
use crate::rule::{Rule, RuleSet};
use serde_json::Value;

/// Element-type descriptor for an array field. Exactly one per array.
#[derive(Debug, Clone)]
pub enum ElementType {
    /// Elements are scalars of the named registered type
    Primitive(String),
    /// Elements are objects with their own nested field list
    Object(Vec<FieldDefinition>),
    /// Elements are references to the named document types
    Reference(Vec<String>),
}

impl ElementType {
    pub fn primitive(type_name: impl Into<String>) -> Self {
        Self::Primitive(type_name.into())
    }

    pub fn object(fields: Vec<FieldDefinition>) -> Self {
        Self::Object(fields)
    }

    pub fn reference(targets: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Reference(targets.into_iter().map(Into::into).collect())
    }
}

/// One entry of an enumerated value list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOption {
    pub title: String,
    pub value: Value,
}

impl ListOption {
    pub fn new(title: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Display-only field options.
///
/// The engine never consults these; they exist for the editing UI
/// collaborator that renders the same schema tree. Membership
/// *validation* is a rule-set concern ([`Rule::one_of`]), not an option.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    /// Enumerated value list
    pub list: Vec<ListOption>,
    /// Layout hint for the value list or array ("dropdown", "tags", ...)
    pub layout: Option<String>,
    /// Image hotspot editing
    pub hotspot: bool,
    /// Collapsible object editor
    pub collapsible: bool,
    /// Date display format
    pub date_format: Option<String>,
    /// Time display format
    pub time_format: Option<String>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(mut self, options: impl IntoIterator<Item = ListOption>) -> Self {
        self.list = options.into_iter().collect();
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn hotspot(mut self) -> Self {
        self.hotspot = true;
        self
    }

    pub fn collapsible(mut self) -> Self {
        self.collapsible = true;
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }
}

/// One named, typed slot within a document type.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Member name; unique among siblings, non-empty
    pub name: String,
    /// Human title, display-only
    pub title: String,
    /// Registered type name ("string", "number", "object", ...)
    pub type_name: String,
    /// Nested field list for object-shaped types
    pub fields: Vec<FieldDefinition>,
    /// Target document types for reference fields; at least one
    pub reference_to: Vec<String>,
    /// Element descriptor for array fields; exactly one
    pub element: Option<ElementType>,
    /// Display-only options
    pub options: Option<FieldOptions>,
    /// Value seeded at document-creation time, never during validation
    pub initial_value: Option<InitialValue>,
    /// Constraints evaluated by the validator
    pub rules: RuleSet,
}

impl FieldDefinition {
    /// A field with the given name and type; the title defaults to the
    /// name until [`title`](FieldDefinition::title) is called.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            type_name: type_name.into(),
            fields: Vec::new(),
            reference_to: Vec::new(),
            element: None,
            options: None,
            initial_value: None,
            rules: RuleSet::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Nested field list, for object-shaped types.
    pub fn fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    /// Target document types, for reference fields.
    pub fn reference_to(mut self, targets: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.reference_to = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Element descriptor, for array fields.
    pub fn of(mut self, element: ElementType) -> Self {
        self.element = Some(element);
        self
    }

    pub fn options(mut self, options: FieldOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn initial_value(mut self, initial: InitialValue) -> Self {
        self.initial_value = Some(initial);
        self
    }

    /// Attach the field's rule set.
    pub fn validation(mut self, rule: Rule) -> Self {
        self.rules = rule.build();
        self
    }
}

/// A named document type: the root of one schema tree.
#[derive(Debug, Clone)]
pub struct DocumentType {
    pub name: String,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
}

impl DocumentType {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    /// Look up a top-level field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}
