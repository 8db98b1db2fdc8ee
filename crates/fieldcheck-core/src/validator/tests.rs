//! Tests for the validation engine
//!
//! Covers the traversal contract: required short-circuiting, exhaustive
//! built-in evaluation, declaration-order reporting, recursion into
//! objects and arrays, reference structure, custom predicates, and the
//! schema-error taxonomy.

use crate::error::SchemaError;
use crate::proptest_strategies::candidate_strategy;
use crate::registry::TypeRegistry;
use crate::report::Report;
use crate::rule::{Constraint, ConstraintKind, CustomCheck, Rule, RuleSet, Severity};
use crate::schema::{DocumentType, ElementType, FieldDefinition};
use crate::validator::Validator;
use crate::value;
use proptest::prelude::*;
use serde_json::{json, Value};

fn check(schema: &DocumentType, document: &Value) -> Report {
    let registry = TypeRegistry::builtin();
    Validator::new(&registry).validate(schema, document).unwrap()
}

fn schema_err(schema: &DocumentType) -> SchemaError {
    let registry = TypeRegistry::builtin();
    Validator::new(&registry)
        .validate(schema, &json!({}))
        .unwrap_err()
}

fn paths(report: &Report) -> Vec<String> {
    report.iter().map(|o| o.path.to_string()).collect()
}

fn article() -> DocumentType {
    DocumentType::new("article", "Article").fields(vec![
        FieldDefinition::new("headline", "string")
            .validation(Rule::new().required().min(5).max(80)),
        FieldDefinition::new("rating", "number").validation(Rule::new().min(0).max(5)),
        FieldDefinition::new("tags", "array")
            .of(ElementType::primitive("string"))
            .validation(Rule::new().min(1)),
    ])
}

// ---- required ----------------------------------------------------------

#[test]
fn test_required_absence_yields_single_outcome() {
    let report = check(&article(), &json!({}));
    assert_eq!(paths(&report), vec!["headline"]);
    assert_eq!(report.outcomes()[0].message, "Required");
    assert_eq!(report.outcomes()[0].severity, Severity::Error);
}

#[test]
fn test_empty_string_counts_as_absent() {
    let report = check(&article(), &json!({ "headline": "" }));
    assert_eq!(paths(&report), vec!["headline"]);
    assert_eq!(report.outcomes()[0].message, "Required");
}

#[test]
fn test_absent_optional_fields_yield_nothing() {
    let report = check(&article(), &json!({ "headline": "A headline" }));
    assert!(report.is_empty());
}

#[test]
fn test_required_does_not_cascade_into_custom() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("x", "string")
        .validation(
            Rule::new()
                .required()
                .custom(|_, _| CustomCheck::fail("never reached for absent values")),
        )]);
    let report = check(&schema, &json!({}));
    assert_eq!(report.len(), 1);
    assert_eq!(report.outcomes()[0].message, "Required");
}

#[test]
fn test_empty_array_passes_required_but_fails_min() {
    let schema = DocumentType::new("order", "Order").fields(vec![FieldDefinition::new(
        "items", "array",
    )
    .of(ElementType::primitive("string"))
    .validation(
        Rule::new()
            .required()
            .min(1)
            .error("Order must include at least one item."),
    )]);

    let report = check(&schema, &json!({ "items": [] }));
    assert_eq!(paths(&report), vec!["items"]);
    assert_eq!(
        report.outcomes()[0].message,
        "Order must include at least one item."
    );
}

// ---- built-in constraints ---------------------------------------------

#[test]
fn test_all_failing_builtins_are_reported() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("code", "string")
        .validation(Rule::new().min(10).max(2).email())]);

    let report = check(&schema, &json!({ "code": "abcd" }));
    assert_eq!(report.len(), 3);
    assert!(report.iter().all(|o| o.path.to_string() == "code"));
}

#[test]
fn test_bounds_are_inclusive() {
    let schema = DocumentType::new("t", "T").fields(vec![
        FieldDefinition::new("rating", "number").validation(Rule::new().min(0).max(5)),
    ]);
    assert!(check(&schema, &json!({ "rating": 0 })).is_empty());
    assert!(check(&schema, &json!({ "rating": 5 })).is_empty());
    assert_eq!(check(&schema, &json!({ "rating": 5.1 })).len(), 1);
    assert_eq!(check(&schema, &json!({ "rating": -0.1 })).len(), 1);
}

#[test]
fn test_string_bounds_measure_characters() {
    let schema = DocumentType::new("t", "T").fields(vec![
        FieldDefinition::new("name", "string").validation(Rule::new().max(5)),
    ]);
    // Five characters, more than five bytes.
    assert!(check(&schema, &json!({ "name": "héllö" })).is_empty());
    assert_eq!(check(&schema, &json!({ "name": "héllös" })).len(), 1);
}

#[test]
fn test_email_format() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new(
        "customerEmail",
        "string",
    )
    .validation(Rule::new().email().error("Must be a valid email address."))]);

    assert!(check(&schema, &json!({ "customerEmail": "a@b.example" })).is_empty());
    let report = check(&schema, &json!({ "customerEmail": "not-an-email" }));
    assert_eq!(report.len(), 1);
    assert_eq!(report.outcomes()[0].message, "Must be a valid email address.");
}

#[test]
fn test_membership() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new(
        "paymentStatus",
        "string",
    )
    .validation(Rule::new().one_of([json!("Unpaid"), json!("Paid"), json!("Refunded")]))]);

    assert!(check(&schema, &json!({ "paymentStatus": "Paid" })).is_empty());
    let report = check(&schema, &json!({ "paymentStatus": "Disputed" }));
    assert_eq!(report.len(), 1);
    assert!(report.outcomes()[0].message.contains("Unpaid"));
}

#[test]
fn test_warning_severity_covers_the_chain() {
    let schema = DocumentType::new("shipment", "Shipment").fields(vec![FieldDefinition::new(
        "trackingNumber",
        "string",
    )
    .validation(
        Rule::new()
            .required()
            .min(5)
            .max(50)
            .warning("Tracking number should be between 5 to 50 characters."),
    )]);

    let report = check(&schema, &json!({ "trackingNumber": "AB1" }));
    assert_eq!(report.len(), 1);
    assert_eq!(report.outcomes()[0].severity, Severity::Warning);
    assert_eq!(
        report.outcomes()[0].message,
        "Tracking number should be between 5 to 50 characters."
    );
    assert!(report.warnings_only());
}

// ---- shape and datetime -----------------------------------------------

#[test]
fn test_type_mismatch_reports_once_and_skips_builtins() {
    let schema = DocumentType::new("t", "T").fields(vec![
        FieldDefinition::new("headline", "string").validation(Rule::new().min(5).max(80)),
    ]);
    let report = check(&schema, &json!({ "headline": 42 }));
    assert_eq!(report.len(), 1);
    assert_eq!(report.outcomes()[0].message, "Expected string but found number");
    assert_eq!(report.outcomes()[0].expected.as_deref(), Some("string"));
    assert_eq!(report.outcomes()[0].actual.as_deref(), Some("number"));
}

#[test]
fn test_custom_runs_despite_type_mismatch() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("x", "number")
        .validation(
            Rule::new()
                .custom(|value, _| match value.as_f64() {
                    Some(_) => CustomCheck::Pass,
                    None => CustomCheck::fail("not a number at all"),
                }),
        )]);
    let report = check(&schema, &json!({ "x": "oops" }));
    assert_eq!(report.len(), 2);
    assert_eq!(report.outcomes()[1].message, "not a number at all");
}

#[test]
fn test_datetime_must_parse() {
    let schema = DocumentType::new("t", "T").fields(vec![
        FieldDefinition::new("timestamp", "datetime").validation(Rule::new().required()),
    ]);
    assert!(check(&schema, &json!({ "timestamp": "2024-06-01T12:00:00Z" })).is_empty());

    let report = check(&schema, &json!({ "timestamp": "yesterday" }));
    assert_eq!(report.len(), 1);
    assert_eq!(report.outcomes()[0].message, "Must be a valid RFC 3339 datetime");
}

// ---- recursion ---------------------------------------------------------

#[test]
fn test_object_recursion_extends_path() {
    let schema = DocumentType::new("product", "Product").fields(vec![FieldDefinition::new(
        "dimensions",
        "object",
    )
    .fields(vec![
        FieldDefinition::new("width", "number")
            .validation(Rule::new().min(0).warning("Width cannot be negative.")),
        FieldDefinition::new("height", "number").validation(Rule::new().min(0)),
    ])]);

    let report = check(&schema, &json!({ "dimensions": { "width": -2, "height": 10 } }));
    assert_eq!(paths(&report), vec!["dimensions.width"]);
    assert_eq!(report.outcomes()[0].severity, Severity::Warning);
}

#[test]
fn test_array_elements_validated_in_index_order() {
    let report = check(&article(), &json!({
        "headline": "A headline",
        "tags": [1, "ok", true],
    }));
    assert_eq!(paths(&report), vec!["tags[0]", "tags[2]"]);
}

#[test]
fn test_object_elements_recurse_per_field() {
    let schema = DocumentType::new("order", "Order").fields(vec![FieldDefinition::new(
        "items", "array",
    )
    .of(ElementType::object(vec![
        FieldDefinition::new("productId", "reference")
            .reference_to(["product"])
            .validation(Rule::new().required().error("Each item must include a product.")),
        FieldDefinition::new("quantity", "number")
            .validation(Rule::new().required().min(1).error("Quantity must be at least 1.")),
    ]))
    .validation(Rule::new().required().min(1))]);

    let report = check(
        &schema,
        &json!({ "items": [ { "quantity": 0 }, { "productId": "p-1", "quantity": 2 } ] }),
    );
    assert_eq!(paths(&report), vec!["items[0].productId", "items[0].quantity"]);
}

#[test]
fn test_array_min_is_distinct_from_element_outcomes() {
    let report = check(&article(), &json!({ "headline": "A headline", "tags": [] }));
    assert_eq!(paths(&report), vec!["tags"]);
    assert!(report.outcomes()[0].message.contains("at least 1"));
}

// ---- references --------------------------------------------------------

#[test]
fn test_reference_structural_check() {
    let schema = DocumentType::new("order", "Order").fields(vec![FieldDefinition::new(
        "customerId",
        "reference",
    )
    .reference_to(["customer"])
    .validation(Rule::new().required())]);

    assert!(check(&schema, &json!({ "customerId": "cust-42" })).is_empty());
    assert!(check(&schema, &json!({ "customerId": { "_ref": "cust-42" } })).is_empty());

    let report = check(&schema, &json!({ "customerId": {} }));
    assert_eq!(report.len(), 1);
    assert!(report.outcomes()[0].message.contains("identifier"));
}

// ---- custom predicates -------------------------------------------------

#[test]
fn test_custom_sees_sibling_fields() {
    let schema = DocumentType::new("product", "Product").fields(vec![
        FieldDefinition::new("price", "number").validation(Rule::new().required().min(0)),
        FieldDefinition::new("discountedPrice", "number").validation(Rule::new().min(0).custom(
            |value, ctx| {
                let discounted = value.as_f64();
                let price = ctx.document.get("price").and_then(Value::as_f64);
                match (discounted, price) {
                    (Some(d), Some(p)) if d > p => CustomCheck::fail(
                        "Discounted price cannot be greater than the original price.",
                    ),
                    _ => CustomCheck::Pass,
                }
            },
        )),
    ]);

    let report = check(&schema, &json!({ "price": 50, "discountedPrice": 60 }));
    assert_eq!(paths(&report), vec!["discountedPrice"]);
    assert_eq!(
        report.outcomes()[0].message,
        "Discounted price cannot be greater than the original price."
    );
    assert_eq!(report.outcomes()[0].severity, Severity::Error);

    assert!(check(&schema, &json!({ "price": 50, "discountedPrice": 40 })).is_empty());
}

#[test]
fn test_custom_message_override() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("x", "number")
        .validation(
            Rule::new()
                .custom(|_, _| CustomCheck::fail("predicate message"))
                .warning("authored message"),
        )]);
    let report = check(&schema, &json!({ "x": 1 }));
    assert_eq!(report.outcomes()[0].message, "authored message");
    assert_eq!(report.outcomes()[0].severity, Severity::Warning);
}

#[test]
fn test_custom_runs_after_failing_builtins() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("x", "number")
        .validation(
            Rule::new()
                .min(10)
                .custom(|_, _| CustomCheck::fail("independent signal")),
        )]);
    let report = check(&schema, &json!({ "x": 3 }));
    assert_eq!(report.len(), 2);
    assert_eq!(report.outcomes()[1].message, "independent signal");
}

// ---- schema errors -----------------------------------------------------

#[test]
fn test_unknown_type_is_a_schema_error() {
    let schema = DocumentType::new("t", "T")
        .fields(vec![FieldDefinition::new("x", "blob")]);
    assert!(matches!(
        schema_err(&schema),
        SchemaError::UnknownType { ref type_name, .. } if type_name == "blob"
    ));
}

#[test]
fn test_duplicate_sibling_names() {
    let schema = DocumentType::new("t", "T").fields(vec![
        FieldDefinition::new("x", "string"),
        FieldDefinition::new("x", "number"),
    ]);
    assert!(matches!(
        schema_err(&schema),
        SchemaError::DuplicateField { ref name, .. } if name == "x"
    ));
}

#[test]
fn test_duplicate_names_in_nested_fields() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("o", "object")
        .fields(vec![
            FieldDefinition::new("y", "string"),
            FieldDefinition::new("y", "string"),
        ])]);
    assert!(matches!(
        schema_err(&schema),
        SchemaError::DuplicateField { ref path, .. } if path == "t.o"
    ));
}

#[test]
fn test_empty_field_name() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("", "string")]);
    assert!(matches!(schema_err(&schema), SchemaError::EmptyFieldName { .. }));
}

#[test]
fn test_array_without_element_type() {
    let schema = DocumentType::new("t", "T").fields(vec![FieldDefinition::new("xs", "array")]);
    assert!(matches!(
        schema_err(&schema),
        SchemaError::MissingElementType { ref path } if path == "t.xs"
    ));
}

#[test]
fn test_reference_without_target() {
    let schema = DocumentType::new("t", "T")
        .fields(vec![FieldDefinition::new("r", "reference")]);
    assert!(matches!(
        schema_err(&schema),
        SchemaError::MissingReferenceTarget { .. }
    ));
}

#[test]
fn test_constraint_illegal_for_type() {
    let schema = DocumentType::new("t", "T").fields(vec![
        FieldDefinition::new("n", "number").validation(Rule::new().email()),
    ]);
    assert!(matches!(
        schema_err(&schema),
        SchemaError::UnsupportedConstraint { constraint: "email", .. }
    ));
}

#[test]
fn test_hand_assembled_double_custom_is_rejected() {
    let predicate: crate::rule::CustomFn = std::sync::Arc::new(|_, _| CustomCheck::Pass);
    let rules = RuleSet::new(vec![
        Constraint::new(ConstraintKind::Custom(predicate.clone())),
        Constraint::new(ConstraintKind::Custom(predicate)),
    ]);
    let mut field = FieldDefinition::new("x", "number");
    field.rules = rules;
    let schema = DocumentType::new("t", "T").fields(vec![field]);
    assert!(matches!(
        schema_err(&schema),
        SchemaError::MultipleCustomConstraints { .. }
    ));
}

#[test]
fn test_schema_error_aborts_before_any_outcome() {
    let schema = DocumentType::new("t", "T").fields(vec![
        FieldDefinition::new("ok", "string").validation(Rule::new().required()),
        FieldDefinition::new("bad", "blob"),
    ]);
    let registry = TypeRegistry::builtin();
    let result = Validator::new(&registry).validate(&schema, &json!({}));
    assert!(result.is_err());
}

// ---- properties --------------------------------------------------------

fn property_schema() -> DocumentType {
    DocumentType::new("article", "Article").fields(vec![
        FieldDefinition::new("headline", "string")
            .validation(Rule::new().required().min(5).max(30)),
        FieldDefinition::new("rating", "number").validation(Rule::new().min(0).max(5)),
        FieldDefinition::new("tags", "array")
            .of(ElementType::primitive("string"))
            .validation(Rule::new().min(1)),
    ])
}

proptest! {
    #[test]
    fn prop_validation_is_deterministic(doc in candidate_strategy()) {
        let schema = property_schema();
        let registry = TypeRegistry::builtin();
        let validator = Validator::new(&registry);
        let first = validator.validate(&schema, &doc).unwrap();
        let second = validator.validate(&schema, &doc).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_required_absence_reports_exactly_once(doc in candidate_strategy()) {
        let schema = property_schema();
        let report = check(&schema, &doc);
        if value::is_absent(value::member(&doc, "headline")) {
            let at_headline = report
                .iter()
                .filter(|o| o.path.to_string() == "headline")
                .count();
            prop_assert_eq!(at_headline, 1);
        }
    }

    #[test]
    fn prop_outcomes_follow_declaration_order(doc in candidate_strategy()) {
        let schema = property_schema();
        let report = check(&schema, &doc);
        let declaration: Vec<&str> = vec!["headline", "rating", "tags"];
        let indices: Vec<usize> = report
            .iter()
            .filter_map(|o| {
                let rendered = o.path.to_string();
                let head = rendered.split(['.', '[']).next().unwrap_or("");
                declaration.iter().position(|name| *name == head)
            })
            .collect();
        prop_assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    }
}
