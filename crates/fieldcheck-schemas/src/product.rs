//! The product document type

use fieldcheck_core::{
    CustomCheck, DocumentType, ElementType, FieldDefinition, FieldOptions, Rule,
};
use serde_json::Value;

/// Product: catalog entry with pricing, stock, dimensions, and media.
pub fn product() -> DocumentType {
    DocumentType::new("product", "Product").fields(vec![
        FieldDefinition::new("name", "string")
            .title("Name")
            .validation(Rule::new().required().max(100).warning("Keep the name short!")),
        FieldDefinition::new("description", "text")
            .title("Description")
            .validation(Rule::new().required().min(20).max(500)),
        FieldDefinition::new("rating", "number")
            .title("Rating")
            .validation(
                Rule::new()
                    .required()
                    .min(0)
                    .max(5)
                    .warning("Rating must be between 0 and 5."),
            ),
        FieldDefinition::new("price", "number")
            .title("Price")
            .validation(Rule::new().required().min(0).warning("Price cannot be negative.")),
        FieldDefinition::new("discountedPrice", "number")
            .title("Discounted Price")
            .validation(Rule::new().min(0).custom(|value, ctx| {
                let discounted = value.as_f64();
                let price = ctx.document.get("price").and_then(Value::as_f64);
                match (discounted, price) {
                    (Some(d), Some(p)) if d > p => CustomCheck::fail(
                        "Discounted price cannot be greater than the original price.",
                    ),
                    _ => CustomCheck::Pass,
                }
            })),
        FieldDefinition::new("stockQuantity", "number")
            .title("Stock Quantity")
            .validation(
                Rule::new()
                    .required()
                    .min(0)
                    .warning("Stock quantity cannot be negative."),
            ),
        FieldDefinition::new("brand", "string")
            .title("Brand")
            .validation(Rule::new().required().max(50).warning("Brand name should be short.")),
        FieldDefinition::new("dimensions", "object")
            .title("Dimensions / Size")
            .fields(vec![
                FieldDefinition::new("width", "number")
                    .title("Width")
                    .validation(Rule::new().min(0).warning("Width cannot be negative.")),
                FieldDefinition::new("height", "number")
                    .title("Height")
                    .validation(Rule::new().min(0).warning("Height cannot be negative.")),
                FieldDefinition::new("depth", "number")
                    .title("Depth")
                    .validation(Rule::new().min(0).warning("Depth cannot be negative.")),
            ])
            .options(FieldOptions::new().collapsible()),
        FieldDefinition::new("colors", "array")
            .title("Colors")
            .of(ElementType::primitive("string"))
            .options(FieldOptions::new().layout("tags")),
        FieldDefinition::new("categories", "array")
            .title("Categories")
            .of(ElementType::reference(["category"])),
        FieldDefinition::new("tags", "array")
            .title("Tags")
            .of(ElementType::primitive("string"))
            .options(FieldOptions::new().layout("tags")),
        FieldDefinition::new("image", "image")
            .title("Image")
            .options(FieldOptions::new().hotspot())
            .fields(vec![FieldDefinition::new("alt", "string")
                .title("Alt Text")
                .validation(
                    Rule::new()
                        .required()
                        .warning("Alt text is important for accessibility."),
                )]),
    ])
}
