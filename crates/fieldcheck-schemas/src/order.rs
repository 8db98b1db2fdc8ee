//! The order document type

use fieldcheck_core::{
    DocumentType, ElementType, FieldDefinition, FieldOptions, InitialValue, ListOption, Rule,
};
use serde_json::json;

/// Order: customer, ordered items, totals, statuses, delivery address.
pub fn order() -> DocumentType {
    DocumentType::new("order", "Order").fields(vec![
        FieldDefinition::new("customerId", "reference")
            .title("Customer ID")
            .reference_to(["customer"])
            .validation(Rule::new().required().error("Customer ID is required.")),
        FieldDefinition::new("customerName", "string")
            .title("Customer Name")
            .validation(
                Rule::new()
                    .required()
                    .min(2)
                    .max(100)
                    .warning("Name should be between 2 to 100 characters."),
            ),
        FieldDefinition::new("customerEmail", "string")
            .title("Customer Email")
            .validation(Rule::new().required().email().error("Must be a valid email address.")),
        FieldDefinition::new("items", "array")
            .title("Ordered Items")
            .of(ElementType::object(vec![
                FieldDefinition::new("productId", "reference")
                    .title("Product ID")
                    .reference_to(["product"])
                    .validation(Rule::new().required().error("Each item must include a product.")),
                FieldDefinition::new("quantity", "number")
                    .title("Quantity")
                    .validation(Rule::new().required().min(1).error("Quantity must be at least 1.")),
            ]))
            .validation(
                Rule::new()
                    .required()
                    .min(1)
                    .error("Order must include at least one item."),
            ),
        FieldDefinition::new("totalPrice", "number")
            .title("Total Price")
            .validation(
                Rule::new()
                    .required()
                    .min(0)
                    .error("Total price must be a positive value."),
            ),
        FieldDefinition::new("orderStatus", "string")
            .title("Order Status")
            .options(FieldOptions::new().layout("dropdown").list([
                ListOption::new("Pending", "Pending"),
                ListOption::new("Processing", "Processing"),
                ListOption::new("Shipped", "Shipped"),
                ListOption::new("Delivered", "Delivered"),
                ListOption::new("Cancelled", "Cancelled"),
            ]))
            .initial_value(InitialValue::Static(json!("Pending")))
            .validation(Rule::new().required()),
        FieldDefinition::new("paymentStatus", "string")
            .title("Payment Status")
            .options(FieldOptions::new().layout("dropdown").list([
                ListOption::new("Unpaid", "Unpaid"),
                ListOption::new("Paid", "Paid"),
                ListOption::new("Refunded", "Refunded"),
            ]))
            .initial_value(InitialValue::Static(json!("Unpaid")))
            .validation(Rule::new().required()),
        FieldDefinition::new("deliveryAddress", "object")
            .title("Delivery Address")
            .fields(vec![
                FieldDefinition::new("street", "string")
                    .title("Street")
                    .validation(Rule::new().required().error("Street address is required.")),
                FieldDefinition::new("city", "string")
                    .title("City")
                    .validation(Rule::new().required().error("City is required.")),
                FieldDefinition::new("state", "string")
                    .title("State")
                    .validation(Rule::new().required().error("State is required.")),
                FieldDefinition::new("postalCode", "string")
                    .title("Postal Code")
                    .validation(Rule::new().required().error("Postal code is required.")),
                FieldDefinition::new("country", "string")
                    .title("Country")
                    .validation(Rule::new().required().error("Country is required.")),
            ]),
        FieldDefinition::new("timestamp", "datetime")
            .title("Order Timestamp")
            .options(
                FieldOptions::new()
                    .date_format("YYYY-MM-DD")
                    .time_format("HH:mm"),
            )
            .initial_value(InitialValue::CurrentTimestamp)
            .validation(Rule::new().required()),
    ])
}
