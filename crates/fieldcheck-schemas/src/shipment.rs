//! The shipment document type

use fieldcheck_core::{
    DocumentType, FieldDefinition, FieldOptions, InitialValue, ListOption, Rule,
};
use serde_json::json;

/// Shipment: tracking details for one order.
pub fn shipment() -> DocumentType {
    DocumentType::new("shipment", "Shipment").fields(vec![
        FieldDefinition::new("trackingNumber", "string")
            .title("Tracking Number")
            .validation(
                Rule::new()
                    .required()
                    .min(5)
                    .max(50)
                    .warning("Tracking number should be between 5 to 50 characters."),
            ),
        FieldDefinition::new("order", "reference")
            .title("Associated Order")
            .reference_to(["order"])
            .validation(
                Rule::new()
                    .required()
                    .error("A shipment must be associated with an order."),
            ),
        FieldDefinition::new("carrier", "string")
            .title("Carrier")
            .options(FieldOptions::new().layout("dropdown").list([
                ListOption::new("FedEx", "FedEx"),
                ListOption::new("UPS", "UPS"),
                ListOption::new("DHL", "DHL"),
                ListOption::new("USPS", "USPS"),
            ]))
            .validation(Rule::new().required().error("Carrier is required.")),
        FieldDefinition::new("status", "string")
            .title("Shipment Status")
            .options(FieldOptions::new().layout("dropdown").list([
                ListOption::new("In Transit", "In Transit"),
                ListOption::new("Out for Delivery", "Out for Delivery"),
                ListOption::new("Delivered", "Delivered"),
                ListOption::new("Pending", "Pending"),
            ]))
            .initial_value(InitialValue::Static(json!("Pending")))
            .validation(Rule::new().required()),
        FieldDefinition::new("estimatedDeliveryDate", "datetime")
            .title("Estimated Delivery Date")
            .options(
                FieldOptions::new()
                    .date_format("YYYY-MM-DD")
                    .time_format("HH:mm"),
            )
            .validation(Rule::new().required().error("Estimated delivery date is required.")),
        FieldDefinition::new("actualDeliveryDate", "datetime")
            .title("Actual Delivery Date")
            .options(
                FieldOptions::new()
                    .date_format("YYYY-MM-DD")
                    .time_format("HH:mm"),
            ),
        FieldDefinition::new("shipmentNotes", "text").title("Shipment Notes"),
    ])
}
