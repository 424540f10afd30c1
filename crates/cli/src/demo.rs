//! The sample shipment printed by the `delivery-note` binary.

use dnote_delivery::Delivery;
use dnote_invoicing::Item;
use dnote_parties::Customer;

/// Flat taxes and fees charged on the sample invoice.
pub const SAMPLE_TAXES_AND_FEES: f64 = 13.50;

pub fn sample_customer() -> Customer {
    Customer::new(
        "Sarah Johnson",
        "sarah.johnson@example.com",
        "45 Knowledge Avenue, Dubai, UAE",
    )
}

pub fn sample_delivery() -> Delivery {
    Delivery::new(
        "DEL123456789",
        "DN-2025-001",
        "January 25, 2025",
        "Courier",
        "",
        "7 kg",
    )
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("ITM001", "Wireless Keyboard", 1.0, 100.00),
        Item::new("ITM002", "Wireless Mouse & Pad Set", 1.0, 75.00),
        Item::new("ITM003", "Laptop Cooling Pad", 1.0, 120.00),
        Item::new("ITM004", "Camera Lock", 3.0, 15.00),
    ]
}
