use serde::{Deserialize, Serialize};

use dnote_core::{Snapshot, ValueObject};

/// A line item: something delivered, how many, and at what unit price.
///
/// Invariant: `total_price() == quantity() * unit_price()` after construction
/// and after every call to [`Item::set_quantity`] or [`Item::set_unit_price`].
/// The total has no setter of its own.
///
/// Negative and zero quantities or prices are accepted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    code: String,
    description: String,
    quantity: f64,
    unit_price: f64,
    total_price: f64,
}

impl Item {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        let mut item = Self {
            code: code.into(),
            description: description.into(),
            quantity,
            unit_price,
            total_price: 0.0,
        };
        item.total_price = item.calculate_total();
        item
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Store a new quantity and recompute the line total.
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.total_price = self.calculate_total();
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Store a new unit price and recompute the line total.
    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.total_price = self.calculate_total();
    }

    /// Line total as of the last construction or quantity/price change.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// `quantity × unit_price` from the current fields.
    pub fn calculate_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.set_quantity(quantity);
        self
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.set_unit_price(unit_price);
        self
    }

    pub fn details(&self) -> ItemDetails {
        ItemDetails {
            item_code: self.code.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price: self.total_price,
        }
    }
}

impl Snapshot for Item {
    type Details = ItemDetails;

    fn snapshot(&self) -> Self::Details {
        self.details()
    }
}

/// Snapshot of an [`Item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    #[serde(rename = "Item Code")]
    pub item_code: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Unit Price (AED)")]
    pub unit_price: f64,
    #[serde(rename = "Total Price (AED)")]
    pub total_price: f64,
}

impl ValueObject for ItemDetails {}

impl core::fmt::Display for ItemDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Item Code: {}", self.item_code)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Quantity: {}", self.quantity)?;
        writeln!(f, "Unit Price (AED): {:.2}", self.unit_price)?;
        write!(f, "Total Price (AED): {:.2}", self.total_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_lock() -> Item {
        Item::new("ITM004", "Camera Lock", 3.0, 15.00)
    }

    #[test]
    fn new_computes_total_price() {
        let item = camera_lock();
        assert_eq!(item.total_price(), 45.00);
        assert_eq!(item.calculate_total(), 45.00);
    }

    #[test]
    fn set_quantity_recomputes_total() {
        let mut item = camera_lock();
        item.set_quantity(5.0);

        assert_eq!(item.quantity(), 5.0);
        assert_eq!(item.total_price(), 75.00);
    }

    #[test]
    fn set_unit_price_recomputes_total() {
        let mut item = camera_lock();
        item.set_unit_price(12.50);

        assert_eq!(item.unit_price(), 12.50);
        assert_eq!(item.total_price(), 37.50);
    }

    #[test]
    fn code_and_description_setters_leave_total_alone() {
        let mut item = camera_lock();
        item.set_code("ITM104");
        item.set_description("Camera Lock (black)");

        assert_eq!(item.code(), "ITM104");
        assert_eq!(item.description(), "Camera Lock (black)");
        assert_eq!(item.total_price(), 45.00);
    }

    #[test]
    fn negative_and_zero_values_are_accepted() {
        let refund = Item::new("RET001", "Returned cable", -2.0, 9.99);
        assert_eq!(refund.total_price(), -2.0 * 9.99);

        let free = camera_lock().with_unit_price(0.0);
        assert_eq!(free.total_price(), 0.0);
    }

    #[test]
    fn with_constructors_keep_total_in_sync() {
        let item = camera_lock().with_quantity(2.0).with_unit_price(20.0);

        assert_eq!(item.code(), "ITM004");
        assert_eq!(item.total_price(), 40.0);
    }

    #[test]
    fn details_uses_fixed_keys() {
        let value = serde_json::to_value(camera_lock().details()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "Item Code": "ITM004",
                "Description": "Camera Lock",
                "Quantity": 3.0,
                "Unit Price (AED)": 15.0,
                "Total Price (AED)": 45.0,
            })
        );
    }

    #[test]
    fn details_reflect_latest_mutation() {
        let mut item = camera_lock();
        item.set_quantity(1.0);

        let details = item.snapshot();
        assert_eq!(details.quantity, 1.0);
        assert_eq!(details.total_price, 15.0);
    }

    #[test]
    fn display_formats_money_with_two_decimals() {
        let text = camera_lock().details().to_string();

        assert_eq!(
            text,
            "Item Code: ITM004\n\
             Description: Camera Lock\n\
             Quantity: 3\n\
             Unit Price (AED): 15.00\n\
             Total Price (AED): 45.00"
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: the stored total always equals quantity × unit price,
            /// whatever sequence of mutations was applied.
            #[test]
            fn total_tracks_quantity_and_price(
                quantity in -1_000.0f64..1_000.0,
                unit_price in -10_000.0f64..10_000.0,
                updates in prop::collection::vec((any::<bool>(), -1_000.0f64..1_000.0), 0..8)
            ) {
                let mut item = Item::new("P", "prop", quantity, unit_price);
                prop_assert_eq!(item.total_price(), quantity * unit_price);

                for (is_quantity, value) in updates {
                    if is_quantity {
                        item.set_quantity(value);
                    } else {
                        item.set_unit_price(value);
                    }
                    prop_assert_eq!(item.total_price(), item.quantity() * item.unit_price());
                }
            }
        }
    }
}
