use serde::Serialize;

use dnote_core::{Snapshot, ValueObject};

/// Shipment metadata printed on a delivery note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    order_number: String,
    reference_number: String,
    /// Free text, e.g. "January 25, 2025".
    delivery_date: String,
    method: String,
    /// May be empty when the package was not measured.
    dimensions: String,
    /// Free text with the unit embedded, e.g. "7 kg".
    weight: String,
}

impl Delivery {
    pub fn new(
        order_number: impl Into<String>,
        reference_number: impl Into<String>,
        delivery_date: impl Into<String>,
        method: impl Into<String>,
        dimensions: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            reference_number: reference_number.into(),
            delivery_date: delivery_date.into(),
            method: method.into(),
            dimensions: dimensions.into(),
            weight: weight.into(),
        }
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn set_order_number(&mut self, order_number: impl Into<String>) {
        self.order_number = order_number.into();
    }

    pub fn reference_number(&self) -> &str {
        &self.reference_number
    }

    pub fn set_reference_number(&mut self, reference_number: impl Into<String>) {
        self.reference_number = reference_number.into();
    }

    pub fn delivery_date(&self) -> &str {
        &self.delivery_date
    }

    pub fn set_delivery_date(&mut self, delivery_date: impl Into<String>) {
        self.delivery_date = delivery_date.into();
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }

    pub fn dimensions(&self) -> &str {
        &self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: impl Into<String>) {
        self.dimensions = dimensions.into();
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight = weight.into();
    }

    pub fn with_order_number(mut self, order_number: impl Into<String>) -> Self {
        self.set_order_number(order_number);
        self
    }

    pub fn with_reference_number(mut self, reference_number: impl Into<String>) -> Self {
        self.set_reference_number(reference_number);
        self
    }

    pub fn with_delivery_date(mut self, delivery_date: impl Into<String>) -> Self {
        self.set_delivery_date(delivery_date);
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.set_method(method);
        self
    }

    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.set_dimensions(dimensions);
        self
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.set_weight(weight);
        self
    }

    pub fn delivery_details(&self) -> DeliveryDetails {
        DeliveryDetails {
            order_number: self.order_number.clone(),
            reference_number: self.reference_number.clone(),
            delivery_date: self.delivery_date.clone(),
            delivery_method: self.method.clone(),
            package_dimensions: self.dimensions.clone(),
            total_weight: self.weight.clone(),
        }
    }
}

impl Snapshot for Delivery {
    type Details = DeliveryDetails;

    fn snapshot(&self) -> Self::Details {
        self.delivery_details()
    }
}

/// Snapshot of a [`Delivery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryDetails {
    #[serde(rename = "Order Number")]
    pub order_number: String,
    #[serde(rename = "Reference Number")]
    pub reference_number: String,
    #[serde(rename = "Delivery Date")]
    pub delivery_date: String,
    #[serde(rename = "Delivery Method")]
    pub delivery_method: String,
    #[serde(rename = "Package Dimensions")]
    pub package_dimensions: String,
    #[serde(rename = "Total Weight")]
    pub total_weight: String,
}

impl ValueObject for DeliveryDetails {}

impl core::fmt::Display for DeliveryDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Order Number: {}", self.order_number)?;
        writeln!(f, "Reference Number: {}", self.reference_number)?;
        writeln!(f, "Delivery Date: {}", self.delivery_date)?;
        writeln!(f, "Delivery Method: {}", self.delivery_method)?;
        writeln!(f, "Package Dimensions: {}", self.package_dimensions)?;
        write!(f, "Total Weight: {}", self.total_weight)
    }
}
