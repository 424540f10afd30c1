use serde::{Deserialize, Serialize};

use dnote_core::{Snapshot, ValueObject};

use crate::item::{Item, ItemDetails};

/// Invoice over a borrowed, ordered run of line items.
///
/// `subtotal` and `total_charges` are computed once, in [`Invoice::new`].
/// The invoice borrows its items for its whole lifetime, so no attached item
/// can be mutated while the invoice exists and the aggregates never drift
/// from the item details reported alongside them:
///
/// ```compile_fail
/// use dnote_invoicing::{Invoice, Item};
///
/// let mut items = vec![Item::new("ITM004", "Camera Lock", 3.0, 15.0)];
/// let invoice = Invoice::new(&items, 13.5);
/// items[0].set_quantity(4.0);
/// assert_eq!(invoice.subtotal(), 45.0);
/// ```
///
/// To bill changed items, drop the invoice, mutate, and build a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invoice<'a> {
    items: &'a [Item],
    taxes_and_fees: f64,
    subtotal: f64,
    total_charges: f64,
}

impl<'a> Invoice<'a> {
    pub fn new(items: &'a [Item], taxes_and_fees: f64) -> Self {
        let subtotal: f64 = items.iter().map(Item::total_price).sum();
        let total_charges = subtotal + taxes_and_fees;

        tracing::debug!(
            items = items.len(),
            subtotal,
            taxes_and_fees,
            total_charges,
            "invoice constructed"
        );

        Self {
            items,
            taxes_and_fees,
            subtotal,
            total_charges,
        }
    }

    /// Items in the order they were supplied.
    pub fn items(&self) -> &'a [Item] {
        self.items
    }

    pub fn taxes_and_fees(&self) -> f64 {
        self.taxes_and_fees
    }

    /// Sum of the items' line totals.
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// Subtotal plus taxes and fees.
    pub fn total_charges(&self) -> f64 {
        self.total_charges
    }

    pub fn invoice_details(&self) -> InvoiceDetails {
        InvoiceDetails {
            items: self.items.iter().map(Item::details).collect(),
            subtotal: self.subtotal,
            taxes_and_fees: self.taxes_and_fees,
            total_charges: self.total_charges,
        }
    }
}

impl Snapshot for Invoice<'_> {
    type Details = InvoiceDetails;

    fn snapshot(&self) -> Self::Details {
        self.invoice_details()
    }
}

/// Snapshot of an [`Invoice`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    #[serde(rename = "Items")]
    pub items: Vec<ItemDetails>,
    #[serde(rename = "Subtotal (AED)")]
    pub subtotal: f64,
    #[serde(rename = "Taxes and Fees (AED)")]
    pub taxes_and_fees: f64,
    #[serde(rename = "Total Charges (AED)")]
    pub total_charges: f64,
}

impl ValueObject for InvoiceDetails {}

impl core::fmt::Display for InvoiceDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items:")?;
        for item in &self.items {
            let block = item.to_string();
            for (i, line) in block.lines().enumerate() {
                let prefix = if i == 0 { "  - " } else { "    " };
                writeln!(f, "{prefix}{line}")?;
            }
        }
        writeln!(f, "Subtotal (AED): {:.2}", self.subtotal)?;
        writeln!(f, "Taxes and Fees (AED): {:.2}", self.taxes_and_fees)?;
        write!(f, "Total Charges (AED): {:.2}", self.total_charges)
    }
}
