//! Invoicing domain module (line items and invoice totals).
//!
//! This crate contains the billing arithmetic of a delivery note: line totals
//! (`quantity × unit_price`) and invoice aggregates (subtotal plus taxes and
//! fees), implemented purely as in-memory domain logic (no IO, no validation,
//! no currency rounding).

pub mod invoice;
pub mod item;

pub use invoice::{Invoice, InvoiceDetails};
pub use item::{Item, ItemDetails};
