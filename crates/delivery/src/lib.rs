//! Delivery domain module (shipment metadata).
//!
//! Dates, dimensions and weights are kept as the free text they were entered
//! as; nothing here parses or validates them.

pub mod delivery;

pub use delivery::{Delivery, DeliveryDetails};
