//! Parties domain module (delivery recipients).
//!
//! This crate holds the customer record a delivery note is addressed to,
//! implemented purely as in-memory domain data (no IO, no validation).

pub mod customer;

pub use customer::{Customer, CustomerDetails};
