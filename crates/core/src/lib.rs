//! `dnote-core` — shared building blocks for the delivery-note domain crates.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting policy).

pub mod snapshot;
pub mod value_object;

pub use snapshot::Snapshot;
pub use value_object::ValueObject;
