//! Snapshot trait: a record that can report its current fields.

use serde::Serialize;

use crate::value_object::ValueObject;

/// A record that exposes a fixed-shape details snapshot.
///
/// Snapshots are computed fresh on every call from the record's current
/// state; nothing is cached. The associated `Details` type fixes the set and
/// order of keys: its `Serialize` impl is the machine-readable form and its
/// `Display` impl is the human-readable `Key: value` form.
pub trait Snapshot {
    /// Fixed-shape details value produced by this record.
    type Details: ValueObject + Serialize + core::fmt::Display;

    /// Take a snapshot of the record's current fields.
    fn snapshot(&self) -> Self::Details;
}
