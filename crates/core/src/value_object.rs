//! Value object trait: equality by value, not identity.
//!
//! Details snapshots are value objects: a frozen copy of a record's fields at
//! the moment the snapshot was taken. Two snapshots with the same values are
//! equal, regardless of which record produced them.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// take a new snapshot from the (mutated) record it came from.
///
/// The trait requires:
/// - **Clone**: snapshots are handed to renderers and tests by value
/// - **PartialEq**: snapshots are compared by their attribute values
/// - **Debug**: snapshots show up in logs and assertion failures
///
/// `Eq` is deliberately not required: monetary snapshots carry `f64` values.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct CustomerDetails {
///     name: String,
///     contact: String,
///     address: String,
/// }
///
/// impl ValueObject for CustomerDetails {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
