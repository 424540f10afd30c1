use serde::Serialize;

use dnote_core::{Snapshot, ValueObject};

/// Recipient of a delivery: who it is for and where it goes.
///
/// Every field accepts any string, including empty ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    contact: String,
    address: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            address: address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.contact = contact.into();
    }

    /// Delivery address.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.set_contact(contact);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.set_address(address);
        self
    }

    /// Current recipient details, keyed by their display names.
    pub fn details(&self) -> CustomerDetails {
        CustomerDetails {
            name: self.name.clone(),
            contact: self.contact.clone(),
            delivery_address: self.address.clone(),
        }
    }
}

impl Snapshot for Customer {
    type Details = CustomerDetails;

    fn snapshot(&self) -> Self::Details {
        self.details()
    }
}

/// Snapshot of a [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDetails {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Delivery Address")]
    pub delivery_address: String,
}

impl ValueObject for CustomerDetails {}

impl core::fmt::Display for CustomerDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Contact: {}", self.contact)?;
        write!(f, "Delivery Address: {}", self.delivery_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer::new(
            "Sarah Johnson",
            "sarah.johnson@example.com",
            "45 Knowledge Avenue, Dubai, UAE",
        )
    }

    #[test]
    fn details_maps_fields_to_display_keys() {
        let customer = sample_customer();

        let value = serde_json::to_value(customer.details()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Name": "Sarah Johnson",
                "Contact": "sarah.johnson@example.com",
                "Delivery Address": "45 Knowledge Avenue, Dubai, UAE",
            })
        );
    }

    #[test]
    fn details_has_exactly_three_keys() {
        let value = serde_json::to_value(sample_customer().details()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        keys.sort_unstable();
        assert_eq!(keys, vec!["Contact", "Delivery Address", "Name"]);
    }

    #[test]
    fn setters_are_visible_in_next_snapshot() {
        let mut customer = sample_customer();
        let before = customer.details();

        customer.set_name("S. Johnson");
        customer.set_contact("+971 4 000 0000");
        customer.set_address("");

        let after = customer.details();
        assert_eq!(before.name, "Sarah Johnson");
        assert_eq!(after.name, "S. Johnson");
        assert_eq!(after.contact, "+971 4 000 0000");
        assert_eq!(after.delivery_address, "");
        assert_eq!(customer.address(), "");
    }

    #[test]
    fn with_constructors_replace_single_field() {
        let customer = sample_customer().with_address("Warehouse 7, Jebel Ali");

        assert_eq!(customer.name(), "Sarah Johnson");
        assert_eq!(customer.contact(), "sarah.johnson@example.com");
        assert_eq!(customer.address(), "Warehouse 7, Jebel Ali");

        let renamed = customer.clone().with_name("Sam").with_contact("sam@example.com");
        assert_eq!(renamed.name(), "Sam");
        assert_eq!(renamed.contact(), "sam@example.com");
        assert_eq!(renamed.address(), customer.address());
    }

    #[test]
    fn display_lists_each_field_on_its_own_line() {
        let text = sample_customer().details().to_string();

        assert_eq!(
            text,
            "Name: Sarah Johnson\n\
             Contact: sarah.johnson@example.com\n\
             Delivery Address: 45 Knowledge Avenue, Dubai, UAE"
        );
    }

    #[test]
    fn snapshot_matches_details() {
        let customer = sample_customer();
        assert_eq!(customer.snapshot(), customer.details());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any string is accepted and round-trips through the snapshot.
            #[test]
            fn any_strings_are_accepted(
                name in ".*",
                contact in ".*",
                address in ".*",
            ) {
                let customer = Customer::new(name.clone(), contact.clone(), address.clone());
                let details = customer.details();

                prop_assert_eq!(details.name, name);
                prop_assert_eq!(details.contact, contact);
                prop_assert_eq!(details.delivery_address, address);
            }
        }
    }
}
