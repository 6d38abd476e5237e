//! Customer records.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordKind};

/// A customer who can hold reservations.
///
/// # Examples
///
/// ```
/// use hotelres::{Customer, Record};
///
/// let customer = Customer::new("C1", "Alice", "alice@example.com");
/// assert_eq!(customer.id(), "C1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Customer {
    /// Unique identity within a customer collection.
    pub customer_id: String,
    /// Full name.
    pub name: String,
    /// Contact address. Not checked for format.
    pub email: String,
}

impl Customer {
    /// Creates a customer from its fields without validating them.
    #[must_use]
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for Customer {
    const KIND: RecordKind = RecordKind::Customer;

    fn id(&self) -> &str {
        &self.customer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_mapping() {
        let mapping = Customer::new("C1", "Alice", "alice@example.com")
            .to_mapping()
            .unwrap();
        assert_eq!(
            serde_json::Value::Object(mapping),
            json!({"customer_id": "C1", "name": "Alice", "email": "alice@example.com"})
        );
    }

    #[test]
    fn test_from_mapping() {
        let customer = Customer::from_mapping(json!({
            "customer_id": "C2",
            "name": "Bob",
            "email": "not-an-email"
        }))
        .unwrap();
        assert_eq!(customer, Customer::new("C2", "Bob", "not-an-email"));
    }

    #[test]
    fn test_from_mapping_missing_email() {
        let err = Customer::from_mapping(json!({"customer_id": "C2", "name": "Bob"})).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_from_mapping_null_field() {
        let result = Customer::from_mapping(json!({
            "customer_id": "C2",
            "name": null,
            "email": "bob@example.com"
        }));
        assert!(result.is_err());
    }
}
