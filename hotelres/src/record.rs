//! The record contract shared by hotels, customers and reservations.
//!
//! Every entity has a string identity field and a fixed set of attributes.
//! The [`Record`] trait ties an entity type to its [`RecordKind`], exposes its
//! identity for lookup and deletion, and converts it to and from the JSON
//! mapping used on disk.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The three kinds of record managed by this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A hotel with a room count.
    Hotel,
    /// A customer who can hold reservations.
    Customer,
    /// A reservation linking a customer to a hotel.
    Reservation,
}

impl RecordKind {
    /// Name of the identity field in the serialized mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::RecordKind;
    ///
    /// assert_eq!(RecordKind::Hotel.id_field(), "hotel_id");
    /// assert_eq!(RecordKind::Reservation.id_field(), "reservation_id");
    /// ```
    #[must_use]
    pub const fn id_field(self) -> &'static str {
        match self {
            Self::Hotel => "hotel_id",
            Self::Customer => "customer_id",
            Self::Reservation => "reservation_id",
        }
    }

    /// Plural noun used in operator messages.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Hotel => "hotels",
            Self::Customer => "customers",
            Self::Reservation => "reservations",
        }
    }

    /// File name a collection of this kind is stored under by default.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::RecordKind;
    ///
    /// assert_eq!(RecordKind::Customer.default_file_name(), "customers.json");
    /// ```
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Hotel => "hotels.json",
            Self::Customer => "customers.json",
            Self::Reservation => "reservations.json",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hotel => write!(f, "hotel"),
            Self::Customer => write!(f, "customer"),
            Self::Reservation => write!(f, "reservation"),
        }
    }
}

/// An entity that can be stored in a JSON collection file.
///
/// Implementors derive `Serialize`/`Deserialize` with the identity field
/// declared first and `deny_unknown_fields`, so the serialized key order is
/// fixed and decoding rejects anything that is not exactly the expected shape.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug {
    /// Which kind of record this is.
    const KIND: RecordKind;

    /// The identity value used for lookup and deletion.
    fn id(&self) -> &str;

    /// Converts the record to an ordered JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not serialize to a JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::{Customer, Record};
    ///
    /// let customer = Customer::new("C1", "Alice", "alice@example.com");
    /// let mapping = customer.to_mapping().unwrap();
    /// let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
    /// assert_eq!(keys, ["customer_id", "name", "email"]);
    /// ```
    fn to_mapping(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::MalformedRecord {
                kind: Self::KIND,
                reason: format!("expected an object, serialized to {}", json_type(&other)),
            }),
        }
    }

    /// Builds a record from a JSON mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if `value` is not an object, if an
    /// expected key is missing, if a value has the wrong type, or if an
    /// unexpected key is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::{Hotel, Record};
    /// use serde_json::json;
    ///
    /// let hotel = Hotel::from_mapping(json!({
    ///     "hotel_id": "H1",
    ///     "name": "Grand Hotel",
    ///     "location": "New York",
    ///     "rooms_available": 10
    /// }))
    /// .unwrap();
    /// assert_eq!(hotel.rooms_available, 10);
    ///
    /// assert!(Hotel::from_mapping(json!({"hotel_id": "H1"})).is_err());
    /// assert!(Hotel::from_mapping(json!(["H1"])).is_err());
    /// ```
    fn from_mapping(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::MalformedRecord {
                kind: Self::KIND,
                reason: format!("expected an object, found {}", json_type(&value)),
            });
        }

        serde_json::from_value(value).map_err(|e| Error::MalformedRecord {
            kind: Self::KIND,
            reason: e.to_string(),
        })
    }
}

/// Short description of a JSON value's type for error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
