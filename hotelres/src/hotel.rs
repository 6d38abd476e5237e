//! Hotel records.
//!
//! A hotel is identified by `hotel_id` and tracks how many rooms are still
//! available. Hotels are the only record type with an in-place update
//! operation, see [`Hotel::modify`].

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{Record, RecordKind};

/// A hotel with a number of available rooms.
///
/// # Examples
///
/// ```
/// use hotelres::Hotel;
///
/// let hotel = Hotel::new("H1", "Grand Hotel", "New York", 10);
/// assert_eq!(hotel.hotel_id, "H1");
/// assert_eq!(hotel.rooms_available, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hotel {
    /// Unique identity within a hotel collection.
    pub hotel_id: String,
    /// Display name.
    pub name: String,
    /// City or address.
    pub location: String,
    /// Rooms that can still be booked.
    ///
    /// Decoding also accepts a whole number written as a float, such as `10.0`.
    #[serde(deserialize_with = "whole_number")]
    pub rooms_available: i64,
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }

    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(de::Error::custom(format!(
            "expected a whole number of rooms, found {number}"
        ))),
    }
}

impl Hotel {
    /// Creates a hotel from its fields without validating them.
    #[must_use]
    pub fn new(
        hotel_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms_available: i64,
    ) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            name: name.into(),
            location: location.into(),
            rooms_available,
        }
    }

    /// Applies the fields set in `changes` to this hotel.
    ///
    /// Fields left as `None` are untouched. A `Some` value always wins,
    /// including an empty string or a room count of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::{Hotel, HotelChanges};
    ///
    /// let mut hotel = Hotel::new("H1", "Grand Hotel", "New York", 10);
    /// hotel.modify(HotelChanges::new().rooms_available(5));
    ///
    /// assert_eq!(hotel.rooms_available, 5);
    /// assert_eq!(hotel.name, "Grand Hotel");
    /// assert_eq!(hotel.location, "New York");
    /// ```
    pub fn modify(&mut self, changes: HotelChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(rooms) = changes.rooms_available {
            self.rooms_available = rooms;
        }
    }

    /// Checks that the room count is not negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomInvariant`] if `rooms_available < 0`.
    pub fn check_rooms(&self) -> Result<()> {
        if self.rooms_available < 0 {
            return Err(Error::RoomInvariant {
                hotel_id: self.hotel_id.clone(),
                rooms_available: self.rooms_available,
            });
        }
        Ok(())
    }

    /// Gives one room back, as happens when a reservation is cancelled.
    pub(crate) fn release_room(&mut self) {
        self.rooms_available = self.rooms_available.saturating_add(1);
    }
}

impl Record for Hotel {
    const KIND: RecordKind = RecordKind::Hotel;

    fn id(&self) -> &str {
        &self.hotel_id
    }
}

/// A partial update for a [`Hotel`].
///
/// # Examples
///
/// ```
/// use hotelres::HotelChanges;
///
/// let changes = HotelChanges::new().name("Grand Plaza").rooms_available(0);
/// assert_eq!(changes.name.as_deref(), Some("Grand Plaza"));
/// assert_eq!(changes.location, None);
/// assert_eq!(changes.rooms_available, Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelChanges {
    /// New display name.
    pub name: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New room count.
    pub rooms_available: Option<i64>,
}

impl HotelChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the new room count.
    #[must_use]
    pub const fn rooms_available(mut self, rooms: i64) -> Self {
        self.rooms_available = Some(rooms);
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.rooms_available.is_none()
    }
}
