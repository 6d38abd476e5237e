//! Reservation records and cancellation.
//!
//! A reservation links a customer to a hotel by id. Cancelling a reservation
//! is the only operation that touches two collections: it gives a room back
//! to the referenced hotel and drops the reservation, then saves both files.

use serde::{Deserialize, Serialize};

use crate::collection;
use crate::error::Result;
use crate::hotel::Hotel;
use crate::persistence::{self, StorePaths};
use crate::record::{Record, RecordKind};

/// A booking of a hotel by a customer.
///
/// The referenced customer and hotel are not required to exist.
///
/// # Examples
///
/// ```
/// use hotelres::Reservation;
///
/// let reservation = Reservation::new("R1", "C1", "H1");
/// assert_eq!(reservation.hotel_id, "H1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reservation {
    /// Unique identity within a reservation collection.
    pub reservation_id: String,
    /// The customer holding the reservation.
    pub customer_id: String,
    /// The hotel being booked.
    pub hotel_id: String,
}

impl Reservation {
    /// Creates a reservation from its fields without validating them.
    #[must_use]
    pub fn new(
        reservation_id: impl Into<String>,
        customer_id: impl Into<String>,
        hotel_id: impl Into<String>,
    ) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            customer_id: customer_id.into(),
            hotel_id: hotel_id.into(),
        }
    }
}

impl Record for Reservation {
    const KIND: RecordKind = RecordKind::Reservation;

    fn id(&self) -> &str {
        &self.reservation_id
    }
}

/// Cancels reservation `reservation_id`, giving its room back to the hotel.
///
/// If the reservation is unknown, or the hotel it references is not in
/// `hotels`, nothing changes and nothing is saved: `reservations` is returned
/// as is. Otherwise the hotel's `rooms_available` goes up by one, the
/// reservation is dropped, `hotels` is saved to `paths.hotels` and the
/// remaining reservations to `paths.reservations`.
///
/// # Errors
///
/// Returns an error if either file cannot be written. The in-memory hotel
/// has already been updated at that point.
///
/// # Examples
///
/// ```
/// use hotelres::reservation::cancel_reservation;
/// use hotelres::{Hotel, Reservation, StorePaths};
///
/// let dir = tempfile::tempdir().unwrap();
/// let paths = StorePaths::in_dir(dir.path());
///
/// let mut hotels = vec![Hotel::new("H1", "Grand Hotel", "New York", 10)];
/// let reservations = vec![Reservation::new("R1", "C1", "H1")];
///
/// let reservations = cancel_reservation("R1", reservations, &mut hotels, &paths).unwrap();
/// assert!(reservations.is_empty());
/// assert_eq!(hotels[0].rooms_available, 11);
/// ```
pub fn cancel_reservation(
    reservation_id: &str,
    reservations: Vec<Reservation>,
    hotels: &mut [Hotel],
    paths: &StorePaths,
) -> Result<Vec<Reservation>> {
    let Some(reservation) = collection::find_by_id(reservation_id, &reservations) else {
        log::debug!("cancel: reservation '{reservation_id}' not found");
        return Ok(reservations);
    };

    let Some(hotel) = collection::find_by_id_mut(&reservation.hotel_id, hotels) else {
        log::debug!(
            "cancel: hotel '{}' for reservation '{reservation_id}' not found",
            reservation.hotel_id
        );
        return Ok(reservations);
    };

    hotel.release_room();
    let remaining = collection::without_id(reservation_id, reservations);

    persistence::save(&*hotels, &paths.hotels)?;
    persistence::save(&remaining, &paths.reservations)?;
    Ok(remaining)
}
