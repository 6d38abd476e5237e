//! A configured entry point to the record operations.
//!
//! [`Store`] binds the collection file paths, the optional validation rules
//! and the logger together. It does not own any collection: every method
//! takes the caller's current collection and, where it changes, returns the
//! new one.
//!
//! # Examples
//!
//! ```
//! use hotelres::{Customer, Hotel, Reservation, Store, StorePaths};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Store::new(StorePaths::in_dir(dir.path()));
//!
//! let hotels = store.create(store.load::<Hotel>(), Hotel::new("H1", "Grand Hotel", "New York", 10)).unwrap();
//! let customers = store.create(store.load::<Customer>(), Customer::new("C1", "Alice", "alice@example.com")).unwrap();
//! let reservations = store
//!     .create_reservation(store.load(), Reservation::new("R1", "C1", "H1"), &customers, &hotels)
//!     .unwrap();
//!
//! let mut hotels = store.load::<Hotel>();
//! let reservations = store.cancel_reservation("R1", reservations, &mut hotels).unwrap();
//! assert!(reservations.is_empty());
//! assert_eq!(hotels[0].rooms_available, 11);
//! ```

use crate::collection;
use crate::config::Config;
use crate::customer::Customer;
use crate::error::{Error, Result};
use crate::hotel::{Hotel, HotelChanges};
use crate::logging::Logger;
use crate::persistence::{self, LoadReport, StorePaths};
use crate::record::{Record, RecordKind};
use crate::reservation::{self, Reservation};

/// Optional validation rules. The default is fully permissive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject hotels with a negative `rooms_available` on create and modify.
    pub enforce_room_invariant: bool,
    /// Require a reservation's customer and hotel to exist on create.
    pub check_references: bool,
    /// Reject creating a record whose id is already in the collection.
    pub reject_duplicate_ids: bool,
}

impl ValidationPolicy {
    /// A policy with every rule switched on.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            enforce_room_invariant: true,
            check_references: true,
            reject_duplicate_ids: true,
        }
    }
}

/// Record operations bound to a set of collection files.
#[derive(Debug, Clone)]
pub struct Store {
    paths: StorePaths,
    policy: ValidationPolicy,
    logger: Logger,
}

impl Store {
    /// Creates a permissive store over `paths` with the default logger.
    #[must_use]
    pub fn new(paths: StorePaths) -> Self {
        Self {
            paths,
            policy: ValidationPolicy::default(),
            logger: Logger::default(),
        }
    }

    /// Creates a store from resolved configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::config::ConfigBuilder;
    /// use hotelres::Store;
    ///
    /// let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    /// let store = Store::from_config(&config);
    /// assert_eq!(store.paths().hotels.to_str(), Some("hotels.json"));
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            paths: config.store_paths(),
            policy: config.validation_policy(),
            logger: config.logger(),
        }
    }

    /// Replaces the validation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the logger.
    #[must_use]
    pub const fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The collection files this store reads and writes.
    #[must_use]
    pub const fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// The active validation rules.
    #[must_use]
    pub const fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Loads a collection, degrading to empty on a missing or corrupt file.
    #[must_use]
    pub fn load<R: Record>(&self) -> Vec<R> {
        persistence::load(self.paths.path_for(R::KIND), &self.logger)
    }

    /// Loads a collection and reports how it went.
    ///
    /// Corrupt files are also reported on the logger.
    #[must_use]
    pub fn load_report<R: Record>(&self) -> LoadReport<R> {
        let report = persistence::load_report(self.paths.path_for(R::KIND));
        report.report(&self.logger);
        report
    }

    /// Saves a collection to its file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<R: Record>(&self, records: &[R]) -> Result<()> {
        persistence::save(records, self.paths.path_for(R::KIND))
    }

    /// Finds a record by id.
    #[must_use]
    pub fn find<'a, R: Record>(&self, id: &str, records: &'a [R]) -> Option<&'a R> {
        collection::find_by_id(id, records)
    }

    /// Appends `record` to `records`, saves, and returns the new collection.
    ///
    /// Hotels are checked against the room invariant when it is enforced.
    /// With reference checking on, a reservation's customer and hotel must be
    /// present in the saved collections.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an enabled rule rejects the record, or an
    /// I/O error if the collection cannot be saved. Nothing is saved when
    /// validation fails.
    pub fn create<R: Creatable>(&self, records: Vec<R>, record: R) -> Result<Vec<R>> {
        record.validate(self)?;
        self.insert(records, record)
    }

    /// Appends a reservation, checking its references against the given
    /// collections instead of the saved ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingReference`] if reference checking is on and
    /// the customer or hotel is missing, plus any error from [`Store::create`].
    pub fn create_reservation(
        &self,
        reservations: Vec<Reservation>,
        reservation: Reservation,
        customers: &[Customer],
        hotels: &[Hotel],
    ) -> Result<Vec<Reservation>> {
        if self.policy.check_references {
            check_references(&reservation, customers, hotels)?;
        }
        self.insert(reservations, reservation)
    }

    fn insert<R: Record>(&self, mut records: Vec<R>, record: R) -> Result<Vec<R>> {
        if self.policy.reject_duplicate_ids && collection::contains_id(record.id(), &records) {
            return Err(Error::DuplicateId {
                kind: R::KIND,
                id: record.id().to_string(),
            });
        }

        log::debug!("creating {} '{}'", R::KIND, record.id());
        records.push(record);
        self.save(&records)?;
        Ok(records)
    }

    /// Deletes every record with identity `id` and saves the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved.
    pub fn delete<R: Record>(&self, id: &str, records: Vec<R>) -> Result<Vec<R>> {
        collection::delete_by_id(id, records, self.paths.path_for(R::KIND))
    }

    /// Applies `changes` to `hotel` in place.
    ///
    /// The change is not saved; call [`Store::save`] with the collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomInvariant`] if the room invariant is enforced and
    /// the new room count is negative. The hotel is left untouched then.
    pub fn modify_hotel(&self, hotel: &mut Hotel, changes: HotelChanges) -> Result<()> {
        if self.policy.enforce_room_invariant {
            if let Some(rooms) = changes.rooms_available {
                if rooms < 0 {
                    return Err(Error::RoomInvariant {
                        hotel_id: hotel.hotel_id.clone(),
                        rooms_available: rooms,
                    });
                }
            }
        }

        hotel.modify(changes);
        Ok(())
    }

    /// Cancels a reservation, giving its room back and saving both files.
    ///
    /// See [`reservation::cancel_reservation`].
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be written.
    pub fn cancel_reservation(
        &self,
        reservation_id: &str,
        reservations: Vec<Reservation>,
        hotels: &mut [Hotel],
    ) -> Result<Vec<Reservation>> {
        reservation::cancel_reservation(reservation_id, reservations, hotels, &self.paths)
    }
}

/// Records that can be added through [`Store::create`].
pub trait Creatable: Record {
    /// Checks the record against the rules enabled on `store`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an enabled rule rejects the record.
    fn validate(&self, _store: &Store) -> Result<()> {
        Ok(())
    }
}

impl Creatable for Hotel {
    fn validate(&self, store: &Store) -> Result<()> {
        if store.policy.enforce_room_invariant {
            self.check_rooms()?;
        }
        Ok(())
    }
}

impl Creatable for Customer {}

impl Creatable for Reservation {
    fn validate(&self, store: &Store) -> Result<()> {
        if store.policy.check_references {
            check_references(self, &store.load::<Customer>(), &store.load::<Hotel>())?;
        }
        Ok(())
    }
}

fn check_references(
    reservation: &Reservation,
    customers: &[Customer],
    hotels: &[Hotel],
) -> Result<()> {
    if !collection::contains_id(&reservation.customer_id, customers) {
        return Err(Error::DanglingReference {
            kind: RecordKind::Customer,
            id: reservation.customer_id.clone(),
        });
    }
    if !collection::contains_id(&reservation.hotel_id, hotels) {
        return Err(Error::DanglingReference {
            kind: RecordKind::Hotel,
            id: reservation.hotel_id.clone(),
        });
    }
    Ok(())
}
