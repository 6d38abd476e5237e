#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotelres
//!
//! A library for managing hotels, customers and reservations stored as JSON
//! files.
//!
//! Each collection is a plain `Vec` owned by the caller, loaded wholesale
//! from its file and rewritten wholesale on change. Operations take the
//! current collection and hand back the new one.
//!
//! ## Core Types
//!
//! - [`Hotel`], [`Customer`] and [`Reservation`]: the records
//! - [`Record`] and [`RecordKind`]: the contract shared by all records
//! - [`persistence`]: save/load of whole collections
//! - [`collection`]: lookup and deletion by id
//! - [`Store`]: the operations bound to configured paths and rules
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hotelres::{collection, persistence, Hotel, HotelChanges, Logger};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("hotels.json");
//!
//! let mut hotels = vec![
//!     Hotel::new("H1", "Grand Hotel", "New York", 10),
//!     Hotel::new("H2", "Sea View", "Lisbon", 4),
//! ];
//!
//! if let Some(hotel) = collection::find_by_id_mut("H2", &mut hotels) {
//!     hotel.modify(HotelChanges::new().rooms_available(3));
//! }
//! persistence::save(&hotels, &path).unwrap();
//!
//! let hotels: Vec<Hotel> = persistence::load(&path, &Logger::default());
//! let hotels = collection::delete_by_id("H1", hotels, &path).unwrap();
//! assert_eq!(hotels, vec![Hotel::new("H2", "Sea View", "Lisbon", 3)]);
//! ```

pub mod collection;
pub mod config;
pub mod customer;
pub mod error;
pub mod hotel;
pub mod logging;
pub mod persistence;
pub mod record;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use customer::Customer;
pub use error::{Error, Result};
pub use hotel::{Hotel, HotelChanges};
pub use logging::{init_logger, LogLevel, Logger};
pub use persistence::{LoadReport, LoadStatus, StorePaths};
pub use record::{Record, RecordKind};
pub use reservation::Reservation;
pub use store::{Creatable, Store, ValidationPolicy};
