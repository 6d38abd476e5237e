//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the hotelres library.

use std::fs;
use std::path::PathBuf;

use hotelres::{Customer, Hotel, LogLevel, Logger, Reservation, Store, StorePaths, ValidationPolicy};
use tempfile::TempDir;

/// A store rooted in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct TestStore {
    pub dir: TempDir,
    pub store: Store,
}

#[allow(dead_code)]
impl TestStore {
    /// Creates a permissive, quiet store in a fresh temporary directory.
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }

    /// Creates a quiet store with the given validation policy.
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let store = Store::new(StorePaths::in_dir(dir.path()))
            .with_policy(policy)
            .with_logger(quiet_logger());
        Self { dir, store }
    }

    /// The collection file paths.
    pub fn paths(&self) -> &StorePaths {
        self.store.paths()
    }

    /// Writes raw text to a file inside the temporary directory.
    #[allow(dead_code)]
    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("should write fixture file");
        path
    }
}

/// A logger that prints nothing, so expected load failures stay out of test output.
pub fn quiet_logger() -> Logger {
    Logger::new(LogLevel::Quiet)
}

/// Builder for creating test hotels with sensible defaults.
///
/// Defaults: id `H1`, name `Grand Hotel`, location `New York`, 10 rooms.
#[allow(dead_code)]
pub struct HotelFixture {
    hotel_id: String,
    name: String,
    location: String,
    rooms_available: i64,
}

#[allow(dead_code)]
impl HotelFixture {
    pub fn new() -> Self {
        Self {
            hotel_id: "H1".to_string(),
            name: "Grand Hotel".to_string(),
            location: "New York".to_string(),
            rooms_available: 10,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.hotel_id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_rooms(mut self, rooms: i64) -> Self {
        self.rooms_available = rooms;
        self
    }

    pub fn build(self) -> Hotel {
        Hotel::new(self.hotel_id, self.name, self.location, self.rooms_available)
    }
}

/// Three hotels with distinct ids.
#[allow(dead_code)]
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        HotelFixture::new().build(),
        HotelFixture::new()
            .with_id("H2")
            .with_name("Sea View")
            .with_location("Lisbon")
            .with_rooms(4)
            .build(),
        HotelFixture::new()
            .with_id("H3")
            .with_name("Alpine Lodge")
            .with_location("Zermatt")
            .with_rooms(0)
            .build(),
    ]
}

/// Three customers with distinct ids.
#[allow(dead_code)]
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("C1", "Alice", "alice@example.com"),
        Customer::new("C2", "Bob", "bob@example.com"),
        Customer::new("C3", "Carol", "carol@example.com"),
    ]
}

/// Reservations referencing [`sample_customers`] and [`sample_hotels`].
#[allow(dead_code)]
pub fn sample_reservations() -> Vec<Reservation> {
    vec![
        Reservation::new("R1", "C1", "H1"),
        Reservation::new("R2", "C2", "H2"),
        Reservation::new("R3", "C1", "H2"),
    ]
}
