//! Property-based tests for saving and loading whole collections.

use super::{load_report, save, LoadStatus};
use crate::{Customer, Hotel, Reservation};
use proptest::prelude::*;
use tempfile::TempDir;

fn hotel_strategy() -> impl Strategy<Value = Hotel> {
    (".*", ".*", ".*", any::<i64>())
        .prop_map(|(id, name, location, rooms)| Hotel::new(id, name, location, rooms))
}

fn customer_strategy() -> impl Strategy<Value = Customer> {
    (".*", ".*", ".*").prop_map(|(id, name, email)| Customer::new(id, name, email))
}

fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (".*", ".*", ".*")
        .prop_map(|(id, customer_id, hotel_id)| Reservation::new(id, customer_id, hotel_id))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Any list of hotels comes back equal and in order
    #[test]
    fn hotels_round_trip(hotels in prop::collection::vec(hotel_strategy(), 0..12)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        save(&hotels, &path).unwrap();

        let report = load_report::<Hotel>(&path);
        prop_assert_eq!(report.status(), &LoadStatus::Loaded { count: hotels.len() });
        prop_assert_eq!(report.into_records(), hotels);
    }

    #[test]
    fn customers_round_trip(customers in prop::collection::vec(customer_strategy(), 0..12)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customers.json");
        save(&customers, &path).unwrap();

        prop_assert_eq!(load_report::<Customer>(&path).into_records(), customers);
    }

    #[test]
    fn reservations_round_trip(
        reservations in prop::collection::vec(reservation_strategy(), 0..12)
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservations.json");
        save(&reservations, &path).unwrap();

        prop_assert_eq!(load_report::<Reservation>(&path).into_records(), reservations);
    }
}
