//! Integration tests for lookup, deletion, hotel updates and cancellation.
//!
//! These drive the operations the way a caller would: load a collection,
//! operate on it, and keep the returned collection as the new state.

mod common;

use common::{sample_customers, sample_hotels, sample_reservations, HotelFixture, TestStore};
use hotelres::{
    collection, Customer, Error, Hotel, HotelChanges, Record, RecordKind, Reservation,
    ValidationPolicy,
};

#[test]
fn test_cancel_reservation_scenario() {
    let test = TestStore::new();
    let store = &test.store;

    let mut hotels = vec![HotelFixture::new().build()];
    let reservations = vec![Reservation::new("R1", "C1", "H1")];

    let reservations = store
        .cancel_reservation("R1", reservations, &mut hotels)
        .unwrap();

    assert!(reservations.is_empty());
    assert_eq!(hotels[0].rooms_available, 11);
    assert!(store.load::<Reservation>().is_empty());
    assert_eq!(store.load::<Hotel>(), hotels);
}

#[test]
fn test_cancel_unknown_reservation_changes_nothing() {
    let test = TestStore::new();
    let mut hotels = vec![HotelFixture::new().build()];
    let reservations = vec![Reservation::new("R1", "C1", "H1")];

    let reservations = test
        .store
        .cancel_reservation("R99", reservations, &mut hotels)
        .unwrap();

    assert_eq!(reservations.len(), 1);
    assert_eq!(hotels[0].rooms_available, 10);
    assert!(!test.paths().hotels.exists());
    assert!(!test.paths().reservations.exists());
}

#[test]
fn test_cancel_against_empty_reservations() {
    let test = TestStore::new();
    let mut hotels = sample_hotels();

    let reservations = test
        .store
        .cancel_reservation("R1", Vec::new(), &mut hotels)
        .unwrap();

    assert!(reservations.is_empty());
    assert_eq!(hotels, sample_hotels());
}

#[test]
fn test_cancel_with_missing_hotel_keeps_reservation() {
    let test = TestStore::new();
    test.store.save(&sample_reservations()).unwrap();

    let mut hotels = vec![HotelFixture::new().build()];
    let reservations = test.store.load::<Reservation>();

    let reservations = test
        .store
        .cancel_reservation("R2", reservations, &mut hotels)
        .unwrap();

    assert_eq!(reservations, sample_reservations());
    assert_eq!(test.store.load::<Reservation>(), sample_reservations());
    assert_eq!(hotels[0].rooms_available, 10);
}

#[test]
fn test_find_by_id() {
    let customers = sample_customers();
    let found = collection::find_by_id("C2", &customers).unwrap();
    assert_eq!(found, &Customer::new("C2", "Bob", "bob@example.com"));
    assert!(collection::find_by_id("C4", &customers).is_none());
}

#[test]
fn test_delete_then_reload() {
    let test = TestStore::new();
    test.store.save(&sample_reservations()).unwrap();

    let reservations = test.store.load::<Reservation>();
    let reservations = test.store.delete("R2", reservations).unwrap();

    let ids: Vec<&str> = reservations.iter().map(Record::id).collect();
    assert_eq!(ids, ["R1", "R3"]);
    assert_eq!(test.store.load::<Reservation>(), reservations);
}

#[test]
fn test_delete_absent_id_leaves_collection_unchanged() {
    let test = TestStore::new();
    let hotels = test.store.delete("H9", sample_hotels()).unwrap();
    assert_eq!(hotels, sample_hotels());
    assert_eq!(test.store.load::<Hotel>(), sample_hotels());
}

#[test]
fn test_modify_hotel_rooms_only() {
    let test = TestStore::new();
    let mut hotels = sample_hotels();

    let hotel = collection::find_by_id_mut("H1", &mut hotels).unwrap();
    test.store
        .modify_hotel(hotel, HotelChanges::new().rooms_available(5))
        .unwrap();
    test.store.save(&hotels).unwrap();

    let reloaded = test.store.load::<Hotel>();
    let hotel = collection::find_by_id("H1", &reloaded).unwrap();
    assert_eq!(hotel.rooms_available, 5);
    assert_eq!(hotel.name, "Grand Hotel");
    assert_eq!(hotel.location, "New York");
}

#[test]
fn test_full_booking_workflow() {
    let test = TestStore::new();
    let store = &test.store;

    let hotels = store.create(store.load(), HotelFixture::new().build()).unwrap();
    let customers = store
        .create(store.load(), Customer::new("C1", "Alice", "alice@example.com"))
        .unwrap();
    let reservations = store
        .create_reservation(
            store.load(),
            Reservation::new("R1", "C1", "H1"),
            &customers,
            &hotels,
        )
        .unwrap();
    assert_eq!(reservations.len(), 1);

    // Fresh snapshots, as a later caller would see them
    let mut hotels = store.load::<Hotel>();
    let reservations = store.load::<Reservation>();
    let reservations = store
        .cancel_reservation("R1", reservations, &mut hotels)
        .unwrap();

    assert!(reservations.is_empty());
    assert_eq!(store.load::<Hotel>()[0].rooms_available, 11);
    assert_eq!(store.load::<Customer>(), customers);
}

#[test]
fn test_strict_store_rejects_dangling_reservation_through_create() {
    let test = TestStore::with_policy(ValidationPolicy::strict());
    let store = &test.store;
    store.save(&sample_customers()).unwrap();
    store.save(&sample_hotels()).unwrap();

    let err = store
        .create(store.load(), Reservation::new("R1", "C1", "H9"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DanglingReference { kind: RecordKind::Hotel, ref id } if id == "H9"
    ));
    assert!(!test.paths().reservations.exists());

    let reservations = store
        .create(store.load(), Reservation::new("R1", "C1", "H2"))
        .unwrap();
    assert_eq!(store.load::<Reservation>(), reservations);
}
