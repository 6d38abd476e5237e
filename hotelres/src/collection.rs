//! Lookup and deletion over record collections.
//!
//! Collections are plain vectors owned by the caller. Lookups scan in order
//! and return the first match; deletion returns a new vector and persists it.

use std::path::Path;

use crate::error::Result;
use crate::persistence;
use crate::record::Record;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// Returns the first record whose identity equals `id`.
///
/// # Examples
///
/// ```
/// use hotelres::{collection, Customer};
///
/// let customers = vec![
///     Customer::new("C1", "Alice", "alice@example.com"),
///     Customer::new("C2", "Bob", "bob@example.com"),
/// ];
/// assert_eq!(collection::find_by_id("C2", &customers).unwrap().name, "Bob");
/// assert!(collection::find_by_id("C9", &customers).is_none());
/// ```
#[must_use]
pub fn find_by_id<'a, R: Record>(id: &str, records: &'a [R]) -> Option<&'a R> {
    records.iter().find(|record| record.id() == id)
}

/// Mutable variant of [`find_by_id`].
#[must_use]
pub fn find_by_id_mut<'a, R: Record>(id: &str, records: &'a mut [R]) -> Option<&'a mut R> {
    records.iter_mut().find(|record| record.id() == id)
}

/// Returns true if any record has the identity `id`.
#[must_use]
pub fn contains_id<R: Record>(id: &str, records: &[R]) -> bool {
    find_by_id(id, records).is_some()
}

/// Removes every record with identity `id` without touching the disk.
#[must_use]
pub fn without_id<R: Record>(id: &str, records: Vec<R>) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| record.id() != id)
        .collect()
}

/// Removes every record with identity `id`, saves the rest to `path`, and
/// returns them.
///
/// The relative order of the remaining records is preserved. When nothing
/// matches, the unchanged collection is still saved.
///
/// # Errors
///
/// Returns an error if the collection cannot be written to `path`.
///
/// # Examples
///
/// ```
/// use hotelres::{collection, Hotel};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("hotels.json");
/// let hotels = vec![
///     Hotel::new("H1", "Grand Hotel", "New York", 10),
///     Hotel::new("H2", "Sea View", "Lisbon", 4),
/// ];
///
/// let hotels = collection::delete_by_id("H1", hotels, &path).unwrap();
/// assert_eq!(hotels.len(), 1);
/// assert_eq!(hotels[0].hotel_id, "H2");
/// ```
pub fn delete_by_id<R: Record>(id: &str, records: Vec<R>, path: impl AsRef<Path>) -> Result<Vec<R>> {
    let before = records.len();
    let remaining = without_id(id, records);
    log::debug!(
        "deleting {} '{id}' removed {} record(s)",
        R::KIND,
        before - remaining.len()
    );

    persistence::save(&remaining, path)?;
    Ok(remaining)
}
