//! Bulk persistence of record collections as JSON files.
//!
//! A collection is stored as a single JSON array of objects, pretty-printed
//! with 4-space indentation. Saving always rewrites the whole file. Loading is
//! all-or-nothing: either every element decodes, or the load degrades to an
//! empty collection and the problem is reported on the [`Logger`].
//!
//! # Examples
//!
//! ```
//! use hotelres::persistence::{load, save};
//! use hotelres::{Hotel, Logger};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("hotels.json");
//!
//! let hotels = vec![Hotel::new("H1", "Grand Hotel", "New York", 10)];
//! save(&hotels, &path).unwrap();
//!
//! let loaded: Vec<Hotel> = load(&path, &Logger::default());
//! assert_eq!(loaded, hotels);
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::record::{json_type, Record, RecordKind};

/// Indentation used for every collection file.
#[cfg(all(test, feature = "property-tests"))]
mod proptests;

const INDENT: &[u8] = b"    ";

/// Where each collection file lives.
///
/// Defaults to `hotels.json`, `customers.json` and `reservations.json`
/// relative to the current working directory.
///
/// # Examples
///
/// ```
/// use hotelres::{RecordKind, StorePaths};
/// use std::path::Path;
///
/// let paths = StorePaths::in_dir("/var/lib/hotelres");
/// assert_eq!(
///     paths.path_for(RecordKind::Hotel),
///     Path::new("/var/lib/hotelres/hotels.json")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// File holding the hotel collection.
    pub hotels: PathBuf,
    /// File holding the customer collection.
    pub customers: PathBuf,
    /// File holding the reservation collection.
    pub reservations: PathBuf,
}

impl StorePaths {
    /// Places the default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            hotels: dir.join(RecordKind::Hotel.default_file_name()),
            customers: dir.join(RecordKind::Customer.default_file_name()),
            reservations: dir.join(RecordKind::Reservation.default_file_name()),
        }
    }

    /// Returns the file for the given kind of record.
    #[must_use]
    pub fn path_for(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Hotel => &self.hotels,
            RecordKind::Customer => &self.customers,
            RecordKind::Reservation => &self.reservations,
        }
    }
}

impl Default for StorePaths {
    fn default() -> Self {
        Self {
            hotels: PathBuf::from(RecordKind::Hotel.default_file_name()),
            customers: PathBuf::from(RecordKind::Customer.default_file_name()),
            reservations: PathBuf::from(RecordKind::Reservation.default_file_name()),
        }
    }
}

/// How a load went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file does not exist.
    Missing,
    /// The file was decoded; `count` may be zero for an empty list.
    Loaded {
        /// Number of records decoded.
        count: usize,
    },
    /// The file exists but could not be read or decoded.
    Corrupt {
        /// Human-readable description of the problem.
        reason: String,
    },
}

/// The outcome of loading a collection file.
///
/// Callers that only need the records use [`LoadReport::into_records`], which
/// yields an empty collection for both missing and corrupt files. The
/// [`status`](LoadReport::status) tells those cases apart.
#[derive(Debug, Clone)]
pub struct LoadReport<R> {
    path: PathBuf,
    records: Vec<R>,
    status: LoadStatus,
}

impl<R: Record> LoadReport<R> {
    /// The file that was loaded.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The decoded records, empty unless the status is `Loaded`.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// How the load went.
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Returns true if the file existed but could not be decoded.
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self.status, LoadStatus::Corrupt { .. })
    }

    /// Writes a corrupt status to the logger; other statuses are debug-only.
    pub fn report(&self, logger: &Logger) {
        match &self.status {
            LoadStatus::Corrupt { reason } => logger.error(&format!(
                "failed to load {} from {}: {reason}",
                R::KIND.plural(),
                self.path.display()
            )),
            LoadStatus::Missing => logger.debug(&format!(
                "{} not found, starting with no {}",
                self.path.display(),
                R::KIND.plural()
            )),
            LoadStatus::Loaded { count } => logger.debug(&format!(
                "loaded {count} {} from {}",
                R::KIND.plural(),
                self.path.display()
            )),
        }
    }

    /// Consumes the report, keeping only the records.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

/// Writes `records` to `path` as a pretty-printed JSON array, in order.
///
/// Any existing file is overwritten. Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if a record fails to serialize or the file cannot be
/// written.
pub fn save<R: Record>(records: &[R], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mappings = records
        .iter()
        .map(Record::to_mapping)
        .collect::<Result<Vec<_>>>()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    mappings.serialize(&mut serializer)?;
    writer.flush()?;

    log::debug!(
        "saved {} {} to {}",
        records.len(),
        R::KIND.plural(),
        path.display()
    );
    Ok(())
}

/// Reads a collection file strictly.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, is not a
/// JSON array, or holds an element that does not decode as `R`.
pub fn read<R: Record>(path: impl AsRef<Path>) -> Result<Option<Vec<R>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let value: Value = serde_json::from_str(&contents)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::MalformedCollection {
                kind: R::KIND,
                reason: format!(
                    "expected a list of {}, found {}",
                    R::KIND.plural(),
                    json_type(&other)
                ),
            })
        }
    };

    items
        .into_iter()
        .map(R::from_mapping)
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Loads a collection file, recording what happened.
///
/// Never fails: problems end up in the report's [`LoadStatus`].
#[must_use]
pub fn load_report<R: Record>(path: impl AsRef<Path>) -> LoadReport<R> {
    let path = path.as_ref().to_path_buf();
    let (records, status) = match read::<R>(&path) {
        Ok(None) => (Vec::new(), LoadStatus::Missing),
        Ok(Some(records)) => {
            let count = records.len();
            (records, LoadStatus::Loaded { count })
        }
        Err(e) => (
            Vec::new(),
            LoadStatus::Corrupt {
                reason: e.to_string(),
            },
        ),
    };

    LoadReport {
        path,
        records,
        status,
    }
}

/// Loads a collection file, degrading to an empty collection.
///
/// A corrupt file is reported on `logger` and yields no records at all.
#[must_use]
pub fn load<R: Record>(path: impl AsRef<Path>, logger: &Logger) -> Vec<R> {
    let report = load_report::<R>(path);
    report.report(logger);
    report.into_records()
}
