//! Configuration schema definitions.
//!
//! This module defines the configuration structure for hotelres: where the
//! collection files live, which optional validation rules are active, and how
//! verbose the logger is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::{init_logger, LogLevel, Logger};
use crate::persistence::StorePaths;
use crate::record::RecordKind;
use crate::store::ValidationPolicy;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can be
/// layered; unset fields fall back to built-in defaults when resolved.
///
/// # Examples
///
/// ```
/// use hotelres::config::{Config, FilesConfig};
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: Some(PathBuf::from("/srv/hotel")),
///     files: Some(FilesConfig {
///         hotels: Some("inventory.json".to_string()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let paths = config.store_paths();
/// assert_eq!(paths.hotels, PathBuf::from("/srv/hotel/inventory.json"));
/// assert_eq!(paths.customers, PathBuf::from("/srv/hotel/customers.json"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory the collection files are resolved against.
    pub data_dir: Option<PathBuf>,

    /// Collection file names.
    pub files: Option<FilesConfig>,

    /// Optional validation rules.
    pub validation: Option<ValidationConfig>,

    /// Logger verbosity.
    pub log_mode: Option<LogLevel>,
}

/// File names for each collection, relative to `data_dir`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Hotel collection file (default `hotels.json`).
    pub hotels: Option<String>,
    /// Customer collection file (default `customers.json`).
    pub customers: Option<String>,
    /// Reservation collection file (default `reservations.json`).
    pub reservations: Option<String>,
}

impl FilesConfig {
    /// Returns the configured file name for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: RecordKind) -> Option<&str> {
        match kind {
            RecordKind::Hotel => self.hotels.as_deref(),
            RecordKind::Customer => self.customers.as_deref(),
            RecordKind::Reservation => self.reservations.as_deref(),
        }
    }
}

/// Optional validation rules. All rules are off unless set to `true`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Reject hotels with a negative `rooms_available` on create and modify.
    pub enforce_room_invariant: Option<bool>,
    /// Require a reservation's customer and hotel to exist on create.
    pub check_references: Option<bool>,
    /// Reject creating a record whose id is already in the collection.
    pub reject_duplicate_ids: Option<bool>,
}

impl Config {
    /// Resolves the path of every collection file.
    #[must_use]
    pub fn store_paths(&self) -> StorePaths {
        let dir = self.data_dir.as_deref().unwrap_or_else(|| Path::new(""));
        let file = |kind: RecordKind| {
            let name = self
                .files
                .as_ref()
                .and_then(|files| files.get(kind))
                .unwrap_or_else(|| kind.default_file_name());
            dir.join(name)
        };

        StorePaths {
            hotels: file(RecordKind::Hotel),
            customers: file(RecordKind::Customer),
            reservations: file(RecordKind::Reservation),
        }
    }

    /// Resolves the validation rules, defaulting every unset rule to off.
    #[must_use]
    pub fn validation_policy(&self) -> ValidationPolicy {
        let validation = self.validation.clone().unwrap_or_default();
        ValidationPolicy {
            enforce_room_invariant: validation.enforce_room_invariant.unwrap_or(false),
            check_references: validation.check_references.unwrap_or(false),
            reject_duplicate_ids: validation.reject_duplicate_ids.unwrap_or(false),
        }
    }

    /// Builds the logger, falling back to [`init_logger`] when `log_mode` is unset.
    #[must_use]
    pub fn logger(&self) -> Logger {
        self.log_mode
            .map_or_else(|| init_logger(false, false), Logger::new)
    }
}
