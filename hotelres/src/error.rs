//! Error types for the hotelres library.
//!
//! This module provides the error hierarchy for all record, persistence and
//! configuration operations, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordKind;

/// Result type alias for operations that may fail with a hotelres error.
///
/// # Examples
///
/// ```
/// use hotelres::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotelres library.
///
/// Absence of a record is never an error: lookups return `None` and
/// deletions or cancellations return the collection unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while reading or writing a data file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A mapping could not be turned into a record.
    #[error("malformed {kind} record: {reason}")]
    MalformedRecord {
        /// The kind of record being decoded.
        kind: RecordKind,
        /// What was wrong with the input.
        reason: String,
    },

    /// A collection file does not hold a list of records.
    #[error("malformed {} file: {reason}", kind.plural())]
    MalformedCollection {
        /// The kind of record the file should contain.
        kind: RecordKind,
        /// What was wrong with the document.
        reason: String,
    },

    /// A record with the same identity already exists in the collection.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId {
        /// The kind of record.
        kind: RecordKind,
        /// The duplicated identity value.
        id: String,
    },

    /// A reservation points at a record that does not exist.
    #[error("reservation references unknown {kind} '{id}'")]
    DanglingReference {
        /// The kind of the missing record.
        kind: RecordKind,
        /// The identity that could not be resolved.
        id: String,
    },

    /// A hotel would end up with a negative room count.
    #[error("hotel '{hotel_id}' cannot have {rooms_available} rooms available")]
    RoomInvariant {
        /// The offending hotel.
        hotel_id: String,
        /// The rejected room count.
        rooms_available: i64,
    },
}

impl Error {
    /// Check if error came from decoding a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::{Error, RecordKind};
    ///
    /// let err = Error::MalformedRecord {
    ///     kind: RecordKind::Hotel,
    ///     reason: "missing field `name`".to_string(),
    /// };
    /// assert!(err.is_malformed());
    /// ```
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::MalformedCollection { .. } | Self::Json(_)
        )
    }

    /// Check if error was raised by an optional validation rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::Error;
    ///
    /// let err = Error::RoomInvariant { hotel_id: "H1".to_string(), rooms_available: -1 };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::DuplicateId { .. }
                | Self::DanglingReference { .. }
                | Self::RoomInvariant { .. }
        )
    }

    /// Check if error came from reading or parsing a configuration file.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::InvalidPath { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "files.hotels".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("files.hotels"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_malformed_record_error() {
        let err = Error::MalformedRecord {
            kind: RecordKind::Customer,
            reason: "missing field `email`".to_string(),
        };
        let display = format!("{err}");
        assert_eq!(display, "malformed customer record: missing field `email`");
        assert!(err.is_malformed());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_malformed_collection_error() {
        let err = Error::MalformedCollection {
            kind: RecordKind::Reservation,
            reason: "expected a list, found an object".to_string(),
        };
        let display = format!("{err}");
        assert!(display.starts_with("malformed reservations file"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_duplicate_id_error() {
        let err = Error::DuplicateId {
            kind: RecordKind::Hotel,
            id: "H1".to_string(),
        };
        assert_eq!(format!("{err}"), "duplicate hotel id 'H1'");
        assert!(err.is_validation());
    }

    #[test]
    fn test_dangling_reference_error() {
        let err = Error::DanglingReference {
            kind: RecordKind::Customer,
            id: "C9".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("unknown customer"));
        assert!(display.contains("C9"));
    }

    #[test]
    fn test_room_invariant_error() {
        let err = Error::RoomInvariant {
            hotel_id: "H1".to_string(),
            rooms_available: -3,
        };
        let display = format!("{err}");
        assert!(display.contains("H1"));
        assert!(display.contains("-3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: Error = json_err.into();
        assert!(format!("{err}").starts_with("JSON error"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<crate::config::Config>("data_dir: [").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").starts_with("configuration error"));
        assert!(err.is_configuration());
        assert!(!err.is_validation());
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u16> {
            Err(Error::Validation {
                field: "test".to_string(),
                message: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
