//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `HOTELRES_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, FilesConfig, ValidationConfig};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use std::env;
use std::path::PathBuf;

/// Every environment variable consulted by [`EnvironmentConfig`].
pub const ENV_VARS: &[&str] = &[
    "HOTELRES_DATA_DIR",
    "HOTELRES_HOTELS_FILE",
    "HOTELRES_CUSTOMERS_FILE",
    "HOTELRES_RESERVATIONS_FILE",
    "HOTELRES_ENFORCE_ROOM_INVARIANT",
    "HOTELRES_CHECK_REFERENCES",
    "HOTELRES_REJECT_DUPLICATE_IDS",
    LOG_MODE_ENV,
];

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotelres::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unrecognized boolean or log mode).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(dir) = env::var("HOTELRES_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        Self::apply_file_overrides(config);
        Self::apply_validation_overrides(config)?;

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }

    fn apply_file_overrides(config: &mut Config) {
        let hotels = env::var("HOTELRES_HOTELS_FILE").ok();
        let customers = env::var("HOTELRES_CUSTOMERS_FILE").ok();
        let reservations = env::var("HOTELRES_RESERVATIONS_FILE").ok();

        if hotels.is_none() && customers.is_none() && reservations.is_none() {
            return;
        }

        let files = config.files.get_or_insert_with(FilesConfig::default);
        if hotels.is_some() {
            files.hotels = hotels;
        }
        if customers.is_some() {
            files.customers = customers;
        }
        if reservations.is_some() {
            files.reservations = reservations;
        }
    }

    fn apply_validation_overrides(config: &mut Config) -> Result<()> {
        let rooms = Self::read_bool("HOTELRES_ENFORCE_ROOM_INVARIANT")?;
        let references = Self::read_bool("HOTELRES_CHECK_REFERENCES")?;
        let duplicates = Self::read_bool("HOTELRES_REJECT_DUPLICATE_IDS")?;

        if rooms.is_none() && references.is_none() && duplicates.is_none() {
            return Ok(());
        }

        let validation = config
            .validation
            .get_or_insert_with(ValidationConfig::default);
        if rooms.is_some() {
            validation.enforce_room_invariant = rooms;
        }
        if references.is_some() {
            validation.check_references = references;
        }
        if duplicates.is_some() {
            validation.reject_duplicate_ids = duplicates;
        }

        Ok(())
    }

    fn read_bool(field: &str) -> Result<Option<bool>> {
        match env::var(field) {
            Ok(val) => Self::parse_bool(field, &val).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Parse a boolean from an environment variable value.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
