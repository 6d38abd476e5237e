//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Nested sections are merged field by field.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, FilesConfig, ValidationConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hotelres::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { data_dir: Some(PathBuf::from("low")), ..Default::default() };
/// let high = Config { data_dir: Some(PathBuf::from("high")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.data_dir, Some(PathBuf::from("high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - `files` and `validation`: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }

        if let Some(ref source_files) = source.files {
            target.files = Some(match &target.files {
                Some(target_files) => Self::merge_files(target_files, source_files),
                None => source_files.clone(),
            });
        }

        if let Some(ref source_validation) = source.validation {
            target.validation = Some(match &target.validation {
                Some(target_validation) => {
                    Self::merge_validation(target_validation, source_validation)
                }
                None => source_validation.clone(),
            });
        }
    }

    fn merge_files(target: &FilesConfig, source: &FilesConfig) -> FilesConfig {
        FilesConfig {
            hotels: source.hotels.clone().or_else(|| target.hotels.clone()),
            customers: source.customers.clone().or_else(|| target.customers.clone()),
            reservations: source
                .reservations
                .clone()
                .or_else(|| target.reservations.clone()),
        }
    }

    fn merge_validation(target: &ValidationConfig, source: &ValidationConfig) -> ValidationConfig {
        ValidationConfig {
            enforce_room_invariant: source
                .enforce_room_invariant
                .or(target.enforce_room_invariant),
            check_references: source.check_references.or(target.check_references),
            reject_duplicate_ids: source.reject_duplicate_ids.or(target.reject_duplicate_ids),
        }
    }
}
