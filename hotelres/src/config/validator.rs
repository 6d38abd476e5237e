//! Configuration validation.
//!
//! Collection file names must be plain, non-empty file names and the three
//! collections must not share a file.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::record::RecordKind;
use std::collections::HashSet;
use std::path::{Component, Path};

const KINDS: [RecordKind; 3] = [RecordKind::Hotel, RecordKind::Customer, RecordKind::Reservation];

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use hotelres::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref dir) = config.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "data_dir".into(),
                    message: "data_dir cannot be empty".into(),
                });
            }
        }

        if let Some(ref files) = config.files {
            for kind in KINDS {
                if let Some(name) = files.get(kind) {
                    Self::validate_file_name(kind, name)?;
                }
            }
        }

        let paths = config.store_paths();
        let mut seen = HashSet::new();
        for kind in KINDS {
            let path = paths.path_for(kind);
            if !seen.insert(path.to_path_buf()) {
                return Err(Error::Validation {
                    field: format!("files.{}", kind.plural()),
                    message: format!("{} is used by more than one collection", path.display()),
                });
            }
        }

        Ok(())
    }

    fn validate_file_name(kind: RecordKind, name: &str) -> Result<()> {
        let field = format!("files.{}", kind.plural());

        if name.trim().is_empty() {
            return Err(Error::Validation {
                field,
                message: "file name cannot be empty".into(),
            });
        }

        let mut components = Path::new(name).components();
        let is_plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_plain {
            return Err(Error::Validation {
                field,
                message: format!("'{name}' must be a plain file name; use data_dir for directories"),
            });
        }

        Ok(())
    }
}
