//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading hotelres configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "hotelres.yaml";

/// Name of the private, uncommitted project configuration file.
pub const LOCAL_CONFIG_FILE: &str = "hotelres.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use hotelres::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.hotelres/config.yaml` (precedence 1)
    /// 2. Project `hotelres.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `hotelres.local.yaml` next to it (precedence 3)
    ///
    /// `user_dir` overrides the directory the user config is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if present.
    ///
    /// A missing home directory is treated like a missing file.
    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match default_user_dir() {
                Some(dir) => dir.join("config.yaml"),
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `hotelres.yaml` or
    /// `hotelres.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            let mut found_any = false;

            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                    found_any = true;
                }
            }

            if found_any || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Configuration`] if the YAML is invalid or has unknown keys.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }
}

/// Returns the default user configuration directory, `~/.hotelres`.
///
/// Returns `None` if the home directory cannot be determined.
#[must_use]
pub fn default_user_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".hotelres"))
}
