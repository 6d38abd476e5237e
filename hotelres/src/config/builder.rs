//! Configuration builder.
//!
//! Assembles a [`Config`] from files, environment variables and programmatic
//! overrides, then validates the result.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds configuration with proper precedence.
///
/// # Examples
///
/// ```
/// use hotelres::config::{Config, ConfigBuilder};
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         data_dir: Some(PathBuf::from("records")),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.data_dir, Some(PathBuf::from("records")));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that reads files from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory project configuration discovery starts from.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Reads the user config from `dir/config.yaml` instead of `~/.hotelres`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.user_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Applies `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `HOTELRES_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed, an
    /// environment variable holds an invalid value, or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?;
            for source in &sources {
                log::debug!("using configuration from {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
