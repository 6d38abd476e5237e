//! Configuration system for hotelres.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOTELRES_*`)
//! 3. Private project config (`hotelres.local.yaml`)
//! 4. Project config (`hotelres.yaml`)
//! 5. User config (`~/.hotelres/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use hotelres::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("hotels live in {}", config.store_paths().hotels.display());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use hotelres::config::{Config, ConfigBuilder, ValidationConfig};
//!
//! let custom = Config {
//!     validation: Some(ValidationConfig {
//!         enforce_room_invariant: Some(true),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.validation_policy().enforce_room_invariant);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_user_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, FilesConfig, ValidationConfig};
pub use validator::ConfigValidator;
