//! Logging infrastructure for the hotelres library.
//!
//! This module provides a simple stderr-based logging system with
//! configurable log levels. It is the operator-visible channel that load
//! problems are reported on.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "HOTELRES_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use hotelres::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelres::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// # Examples
///
/// ```
/// use hotelres::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("could not load hotels.json");
/// logger.info("not printed, requires Verbose");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    ///
    /// Error messages are always displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on environment variables and caller flags.
///
/// The priority order is:
/// 1. Flags (verbose/quiet)
/// 2. `HOTELRES_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use hotelres::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
