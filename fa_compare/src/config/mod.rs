//! Configuration module for the scanner comparison crate
//!
//! Fixed model numbers and character sets live in [`constants`]; user-facing
//! preferences that may change between runs live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    ComparisonPreferences, LoggingPreferences, OutputFormat, RuntimeConfig, ScannerPreferences,
};

use std::path::PathBuf;

/// Errors raised while loading runtime configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        use crate::logging::codes;
        match self {
            ConfigError::Io { .. } => codes::config::CONFIG_FILE_UNREADABLE,
            ConfigError::Parse(_) => codes::config::CONFIG_PARSE_FAILURE,
            ConfigError::Invalid { .. } => codes::config::CONFIG_INVALID_VALUE,
        }
    }
}

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the cargo profile the crate was compiled with
    pub fn profile() -> &'static str {
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
