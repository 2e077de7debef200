// RUNTIME PREFERENCES (User Experience)

use super::ConfigError;
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerPreferences {
    /// Emit one debug event per tokenize/match call
    pub log_scan_events: bool,

    /// Keep the first literal in a failed result when it was seen
    pub record_partial_matches: bool,
}

impl Default for ScannerPreferences {
    fn default() -> Self {
        Self {
            log_scan_events: env_flag(env_vars::SCANNER_LOG_SCAN_EVENTS, true),
            record_partial_matches: env_flag(env_vars::SCANNER_RECORD_PARTIAL_MATCHES, true),
        }
    }
}

/// Report rendering used by the comparison front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonPreferences {
    /// Whether to list every engine's tokens in the text report
    pub show_tokens: bool,

    /// Whether to include the metrics table in the text report
    pub show_metrics: bool,

    pub output_format: OutputFormat,
}

impl Default for ComparisonPreferences {
    fn default() -> Self {
        Self {
            show_tokens: env_flag(env_vars::COMPARISON_SHOW_TOKENS, true),
            show_metrics: env_flag(env_vars::COMPARISON_SHOW_METRICS, true),
            output_format: env::var(env_vars::COMPARISON_OUTPUT_FORMAT)
                .ok()
                .and_then(|v| OutputFormat::parse(&v))
                .unwrap_or(OutputFormat::Text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub(crate) fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub scanner: ScannerPreferences,
    pub comparison: ComparisonPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; absent tables and keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load preferences from a TOML file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject combinations that would make the front end produce nothing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.comparison.output_format == OutputFormat::Text
            && !self.comparison.show_tokens
            && !self.comparison.show_metrics
        {
            return Err(ConfigError::Invalid {
                field: "comparison".to_string(),
                reason: "text output needs show_tokens or show_metrics".to_string(),
            });
        }

        if self.logging.use_structured_logging && !self.logging.enable_console_logging {
            return Err(ConfigError::Invalid {
                field: "logging.use_structured_logging".to_string(),
                reason: "structured logging requires enable_console_logging".to_string(),
            });
        }

        Ok(())
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Scanner
    pub const SCANNER_LOG_SCAN_EVENTS: &str = "FA_SCANNER_LOG_SCAN_EVENTS";
    pub const SCANNER_RECORD_PARTIAL_MATCHES: &str = "FA_SCANNER_RECORD_PARTIAL_MATCHES";

    // Comparison
    pub const COMPARISON_SHOW_TOKENS: &str = "FA_COMPARISON_SHOW_TOKENS";
    pub const COMPARISON_SHOW_METRICS: &str = "FA_COMPARISON_SHOW_METRICS";
    pub const COMPARISON_OUTPUT_FORMAT: &str = "FA_COMPARISON_OUTPUT_FORMAT";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "FA_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "FA_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "FA_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("plain"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [scanner]
            record_partial_matches = false

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert!(!config.scanner.record_partial_matches);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert_eq!(
            config.comparison.show_metrics,
            ComparisonPreferences::default().show_metrics
        );
    }

    #[test]
    fn test_json_output_format_from_toml() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [comparison]
            output_format = "json"
            show_tokens = false
            show_metrics = false
            "#,
        )
        .unwrap();

        assert_eq!(config.comparison.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = RuntimeConfig::from_toml_str("[scanner\nlog_scan_events = ");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_text_report_is_rejected() {
        let result = RuntimeConfig::from_toml_str(
            r#"
            [comparison]
            output_format = "text"
            show_tokens = false
            show_metrics = false
            "#,
        );
        assert_matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "comparison");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scanner]\nlog_scan_events = false").unwrap();

        let config = RuntimeConfig::load(file.path()).unwrap();
        assert!(!config.scanner.log_scan_events);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuntimeConfig::load(dir.path().join("absent.toml"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }
}
