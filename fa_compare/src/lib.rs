// Internal modules
pub mod comparison;
pub mod config;
pub mod engines;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod metrics;
pub mod patterns;
pub mod tokens;

// Re-export key types for library consumers
pub use comparison::{compare_engines, ComparisonError, ComparisonReport, QualityVerdict};
pub use config::{ConfigError, RuntimeConfig, ScannerPreferences};
pub use engines::{create_scanner, EngineKind, Scanner};
pub use metrics::PerformanceMetrics;
pub use patterns::{PatternId, PatternMatchResult};
pub use tokens::{Token, TokenKind};
