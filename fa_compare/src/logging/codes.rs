//! Event codes and their classification metadata
//!
//! Every code emitted by the scanners, the comparison harness and the front
//! end is registered here together with its category and handling advice.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning, debug and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a registered code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

pub mod config {
    use super::Code;

    pub const CONFIG_FILE_UNREADABLE: Code = Code::new("E005");
    pub const CONFIG_PARSE_FAILURE: Code = Code::new("E006");
    pub const CONFIG_INVALID_VALUE: Code = Code::new("E007");
}

/// Front end input handling
pub mod input {
    use super::Code;

    pub const EMPTY_INPUT: Code = Code::new("E010");
    pub const INPUT_READ_FAILURE: Code = Code::new("E011");
    pub const UNKNOWN_ARGUMENT: Code = Code::new("E012");
}

/// Per-call scanner trace events
pub mod scanner {
    use super::Code;

    pub const TOKENIZE_CALL: Code = Code::new("D020");
    pub const MATCH_CALL: Code = Code::new("D021");
    pub const EARLY_TERMINATION: Code = Code::new("D022");
}

pub mod comparison {
    use super::Code;

    pub const PATTERN_RESULTS_DIFFER: Code = Code::new("W030");
    pub const REPORT_SERIALIZATION_FAILURE: Code = Code::new("E031");
}

pub mod success {
    use super::Code;

    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const CONFIG_LOADED: Code = Code::new("I005");

    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const PATTERN_MATCHING_COMPLETE: Code = Code::new("I021");

    pub const COMPARISON_COMPLETE: Code = Code::new("I030");
    pub const BATCH_COMPLETE: Code = Code::new("I031");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

const REGISTERED: &[CodeMetadata] = &[
    // System
    CodeMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        "Critical internal error",
        "File a bug report with the input that triggered it",
    ),
    CodeMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        "Logging or runtime initialization failure",
        "Check configuration and environment variables",
    ),
    // Configuration
    CodeMetadata::new(
        "E005",
        "Config",
        Severity::Medium,
        false,
        "Configuration file could not be read",
        "Check the --config path and its permissions",
    ),
    CodeMetadata::new(
        "E006",
        "Config",
        Severity::Medium,
        false,
        "Configuration file is not valid TOML",
        "Fix the TOML syntax reported in the message",
    ),
    CodeMetadata::new(
        "E007",
        "Config",
        Severity::Medium,
        false,
        "Configuration value is out of range or inconsistent",
        "Correct the named field",
    ),
    // Input
    CodeMetadata::new(
        "E010",
        "Input",
        Severity::Low,
        true,
        "Empty input line",
        "Enter a non-empty line of text",
    ),
    CodeMetadata::new(
        "E011",
        "Input",
        Severity::High,
        false,
        "Standard input could not be read",
        "Pass text as arguments instead",
    ),
    CodeMetadata::new(
        "E012",
        "Input",
        Severity::Low,
        true,
        "Unrecognized command line option",
        "Run with --help to list supported options",
    ),
    // Scanner traces
    CodeMetadata::new(
        "D020",
        "Scanner",
        Severity::Low,
        true,
        "Tokenize call trace",
        "None",
    ),
    CodeMetadata::new(
        "D021",
        "Scanner",
        Severity::Low,
        true,
        "Pattern match call trace",
        "None",
    ),
    CodeMetadata::new(
        "D022",
        "Scanner",
        Severity::Low,
        true,
        "Lookahead scan stopped early on a short remainder",
        "None",
    ),
    // Comparison
    CodeMetadata::new(
        "W030",
        "Comparison",
        Severity::Medium,
        true,
        "Engines disagree on at least one pattern",
        "Inspect the per-pattern results in the report",
    ),
    CodeMetadata::new(
        "E031",
        "Comparison",
        Severity::Medium,
        true,
        "Comparison report could not be serialized",
        "Fall back to text output",
    ),
    // Success
    CodeMetadata::new(
        "I001",
        "Success",
        Severity::Low,
        true,
        "Operation completed successfully",
        "None",
    ),
    CodeMetadata::new(
        "I004",
        "Success",
        Severity::Low,
        true,
        "Logging system initialized",
        "None",
    ),
    CodeMetadata::new(
        "I005",
        "Success",
        Severity::Low,
        true,
        "Runtime configuration loaded",
        "None",
    ),
    CodeMetadata::new(
        "I020",
        "Success",
        Severity::Low,
        true,
        "Tokenization completed",
        "None",
    ),
    CodeMetadata::new(
        "I021",
        "Success",
        Severity::Low,
        true,
        "Pattern matching completed",
        "None",
    ),
    CodeMetadata::new(
        "I030",
        "Success",
        Severity::Low,
        true,
        "Engine comparison completed",
        "None",
    ),
    CodeMetadata::new(
        "I031",
        "Success",
        Severity::Low,
        true,
        "Batch comparison completed",
        "None",
    ),
];

static CODE_REGISTRY: OnceLock<HashMap<&'static str, &'static CodeMetadata>> = OnceLock::new();

fn get_registry() -> &'static HashMap<&'static str, &'static CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| REGISTERED.iter().map(|meta| (meta.code, meta)).collect())
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_registry().get(code).copied()
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Human-readable description, or "Unknown code" for unregistered codes
pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown code")
}

pub fn get_action(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
