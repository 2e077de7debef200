//! Side-by-side comparison of the three scanning engines
//!
//! Each comparison builds fresh engine instances, so counters in a report
//! only ever reflect the one input it describes.

pub mod batch;
pub mod report;

pub use batch::{help_text, run_batch, BatchResults, BUILTIN_CASES};
pub use report::{ComparisonReport, EngineRun, MetricName, MetricRow, QualityVerdict};

use crate::config::ScannerPreferences;
use crate::engines::{create_scanner, EngineKind};
use crate::logging::codes;
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("Failed to serialize comparison report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ComparisonError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ComparisonError::Serialization(_) => codes::comparison::REPORT_SERIALIZATION_FAILURE,
        }
    }
}

/// Tokenize and match `text` on every engine and collect the results
pub fn compare_engines(text: &str, preferences: &ScannerPreferences) -> ComparisonReport {
    let start_time = Instant::now();

    let runs = EngineKind::ALL
        .iter()
        .map(|&engine| run_engine(engine, text, preferences))
        .collect();
    let report = ComparisonReport::from_runs(text, runs);

    if report.pattern_quality == QualityVerdict::Differs {
        let differing: Vec<&str> = report
            .differing_patterns()
            .iter()
            .map(|pattern| pattern.label())
            .collect();
        crate::log_warning!(code = codes::comparison::PATTERN_RESULTS_DIFFER,
            "Engines disagree on pattern results",
            "patterns" => differing.join(" "),
            "input_chars" => text.chars().count()
        );
    }

    crate::log_performance!(
        codes::success::COMPARISON_COMPLETE,
        "Engine comparison completed",
        duration = start_time.elapsed(),
        "lexical_quality" => report.lexical_quality.as_str(),
        "pattern_quality" => report.pattern_quality.as_str()
    );

    report
}

fn run_engine(engine: EngineKind, text: &str, preferences: &ScannerPreferences) -> EngineRun {
    let mut scanner = create_scanner(engine, preferences);

    let tokens = scanner.tokenize(text);
    crate::log_success!(
        codes::success::TOKENIZATION_COMPLETE,
        "Tokenization completed",
        "engine" => engine,
        "tokens" => tokens.len()
    );

    let patterns = scanner.match_patterns(text);
    crate::log_success!(
        codes::success::PATTERN_MATCHING_COMPLETE,
        "Pattern matching completed",
        "engine" => engine,
        "matched" => patterns.iter().filter(|result| result.matched).count()
    );

    EngineRun {
        engine,
        tokens,
        patterns,
        metrics: scanner.metrics_snapshot(),
    }
}
