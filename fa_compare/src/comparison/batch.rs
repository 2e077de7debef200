//! Built-in comparison cases and interactive help

use super::{compare_engines, ComparisonReport, QualityVerdict};
use crate::config::compile_time::lexical::{KEYWORDS, OPERATOR_CHARS, SYMBOL_CHARS};
use crate::config::ScannerPreferences;
use crate::logging::{self, codes};
use crate::patterns::PatternId;
use std::time::{Duration, Instant};

/// Inputs exercised by `--batch`: lexical, pattern, combined and edge cases
pub const BUILTIN_CASES: [&str; 18] = [
    "if (x == 10) return y + z;",
    "while (count < 100) sum = sum + 1;",
    "float result = 42.5 + value;",
    "int a = 5; char b = 'x';",
    "hello ab world cd end",
    "start ef middle gh finish",
    "prefix abc content def suffix",
    "begin abcde center fghnm end",
    "if (ab == cd) return ef + gh;",
    "while (abc < def) sum = abcde + fghnm;",
    "a",
    "ab",
    "abc def",
    "abcdefghijk",
    "123 + 456.78",
    "{};,()",
    "if (variable1 == 42) { while (abc < def) { return abcde + fghnm; } }",
    "float calc = 3.14159 * radius * radius;",
];

const LEXICAL_EXAMPLES: [&str; 3] = [
    "if (x == 10) return y + z;",
    "while (count < 100) sum = sum + 1;",
    "if (num1 == 42.0) { result = num1 + value; }",
];

const PATTERN_EXAMPLES: [&str; 4] = [
    "hello ab world cd end",
    "start ef middle gh finish",
    "prefix abc content def suffix",
    "begin abcde center fghnm end",
];

const COMBINED_EXAMPLES: [&str; 2] = [
    "if (ab == cd) return ef + gh;",
    "while (abc < def) sum = abcde + fghnm;",
];

// ============================================================================
// BATCH RESULTS
// ============================================================================

#[derive(Debug)]
pub struct BatchResults {
    pub reports: Vec<ComparisonReport>,
    pub processing_duration: Duration,
}

impl BatchResults {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
            processing_duration: Duration::new(0, 0),
        }
    }

    pub fn case_count(&self) -> usize {
        self.reports.len()
    }

    pub fn lexical_maintained_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.lexical_quality == QualityVerdict::Maintained)
            .count()
    }

    pub fn pattern_maintained_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.pattern_quality == QualityVerdict::Maintained)
            .count()
    }

    /// Indices of cases where the engines disagreed on some pattern
    pub fn differing_cases(&self) -> Vec<usize> {
        self.reports
            .iter()
            .enumerate()
            .filter(|(_, report)| report.pattern_quality == QualityVerdict::Differs)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Batch completed: {} cases, lexical quality maintained in {}, pattern quality maintained in {}, {:.2}ms total",
            self.case_count(),
            self.lexical_maintained_count(),
            self.pattern_maintained_count(),
            self.processing_duration.as_secs_f64() * 1000.0
        )
    }
}

impl Default for BatchResults {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare every case in order, tagging log events with the case index
pub fn run_batch(cases: &[&str], preferences: &ScannerPreferences) -> BatchResults {
    let start_time = Instant::now();
    let mut results = BatchResults::new();

    crate::log_info!("Starting batch comparison", "cases" => cases.len());

    for (index, case) in cases.iter().enumerate() {
        let report = logging::with_session_context("batch", Some(index), || {
            compare_engines(case, preferences)
        });
        results.reports.push(report);
    }

    results.processing_duration = start_time.elapsed();

    crate::log_performance!(
        codes::success::BATCH_COMPLETE,
        "Batch comparison completed",
        duration = results.processing_duration,
        "cases" => results.case_count(),
        "pattern_differences" => results.differing_cases().len()
    );

    results
}

// ============================================================================
// HELP
// ============================================================================

pub fn help_text() -> String {
    let mut help = String::new();

    help.push_str("Enter any text to compare the FA, XFA and HFA engines on it.\n");
    help.push_str("Commands: 'help' shows this text, 'quit' exits.\n");

    help.push_str("\nLexical analysis examples:\n");
    for example in LEXICAL_EXAMPLES {
        help.push_str(&format!("  {}\n", example));
    }

    help.push_str("\nPattern matching examples:\n");
    for example in PATTERN_EXAMPLES {
        help.push_str(&format!("  {}\n", example));
    }

    help.push_str("\nCombined examples:\n");
    for example in COMBINED_EXAMPLES {
        help.push_str(&format!("  {}\n", example));
    }

    help.push_str(&format!("\nKeywords: {}\n", KEYWORDS.join(", ")));
    help.push_str(&format!("Operators: {}, ==\n", join_chars(&OPERATOR_CHARS)));
    help.push_str(&format!("Symbols: {}\n", join_chars(&SYMBOL_CHARS)));

    let patterns: Vec<&str> = PatternId::ALL.iter().map(|id| id.label()).collect();
    help.push_str(&format!("Patterns: {}\n", patterns.join(", ")));

    help
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
