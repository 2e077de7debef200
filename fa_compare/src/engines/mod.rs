//! The three scanning engines and their common interface
//!
//! All engines produce the same tokens for the same input and report one
//! [`PatternMatchResult`] per catalog pattern, in catalog order. They differ
//! in how they track progress, and therefore in what their
//! [`PerformanceMetrics`] record.

pub mod auxiliary;
pub mod lookahead;
pub mod plain;

pub use auxiliary::{AuxiliaryVariableScanner, ClassificationFlag, ClassificationFlags};
pub use lookahead::{LookaheadScanner, ScanState};
pub use plain::PlainScanner;

use crate::config::ScannerPreferences;
use crate::logging::codes;
use crate::metrics::{EngineModel, PerformanceMetrics};
use crate::patterns::{result::count_matches, PatternMatchResult};
use crate::tokens::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations every engine exposes to the comparison harness
///
/// Calls mutate only the engine's own counters; an instance must not be
/// driven from more than one caller at a time.
pub trait Scanner {
    fn kind(&self) -> EngineKind;

    /// Classify `text` into tokens, left to right; never fails
    fn tokenize(&mut self, text: &str) -> Vec<Token>;

    /// One result per catalog pattern, in catalog order
    fn match_patterns(&mut self, text: &str) -> Vec<PatternMatchResult>;

    fn metrics_snapshot(&self) -> PerformanceMetrics;

    fn reset_metrics(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    #[serde(rename = "FA")]
    Plain,
    #[serde(rename = "XFA")]
    AuxiliaryVariable,
    #[serde(rename = "HFA")]
    Lookahead,
}

impl EngineKind {
    /// Comparison order used by every report
    pub const ALL: [EngineKind; 3] = [
        EngineKind::Plain,
        EngineKind::AuxiliaryVariable,
        EngineKind::Lookahead,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            EngineKind::Plain => "FA",
            EngineKind::AuxiliaryVariable => "XFA",
            EngineKind::Lookahead => "HFA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EngineKind::Plain => "Traditional FA (DFA)",
            EngineKind::AuxiliaryVariable => "Extended FA (XFA)",
            EngineKind::Lookahead => "High-Efficient FA (HFA)",
        }
    }

    pub fn model(&self) -> EngineModel {
        match self {
            EngineKind::Plain => EngineModel::plain(),
            EngineKind::AuxiliaryVariable => EngineModel::auxiliary(),
            EngineKind::Lookahead => EngineModel::lookahead(),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Build a fresh engine instance with its own zeroed counters
pub fn create_scanner(kind: EngineKind, preferences: &ScannerPreferences) -> Box<dyn Scanner> {
    match kind {
        EngineKind::Plain => Box::new(PlainScanner::with_preferences(preferences.clone())),
        EngineKind::AuxiliaryVariable => Box::new(AuxiliaryVariableScanner::with_preferences(
            preferences.clone(),
        )),
        EngineKind::Lookahead => {
            Box::new(LookaheadScanner::with_preferences(preferences.clone()))
        }
    }
}

// ============================================================================
// CALL TRACING
// ============================================================================

pub(crate) fn trace_tokenize(
    kind: EngineKind,
    preferences: &ScannerPreferences,
    tokens: &[Token],
    metrics: &PerformanceMetrics,
) {
    if preferences.log_scan_events {
        crate::log_debug!(code = codes::scanner::TOKENIZE_CALL, "Tokenize call finished",
            "engine" => kind,
            "tokens" => tokens.len(),
            "state_transitions" => metrics.state_transitions(),
            "memory_accesses" => metrics.memory_accesses()
        );
    }
}

pub(crate) fn trace_match(
    kind: EngineKind,
    preferences: &ScannerPreferences,
    results: &[PatternMatchResult],
    metrics: &PerformanceMetrics,
) {
    if preferences.log_scan_events {
        crate::log_debug!(code = codes::scanner::MATCH_CALL, "Pattern match call finished",
            "engine" => kind,
            "matched" => count_matches(results),
            "state_transitions" => metrics.state_transitions(),
            "memory_accesses" => metrics.memory_accesses()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternId;

    fn all_scanners() -> Vec<Box<dyn Scanner>> {
        let preferences = ScannerPreferences::default();
        EngineKind::ALL
            .iter()
            .map(|&kind| create_scanner(kind, &preferences))
            .collect()
    }

    fn rendered(tokens: &[Token]) -> String {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_create_scanner_kinds_and_models() {
        for (scanner, kind) in all_scanners().iter().zip(EngineKind::ALL) {
            assert_eq!(scanner.kind(), kind);
            let metrics = scanner.metrics_snapshot();
            assert_eq!(metrics.storage_space_bytes(), kind.model().storage_bytes);
            assert_eq!(metrics.state_transitions(), 0);
        }
    }

    #[test]
    fn test_short_names_and_serde() {
        assert_eq!(EngineKind::Plain.to_string(), "FA");
        assert_eq!(
            serde_json::to_string(&EngineKind::Lookahead).unwrap(),
            "\"HFA\""
        );
    }

    #[test]
    fn test_token_round_trip_on_all_engines() {
        let expected = "[KEYWORD: if][SYMBOL: (][IDENTIFIER: x][OPERATOR: ==][NUMBER: 10]\
                        [SYMBOL: )][KEYWORD: return][IDENTIFIER: y][OPERATOR: +]\
                        [IDENTIFIER: z][SYMBOL: ;]";

        for mut scanner in all_scanners() {
            let tokens = scanner.tokenize("if (x == 10) return y + z;");
            assert_eq!(rendered(&tokens), expected, "engine {}", scanner.kind());
        }
    }

    #[test]
    fn test_tokenization_equivalence() {
        let inputs = [
            "",
            "   \t\n ",
            "while (count < 100) sum = sum + 1;",
            "float result = 42.5 + value;",
            "int a = 5; char b = 'x';",
            "a===b==c=",
            "1.2.3abc def9 .5",
            "{};,()",
            "x=-y*z/2>w",
        ];

        for input in inputs {
            let outputs: Vec<Vec<Token>> = all_scanners()
                .iter_mut()
                .map(|scanner| scanner.tokenize(input))
                .collect();
            assert_eq!(outputs[0], outputs[1], "FA vs XFA on {:?}", input);
            assert_eq!(outputs[1], outputs[2], "XFA vs HFA on {:?}", input);
        }
    }

    #[test]
    fn test_pattern_end_to_end() {
        for mut scanner in all_scanners() {
            let results = scanner.match_patterns("prefix abc content def suffix");
            let ids: Vec<PatternId> = results.iter().map(|r| r.pattern).collect();
            assert_eq!(ids, PatternId::ALL.to_vec());

            for result in &results {
                if result.pattern == PatternId::AbcDef {
                    assert!(result.matched, "engine {}", scanner.kind());
                    assert_eq!(result.matched_parts, vec!["abc", "def"]);
                } else {
                    assert!(!result.matched, "engine {} {:?}", scanner.kind(), result);
                }
            }
        }
    }

    #[test]
    fn test_empty_input() {
        for mut scanner in all_scanners() {
            assert!(scanner.tokenize("").is_empty());
            let results = scanner.match_patterns("");
            assert_eq!(results.len(), 4);
            assert!(results.iter().all(|r| !r.matched && r.matched_parts.is_empty()));
        }
    }

    #[test]
    fn test_later_first_literal_matches_everywhere() {
        for mut scanner in all_scanners() {
            let results = scanner.match_patterns("ab xx ab cd");
            assert!(results[0].matched, "engine {}", scanner.kind());
            assert_eq!(results[0].matched_parts, vec!["ab", "cd"]);
        }
    }

    #[test]
    fn test_lookahead_divergence_cases() {
        let mut scanners = all_scanners();

        let tail_tolerant: Vec<bool> = scanners
            .iter_mut()
            .map(|s| s.match_patterns("abcde fghm")[3].matched)
            .collect();
        assert_eq!(tail_tolerant, vec![false, false, true]);

        let reentry: Vec<bool> = scanners
            .iter_mut()
            .map(|s| s.match_patterns("ab a cd")[0].matched)
            .collect();
        assert_eq!(reentry, vec![true, true, false]);
    }

    #[test]
    fn test_plain_and_auxiliary_agree() {
        let inputs = [
            "hello ab world cd end",
            "cd before ab",
            "abcdefghijk",
            "if (ab == cd) return ef + gh;",
            "while (abc < def) sum = abcde + fghnm;",
            "ab ab ab",
            "efgh abcdef abcdefghnm",
            "ab a cd",
            "abcde fghm",
        ];
        let preferences = ScannerPreferences::default();

        for input in inputs {
            let mut plain = create_scanner(EngineKind::Plain, &preferences);
            let mut aux = create_scanner(EngineKind::AuxiliaryVariable, &preferences);
            assert_eq!(
                plain.match_patterns(input),
                aux.match_patterns(input),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_metrics_monotonic_until_reset() {
        for mut scanner in all_scanners() {
            let mut last = (0, 0);
            for input in ["if (x == 10)", "ab cd", "", "abcde fghnm 1.5"] {
                scanner.tokenize(input);
                scanner.match_patterns(input);
                let metrics = scanner.metrics_snapshot();
                let now = (metrics.state_transitions(), metrics.memory_accesses());
                assert!(now.0 >= last.0 && now.1 >= last.1);
                last = now;
            }

            scanner.reset_metrics();
            let metrics = scanner.metrics_snapshot();
            assert_eq!(metrics.state_transitions(), 0);
            assert_eq!(metrics.memory_accesses(), 0);
            assert_eq!(metrics.matching_time_ms(), 0.0);
            assert_eq!(
                metrics.storage_space_bytes(),
                scanner.kind().model().storage_bytes
            );
        }
    }

    #[test]
    fn test_match_idempotence() {
        for mut scanner in all_scanners() {
            let input = "begin abcde center fghnm end ab";
            let first = scanner.match_patterns(input);
            let time_after_first = scanner.metrics_snapshot().matching_time_ms();
            let second = scanner.match_patterns(input);

            assert_eq!(first, second);
            assert!(scanner.metrics_snapshot().matching_time_ms() >= time_after_first);
        }
    }
}
