//! Plain deterministic scanner ("FA")
//!
//! Scans character by character with nothing but a position and, while
//! matching, a local first-literal flag.

use super::{trace_match, trace_tokenize, EngineKind, Scanner};
use crate::config::compile_time::lexical::DOUBLE_EQUALS;
use crate::config::ScannerPreferences;
use crate::lexical::{
    double_equals_at, is_digit, is_letter, is_operator_char, is_symbol_char, is_whitespace,
    number_end, slice_text, to_chars, word_end,
};
use crate::metrics::{EngineModel, PerformanceMetrics, ScanTimer};
use crate::patterns::{candidate_positions, PatternMatchResult, PatternSpec, CATALOG};
use crate::tokens::Token;

pub struct PlainScanner {
    metrics: PerformanceMetrics,
    preferences: ScannerPreferences,
}

impl PlainScanner {
    pub fn new() -> Self {
        Self::with_preferences(ScannerPreferences::default())
    }

    pub fn with_preferences(preferences: ScannerPreferences) -> Self {
        Self {
            metrics: PerformanceMetrics::new(EngineModel::plain()),
            preferences,
        }
    }

    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Leftmost-first: commit to the first occurrence of the first literal
    /// and search only after it for the second.
    fn match_pattern(&mut self, chars: &[char], spec: &PatternSpec) -> PatternMatchResult {
        let first_len = spec.first_len();

        for i in candidate_positions(chars.len(), 0, first_len) {
            self.metrics.increment_state_transitions(1);
            self.metrics.increment_memory_accesses(1);

            if !spec.first_at(chars, i) {
                continue;
            }

            for j in candidate_positions(chars.len(), i + first_len, spec.second_len()) {
                self.metrics.increment_state_transitions(1);
                self.metrics.increment_memory_accesses(1);

                if spec.second_at(chars, j) {
                    return PatternMatchResult::matched(spec);
                }
            }

            return PatternMatchResult::not_matched(
                spec,
                true,
                self.preferences.record_partial_matches,
            );
        }

        PatternMatchResult::not_matched(spec, false, self.preferences.record_partial_matches)
    }
}

impl Default for PlainScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for PlainScanner {
    fn kind(&self) -> EngineKind {
        EngineKind::Plain
    }

    fn tokenize(&mut self, text: &str) -> Vec<Token> {
        let timer = ScanTimer::start();
        let chars = to_chars(text);
        let mut tokens = Vec::new();
        let mut pos = 0;

        while let Some(&c) = chars.get(pos) {
            if is_whitespace(c) {
                pos += 1;
                continue;
            }

            self.metrics.increment_state_transitions(1);
            self.metrics.increment_memory_accesses(1);

            if is_digit(c) {
                let end = number_end(&chars, pos);
                self.metrics.increment_state_transitions((end - pos) as u64);
                tokens.push(Token::number(slice_text(&chars, pos, end)));
                pos = end;
            } else if is_letter(c) {
                let end = word_end(&chars, pos);
                self.metrics.increment_state_transitions((end - pos) as u64);
                tokens.push(Token::from_word(slice_text(&chars, pos, end)));
                pos = end;
            } else if double_equals_at(&chars, pos) {
                self.metrics.increment_state_transitions(2);
                tokens.push(Token::operator(DOUBLE_EQUALS));
                pos += 2;
            } else if is_operator_char(c) {
                self.metrics.increment_state_transitions(1);
                tokens.push(Token::operator(c.to_string()));
                pos += 1;
            } else if is_symbol_char(c) {
                self.metrics.increment_state_transitions(1);
                tokens.push(Token::symbol(c));
                pos += 1;
            } else {
                // Unrecognized characters are consumed without a token
                self.metrics.increment_state_transitions(1);
                pos += 1;
            }
        }

        timer.record(&mut self.metrics);
        trace_tokenize(self.kind(), &self.preferences, &tokens, &self.metrics);
        tokens
    }

    fn match_patterns(&mut self, text: &str) -> Vec<PatternMatchResult> {
        let timer = ScanTimer::start();
        let chars = to_chars(text);

        let results: Vec<PatternMatchResult> = CATALOG
            .iter()
            .map(|spec| self.match_pattern(&chars, spec))
            .collect();

        timer.record(&mut self.metrics);
        trace_match(self.kind(), &self.preferences, &results, &self.metrics);
        results
    }

    fn metrics_snapshot(&self) -> PerformanceMetrics {
        self.metrics.clone()
    }

    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}
