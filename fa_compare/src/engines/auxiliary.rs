//! Auxiliary-variable scanner ("XFA")
//!
//! Carries a small set of boolean flags alongside the automaton state. Every
//! flag read, write and clear is counted as a memory access, which is where
//! this engine's extra cost shows up in the comparison.

use super::{trace_match, trace_tokenize, EngineKind, Scanner};
use crate::config::compile_time::costs::{
    AUX_CLASSIFICATION_FLAGS, AUX_PATTERN_FLAGS, AUX_PATTERN_INDEX_CHECKS, AUX_TOKEN_FLAG_CHECKS,
};
use crate::config::compile_time::lexical::DOUBLE_EQUALS;
use crate::config::ScannerPreferences;
use crate::lexical::{
    double_equals_at, is_digit, is_keyword, is_letter, is_operator_char, is_symbol_char,
    is_whitespace, number_end, slice_text, to_chars, word_end,
};
use crate::metrics::{EngineModel, PerformanceMetrics, ScanTimer};
use crate::patterns::{PatternMatchResult, PatternSpec, CATALOG};
use crate::tokens::Token;

/// Classification flags set while recognizing one token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationFlag {
    InNumber,
    InIdentifier,
    MatchedKeyword,
    MatchedOperator,
}

/// Flag storage owned by one scanner instance, cleared before each token
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationFlags {
    in_number: bool,
    in_identifier: bool,
    matched_keyword: bool,
    matched_operator: bool,
}

impl ClassificationFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, flag: ClassificationFlag) {
        *self.slot(flag) = true;
    }

    pub fn is_set(&self, flag: ClassificationFlag) -> bool {
        match flag {
            ClassificationFlag::InNumber => self.in_number,
            ClassificationFlag::InIdentifier => self.in_identifier,
            ClassificationFlag::MatchedKeyword => self.matched_keyword,
            ClassificationFlag::MatchedOperator => self.matched_operator,
        }
    }

    fn slot(&mut self, flag: ClassificationFlag) -> &mut bool {
        match flag {
            ClassificationFlag::InNumber => &mut self.in_number,
            ClassificationFlag::InIdentifier => &mut self.in_identifier,
            ClassificationFlag::MatchedKeyword => &mut self.matched_keyword,
            ClassificationFlag::MatchedOperator => &mut self.matched_operator,
        }
    }
}

/// Progress through one pattern; lives only for the duration of that scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternProgress {
    Clear,
    FirstSeen,
}

pub struct AuxiliaryVariableScanner {
    metrics: PerformanceMetrics,
    flags: ClassificationFlags,
    preferences: ScannerPreferences,
}

impl AuxiliaryVariableScanner {
    pub fn new() -> Self {
        Self::with_preferences(ScannerPreferences::default())
    }

    pub fn with_preferences(preferences: ScannerPreferences) -> Self {
        Self {
            metrics: PerformanceMetrics::new(EngineModel::auxiliary()),
            flags: ClassificationFlags::default(),
            preferences,
        }
    }

    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// Flags left by the most recently classified token
    pub fn classification_flags(&self) -> ClassificationFlags {
        self.flags
    }

    fn set_flag(&mut self, flag: ClassificationFlag) {
        self.flags.set(flag);
        self.metrics.increment_memory_accesses(1);
    }

    /// Charge one transition and one access per character of a run
    fn consume_run(&mut self, start: usize, end: usize) {
        let length = (end - start) as u64;
        self.metrics.increment_state_transitions(length);
        self.metrics.increment_memory_accesses(length);
    }

    fn match_pattern(&mut self, chars: &[char], spec: &PatternSpec) -> PatternMatchResult {
        self.metrics.increment_memory_accesses(AUX_PATTERN_FLAGS);
        let mut progress = PatternProgress::Clear;

        for i in 0..chars.len() {
            self.metrics.increment_state_transitions(1);
            self.metrics.increment_memory_accesses(AUX_PATTERN_INDEX_CHECKS);

            if spec.first_at(chars, i) {
                progress = PatternProgress::FirstSeen;
                self.metrics.increment_memory_accesses(1);
            }

            if progress == PatternProgress::FirstSeen && spec.second_at(chars, i) {
                self.metrics.increment_memory_accesses(1);
                return PatternMatchResult::matched(spec);
            }
        }

        PatternMatchResult::not_matched(
            spec,
            progress == PatternProgress::FirstSeen,
            self.preferences.record_partial_matches,
        )
    }
}

impl Default for AuxiliaryVariableScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for AuxiliaryVariableScanner {
    fn kind(&self) -> EngineKind {
        EngineKind::AuxiliaryVariable
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
            self.metrics.increment_memory_accesses(AUX_TOKEN_FLAG_CHECKS);
            self.flags.clear();
            self.metrics.increment_memory_accesses(AUX_CLASSIFICATION_FLAGS);

            if is_digit(c) {
                self.set_flag(ClassificationFlag::InNumber);
                let end = number_end(&chars, pos);
                self.consume_run(pos, end);
                tokens.push(Token::number(slice_text(&chars, pos, end)));
                pos = end;
            } else if is_letter(c) {
                self.set_flag(ClassificationFlag::InIdentifier);
                let end = word_end(&chars, pos);
                self.consume_run(pos, end);
                let word = slice_text(&chars, pos, end);
                if is_keyword(&word) {
                    self.set_flag(ClassificationFlag::MatchedKeyword);
                }
                tokens.push(Token::from_word(word));
                pos = end;
            } else if double_equals_at(&chars, pos) {
                self.set_flag(ClassificationFlag::MatchedOperator);
                self.metrics.increment_state_transitions(2);
                tokens.push(Token::operator(DOUBLE_EQUALS));
                pos += 2;
            } else if is_operator_char(c) {
                self.set_flag(ClassificationFlag::MatchedOperator);
                self.metrics.increment_state_transitions(1);
                tokens.push(Token::operator(c.to_string()));
                pos += 1;
            } else if is_symbol_char(c) {
                self.metrics.increment_state_transitions(1);
                tokens.push(Token::symbol(c));
                pos += 1;
            } else {
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
