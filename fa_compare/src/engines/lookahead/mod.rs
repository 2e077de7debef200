//! Lookahead scanner ("HFA")
//!
//! Tokenizing goes through a classify-then-dispatch router: one read to
//! classify the leading character, one to dispatch to its processor, and one
//! transition per emitted token. Matching runs one explicit state machine per
//! pattern that peeks ahead at literal boundaries.
//!
//! The machines accept some inputs the other engines reject and reject some
//! they accept; see [`transitions`].

pub mod state;
pub mod transitions;

pub use state::ScanState;
pub use transitions::{machine_for, Cursor, PatternMachine, Step};

use super::{trace_match, trace_tokenize, EngineKind, Scanner};
use crate::config::compile_time::costs::LOOKAHEAD_STEP_READS;
use crate::config::compile_time::lexical::DOUBLE_EQUALS;
use crate::config::ScannerPreferences;
use crate::lexical::{
    classify, double_equals_at, is_whitespace, number_end, slice_text, to_chars, word_end,
    CharClass,
};
use crate::logging::codes;
use crate::metrics::{EngineModel, PerformanceMetrics, ScanTimer};
use crate::patterns::{PatternId, PatternMatchResult};
use crate::tokens::Token;

/// Reads charged per pattern: complexity analysis and routing
const PATTERN_ROUTING_READS: u64 = 2;

/// What a token processor produced and where scanning resumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    pub token: Option<Token>,
    pub next: usize,
}

pub struct LookaheadScanner {
    metrics: PerformanceMetrics,
    preferences: ScannerPreferences,
}

impl LookaheadScanner {
    pub fn new() -> Self {
        Self::with_preferences(ScannerPreferences::default())
    }

    pub fn with_preferences(preferences: ScannerPreferences) -> Self {
        Self {
            metrics: PerformanceMetrics::new(EngineModel::lookahead()),
            preferences,
        }
    }

    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    fn route(&mut self, class: CharClass, chars: &[char], pos: usize) -> RouteResult {
        // Dispatch-table read
        self.metrics.increment_memory_accesses(1);

        match class {
            CharClass::Digit => process_number(chars, pos),
            CharClass::Letter => process_identifier(chars, pos),
            CharClass::Operator => process_operator(chars, pos),
            CharClass::Symbol => process_symbol(chars, pos),
            CharClass::Other => RouteResult {
                token: None,
                next: pos + 1,
            },
        }
    }

    fn match_pattern(&mut self, chars: &[char], machine: &PatternMachine) -> PatternMatchResult {
        let spec = machine.id.spec();
        self.metrics.increment_memory_accesses(PATTERN_ROUTING_READS);

        let mut state = ScanState::Start;
        let mut first_seen = false;

        for (pos, &c) in chars.iter().enumerate() {
            let cursor = Cursor::new(chars, pos);
            self.metrics.increment_memory_accesses(LOOKAHEAD_STEP_READS);

            let step = machine.step(state, c, &cursor);
            if step.flag_writes > 0 {
                first_seen = true;
                self.metrics.increment_memory_accesses(step.flag_writes);
            }
            if step.next != state {
                self.metrics.increment_state_transitions(1);
                state = step.next;
            }

            if state.is_accepting() {
                return PatternMatchResult::matched(spec);
            }

            if machine.should_stop_early(state, &cursor) {
                self.trace_early_exit(machine.id, pos, cursor.remaining());
                break;
            }
        }

        PatternMatchResult::not_matched(spec, first_seen, self.preferences.record_partial_matches)
    }

    fn trace_early_exit(&self, pattern: PatternId, position: usize, remaining: usize) {
        if self.preferences.log_scan_events {
            crate::log_debug!(code = codes::scanner::EARLY_TERMINATION,
                "Pattern scan stopped early",
                "pattern" => pattern,
                "position" => position,
                "remaining" => remaining
            );
        }
    }
}

impl Default for LookaheadScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for LookaheadScanner {
    fn kind(&self) -> EngineKind {
        EngineKind::Lookahead
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

            let class = classify(c);
            self.metrics.increment_memory_accesses(1);

            let routed = self.route(class, &chars, pos);
            if let Some(token) = routed.token {
                self.metrics.increment_state_transitions(1);
                tokens.push(token);
            }
            pos = routed.next;
        }

        timer.record(&mut self.metrics);
        trace_tokenize(self.kind(), &self.preferences, &tokens, &self.metrics);
        tokens
    }

    fn match_patterns(&mut self, text: &str) -> Vec<PatternMatchResult> {
        let timer = ScanTimer::start();
        let chars = to_chars(text);

        let results: Vec<PatternMatchResult> = PatternId::ALL
            .iter()
            .map(|&id| self.match_pattern(&chars, &machine_for(id)))
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

// ============================================================================
// TOKEN PROCESSORS
// ============================================================================

pub fn process_number(chars: &[char], pos: usize) -> RouteResult {
    let end = number_end(chars, pos);
    RouteResult {
        token: Some(Token::number(slice_text(chars, pos, end))),
        next: end,
    }
}

pub fn process_identifier(chars: &[char], pos: usize) -> RouteResult {
    let end = word_end(chars, pos);
    RouteResult {
        token: Some(Token::from_word(slice_text(chars, pos, end))),
        next: end,
    }
}

pub fn process_operator(chars: &[char], pos: usize) -> RouteResult {
    if double_equals_at(chars, pos) {
        return RouteResult {
            token: Some(Token::operator(DOUBLE_EQUALS)),
            next: pos + 2,
        };
    }

    RouteResult {
        token: chars.get(pos).map(|c| Token::operator(c.to_string())),
        next: pos + 1,
    }
}

pub fn process_symbol(chars: &[char], pos: usize) -> RouteResult {
    RouteResult {
        token: chars.get(pos).map(|&c| Token::symbol(c)),
        next: pos + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_processors() {
        let input = chars("x1 == 4.2;");

        let routed = process_identifier(&input, 0);
        assert_eq!(routed.token, Some(Token::identifier("x1")));
        assert_eq!(routed.next, 2);

        let routed = process_operator(&input, 3);
        assert_eq!(routed.token, Some(Token::operator("==")));
        assert_eq!(routed.next, 5);

        let routed = process_number(&input, 6);
        assert_eq!(routed.token.map(|t| t.kind), Some(TokenKind::Number));
        assert_eq!(routed.next, 9);

        let routed = process_symbol(&input, 9);
        assert_eq!(routed.token, Some(Token::symbol(';')));
    }

    #[test]
    fn test_tokenize_counts() {
        let mut scanner = LookaheadScanner::new();
        let tokens = scanner.tokenize("ab == 7 #");

        assert_eq!(tokens.len(), 3);
        assert_eq!(scanner.metrics().state_transitions(), 3);
        assert_eq!(scanner.metrics().memory_accesses(), 8);
    }

    #[test]
    fn test_match_counts() {
        let mut scanner = LookaheadScanner::new();
        scanner.match_patterns("ab cd");

        // ab/cd accepts at index 3; abcde/fghnm stops early at index 2
        assert_eq!(scanner.metrics().state_transitions(), 2 + 0 + 3 + 3);
        assert_eq!(scanner.metrics().memory_accesses(), 11 + 12 + 12 + 8);
    }

    #[test]
    fn test_early_termination_on_short_input() {
        let mut scanner = LookaheadScanner::new();
        let input = chars("xyz");

        let result = scanner.match_pattern(&input, &machine_for(PatternId::AbcdeFghnm));

        assert!(!result.matched);
        assert_eq!(scanner.metrics().memory_accesses(), 2 + 2);
    }

    #[test]
    fn test_no_early_termination_for_simple_pairs() {
        let mut scanner = LookaheadScanner::new();
        let input = chars("xyz");

        scanner.match_pattern(&input, &machine_for(PatternId::AbCd));
        assert_eq!(scanner.metrics().memory_accesses(), 2 + 3 * 2);
    }

    #[test]
    fn test_partial_when_first_literal_complete() {
        let mut scanner = LookaheadScanner::new();
        let results = scanner.match_patterns("begin abc only");

        let abc = &results[2];
        assert!(!abc.matched);
        assert_eq!(abc.matched_parts, vec!["abc"]);
        assert!(results[1].matched_parts.is_empty());
    }

    #[test]
    fn test_tokenize_cheaper_than_plain() {
        use crate::engines::PlainScanner;

        let input = "while (abc < def) sum = abcde + fghnm;";
        let mut plain = PlainScanner::new();
        let mut lookahead = LookaheadScanner::new();

        assert_eq!(plain.tokenize(input), lookahead.tokenize(input));
        assert!(
            lookahead.metrics().state_transitions() < plain.metrics().state_transitions()
        );
    }
}
