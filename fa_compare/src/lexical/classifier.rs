//! Stateless character classification shared by every engine
//!
//! Predicates never touch metrics; engines account for their own reads.

use crate::config::compile_time::lexical::{
    DOUBLE_EQUALS, KEYWORDS, OPERATOR_CHARS, SYMBOL_CHARS,
};

/// Router class of a non-whitespace character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Letter,
    Operator,
    Symbol,
    Other,
}

impl CharClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Digit => "DIGIT",
            CharClass::Letter => "LETTER",
            CharClass::Operator => "OPERATOR",
            CharClass::Symbol => "SYMBOL",
            CharClass::Other => "OTHER",
        }
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

pub fn is_alphanumeric(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

pub fn is_symbol_char(c: char) -> bool {
    SYMBOL_CHARS.contains(&c)
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Characters allowed inside a number run after its leading digit
pub fn is_number_char(c: char) -> bool {
    is_digit(c) || c == '.'
}

/// Classify in router priority order: digit, letter, operator, symbol
pub fn classify(c: char) -> CharClass {
    if is_digit(c) {
        CharClass::Digit
    } else if is_letter(c) {
        CharClass::Letter
    } else if is_operator_char(c) {
        CharClass::Operator
    } else if is_symbol_char(c) {
        CharClass::Symbol
    } else {
        CharClass::Other
    }
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

// ============================================================================
// RUN EXTENTS
// ============================================================================

/// End (exclusive) of the number run starting at `start`
pub fn number_end(chars: &[char], start: usize) -> usize {
    run_end(chars, start, is_number_char)
}

/// End (exclusive) of the alphanumeric word starting at `start`
pub fn word_end(chars: &[char], start: usize) -> usize {
    run_end(chars, start, is_alphanumeric)
}

fn run_end(chars: &[char], start: usize, accept: fn(char) -> bool) -> usize {
    let mut pos = start;
    while chars.get(pos).is_some_and(|&c| accept(c)) {
        pos += 1;
    }
    pos
}

/// Whether the two-character `==` operator begins at `pos`
pub fn double_equals_at(chars: &[char], pos: usize) -> bool {
    DOUBLE_EQUALS
        .chars()
        .enumerate()
        .all(|(offset, expected)| chars.get(pos + offset) == Some(&expected))
}

/// Collect `chars[start..end]` into an owned string
pub fn slice_text(chars: &[char], start: usize, end: usize) -> String {
    chars.get(start..end).map(|run| run.iter().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_predicates() {
        assert!(is_digit('7'));
        assert!(!is_digit('a'));
        assert!(is_letter('x'));
        assert!(is_letter('é'));
        assert!(!is_letter('_'));
        assert!(is_alphanumeric('9'));
        assert!(!is_alphanumeric('.'));
        assert!(is_whitespace('\t'));
    }

    #[test]
    fn test_operator_and_symbol_sets() {
        for c in ['+', '-', '*', '/', '=', '<', '>'] {
            assert!(is_operator_char(c), "{} should be an operator", c);
        }
        for c in ['(', ')', '{', '}', ';', ','] {
            assert!(is_symbol_char(c), "{} should be a symbol", c);
        }
        assert!(!is_operator_char('!'));
        assert!(!is_symbol_char('['));
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify('3'), CharClass::Digit);
        assert_eq!(classify('q'), CharClass::Letter);
        assert_eq!(classify('<'), CharClass::Operator);
        assert_eq!(classify('{'), CharClass::Symbol);
        assert_eq!(classify('\''), CharClass::Other);
        assert_eq!(classify('.'), CharClass::Other);
    }

    #[test]
    fn test_keywords() {
        for word in ["if", "else", "while", "return", "int", "float", "char"] {
            assert!(is_keyword(word));
        }
        assert!(!is_keyword("for"));
    }

    #[test]
    fn test_run_extents() {
        let input = chars("42.5.1+x1y ");
        assert_eq!(number_end(&input, 0), 6);
        assert_eq!(word_end(&input, 7), 10);
        assert_eq!(slice_text(&input, 7, 10), "x1y");
        assert_eq!(number_end(&input, 11), 11);
    }

    #[test]
    fn test_double_equals() {
        let input = chars("a == b =");
        assert!(double_equals_at(&input, 2));
        assert!(!double_equals_at(&input, 3));
        assert!(!double_equals_at(&input, 7));
        assert!(!double_equals_at(&input, 100));
        assert_eq!(slice_text(&input, 2, 2 + DOUBLE_EQUALS.len()), DOUBLE_EQUALS);
    }

    #[test]
    fn test_slice_text_out_of_range_is_empty() {
        let input = chars("abc");
        assert_eq!(slice_text(&input, 2, 9), "");
    }
}
