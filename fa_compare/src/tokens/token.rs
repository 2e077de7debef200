//! Token kinds and classified tokens
//!
//! Every engine produces the same five token kinds; the only difference between
//! engines is how they arrive at them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical class of an emitted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Digit followed by a run of digits and `.`
    Number,
    Identifier,
    /// Word found in the fixed keyword set
    Keyword,
    /// Single operator character or `==`
    Operator,
    Symbol,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Symbol => "SYMBOL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable classified token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, text)
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, text)
    }

    pub fn operator(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, text)
    }

    pub fn symbol(ch: char) -> Self {
        Self::new(TokenKind::Symbol, ch.to_string())
    }

    /// Keyword or identifier depending on the fixed keyword set
    pub fn from_word(word: String) -> Self {
        if crate::lexical::is_keyword(&word) {
            Self::new(TokenKind::Keyword, word)
        } else {
            Self::new(TokenKind::Identifier, word)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.kind, self.text)
    }
}

/// Distribution of token kinds in one tokenization result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    pub total: usize,
    pub numbers: usize,
    pub identifiers: usize,
    pub keywords: usize,
    pub operators: usize,
    pub symbols: usize,
}

impl TokenCounts {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = TokenCounts::default();
        for token in tokens {
            counts.total += 1;
            match token.kind {
                TokenKind::Number => counts.numbers += 1,
                TokenKind::Identifier => counts.identifiers += 1,
                TokenKind::Keyword => counts.keywords += 1,
                TokenKind::Operator => counts.operators += 1,
                TokenKind::Symbol => counts.symbols += 1,
            }
        }
        counts
    }

    /// Check if tokenization found any words at all
    pub fn has_words(&self) -> bool {
        self.keywords > 0 || self.identifiers > 0
    }
}
