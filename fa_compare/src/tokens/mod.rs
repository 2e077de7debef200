//! Token system shared by all scanning engines
//!
//! Tokens are produced in left-to-right input order; whitespace never produces
//! a token. The textual rendering `[KIND: text]` is what reports print and
//! what engines are compared on.

pub mod token;

pub use token::{Token, TokenCounts, TokenKind};

/// Render a token sequence the way reports print it, one token per line
pub fn render_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}
