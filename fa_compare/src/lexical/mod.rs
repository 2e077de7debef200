//! Lexical building blocks shared by the scanning engines
//!
//! The engines differ in how they track progress and count work, but they all
//! agree on what a digit, a letter, an operator or a symbol is, and on where a
//! number or word run ends. Those rules live here.

pub mod classifier;

pub use classifier::{
    classify, double_equals_at, is_alphanumeric, is_digit, is_keyword, is_letter,
    is_number_char, is_operator_char, is_symbol_char, is_whitespace, number_end, slice_text,
    word_end, CharClass,
};

/// Convert input text to an indexable character buffer
pub fn to_chars(text: &str) -> Vec<char> {
    text.chars().collect()
}
