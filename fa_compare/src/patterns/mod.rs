//! The fixed literal-pair pattern catalog
//!
//! A pattern matches when its first literal occurs and its second literal
//! occurs later. The four patterns are closed: engines dispatch on
//! [`PatternId`] rather than on pattern text.

pub mod result;

pub use result::PatternMatchResult;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternId {
    AbCd,
    EfGh,
    AbcDef,
    AbcdeFghnm,
}

impl PatternId {
    /// Catalog order
    pub const ALL: [PatternId; 4] = [
        PatternId::AbCd,
        PatternId::EfGh,
        PatternId::AbcDef,
        PatternId::AbcdeFghnm,
    ];

    pub fn spec(&self) -> &'static PatternSpec {
        match self {
            PatternId::AbCd => &AB_CD,
            PatternId::EfGh => &EF_GH,
            PatternId::AbcDef => &ABC_DEF,
            PatternId::AbcdeFghnm => &ABCDE_FGHNM,
        }
    }

    /// Display form used by reports, e.g. `.*ab.*cd`
    pub fn label(&self) -> &'static str {
        match self {
            PatternId::AbCd => ".*ab.*cd",
            PatternId::EfGh => ".*ef.*gh",
            PatternId::AbcDef => ".*abc.*def",
            PatternId::AbcdeFghnm => ".*abcde.*fghnm",
        }
    }

    pub fn complexity(&self) -> PatternComplexity {
        match self {
            PatternId::AbCd | PatternId::EfGh => PatternComplexity::SimplePair,
            PatternId::AbcDef => PatternComplexity::MediumPair,
            PatternId::AbcdeFghnm => PatternComplexity::ComplexPair,
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Routing class the lookahead engine assigns to a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternComplexity {
    /// Two-character literals
    SimplePair,
    /// Three-character literals
    MediumPair,
    /// Five-character literals
    ComplexPair,
}

/// Immutable pair of literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpec {
    pub id: PatternId,
    pub first: &'static str,
    pub second: &'static str,
}

impl PatternSpec {
    pub fn first_len(&self) -> usize {
        self.first.chars().count()
    }

    pub fn second_len(&self) -> usize {
        self.second.chars().count()
    }

    pub fn first_at(&self, chars: &[char], pos: usize) -> bool {
        literal_at(chars, pos, self.first)
    }

    pub fn second_at(&self, chars: &[char], pos: usize) -> bool {
        literal_at(chars, pos, self.second)
    }
}

const AB_CD: PatternSpec = PatternSpec {
    id: PatternId::AbCd,
    first: "ab",
    second: "cd",
};

const EF_GH: PatternSpec = PatternSpec {
    id: PatternId::EfGh,
    first: "ef",
    second: "gh",
};

const ABC_DEF: PatternSpec = PatternSpec {
    id: PatternId::AbcDef,
    first: "abc",
    second: "def",
};

const ABCDE_FGHNM: PatternSpec = PatternSpec {
    id: PatternId::AbcdeFghnm,
    first: "abcde",
    second: "fghnm",
};

/// Every pattern, in the order results are reported
pub const CATALOG: [PatternSpec; 4] = [AB_CD, EF_GH, ABC_DEF, ABCDE_FGHNM];

/// Whether `literal` occurs in `chars` starting at `pos`; never reads out of range
pub fn literal_at(chars: &[char], pos: usize, literal: &str) -> bool {
    let mut offset = pos;
    for expected in literal.chars() {
        if chars.get(offset) != Some(&expected) {
            return false;
        }
        offset += 1;
    }
    true
}

/// Start positions at which a literal of `literal_len` characters fits
pub fn candidate_positions(
    input_len: usize,
    from: usize,
    literal_len: usize,
) -> std::ops::Range<usize> {
    let end = (input_len + 1).saturating_sub(literal_len);
    from..end.max(from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<PatternId> = CATALOG.iter().map(|spec| spec.id).collect();
        assert_eq!(ids, PatternId::ALL.to_vec());

        let pairs: Vec<(&str, &str)> = CATALOG.iter().map(|s| (s.first, s.second)).collect();
        assert_eq!(
            pairs,
            vec![("ab", "cd"), ("ef", "gh"), ("abc", "def"), ("abcde", "fghnm")]
        );
    }

    #[test]
    fn test_spec_lookup_is_consistent() {
        for id in PatternId::ALL {
            assert_eq!(id.spec().id, id);
        }
    }

    #[test]
    fn test_labels_and_complexity() {
        assert_eq!(PatternId::AbcDef.label(), ".*abc.*def");
        assert_eq!(PatternId::EfGh.to_string(), ".*ef.*gh");
        assert_eq!(PatternId::AbCd.complexity(), PatternComplexity::SimplePair);
        assert_eq!(
            PatternId::AbcdeFghnm.complexity(),
            PatternComplexity::ComplexPair
        );
    }

    #[test]
    fn test_literal_at_bounds() {
        let input = chars("xxabc");
        assert!(literal_at(&input, 2, "abc"));
        assert!(!literal_at(&input, 3, "abc"));
        assert!(!literal_at(&input, 4, "cd"));
        assert!(!literal_at(&input, 50, "a"));
    }

    #[test]
    fn test_candidate_positions() {
        assert_eq!(candidate_positions(5, 0, 2), 0..4);
        assert_eq!(candidate_positions(5, 3, 2), 3..4);
        assert_eq!(candidate_positions(5, 4, 2), 4..4);
        assert!(candidate_positions(1, 0, 2).is_empty());
        assert!(candidate_positions(0, 0, 5).is_empty());
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&PatternId::AbcdeFghnm).unwrap();
        assert_eq!(json, "\"ABCDE_FGHNM\"");
    }
}
