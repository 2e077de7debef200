use super::{PatternId, PatternSpec};
use serde::{Deserialize, Serialize};

/// Outcome of matching one catalog pattern against an input
///
/// A successful result always carries exactly `[first, second]`. A failed
/// result carries `[first]` when the first literal was seen and partial
/// recording is enabled, otherwise nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatchResult {
    pub matched: bool,
    pub pattern: PatternId,
    pub matched_parts: Vec<String>,
}

impl PatternMatchResult {
    pub fn matched(spec: &PatternSpec) -> Self {
        Self {
            matched: true,
            pattern: spec.id,
            matched_parts: vec![spec.first.to_string(), spec.second.to_string()],
        }
    }

    pub fn not_matched(spec: &PatternSpec, first_seen: bool, record_partial: bool) -> Self {
        let matched_parts = if first_seen && record_partial {
            vec![spec.first.to_string()]
        } else {
            Vec::new()
        };

        Self {
            matched: false,
            pattern: spec.id,
            matched_parts,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.matched {
            "MATCH"
        } else {
            "NO MATCH"
        }
    }
}

/// Number of matched patterns in a result set
pub fn count_matches(results: &[PatternMatchResult]) -> usize {
    results.iter().filter(|result| result.matched).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::CATALOG;

    #[test]
    fn test_matched_carries_both_parts() {
        let result = PatternMatchResult::matched(&CATALOG[2]);
        assert!(result.matched);
        assert_eq!(result.pattern, PatternId::AbcDef);
        assert_eq!(result.matched_parts, vec!["abc", "def"]);
        assert_eq!(result.status_label(), "MATCH");
    }

    #[test]
    fn test_partial_parts() {
        let spec = &CATALOG[0];
        assert_eq!(
            PatternMatchResult::not_matched(spec, true, true).matched_parts,
            vec!["ab"]
        );
        assert!(PatternMatchResult::not_matched(spec, true, false)
            .matched_parts
            .is_empty());
        assert!(PatternMatchResult::not_matched(spec, false, true)
            .matched_parts
            .is_empty());
    }

    #[test]
    fn test_count_matches() {
        let results = vec![
            PatternMatchResult::matched(&CATALOG[0]),
            PatternMatchResult::not_matched(&CATALOG[1], false, true),
            PatternMatchResult::matched(&CATALOG[3]),
        ];
        assert_eq!(count_matches(&results), 2);
    }
}
