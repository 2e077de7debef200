//! Comparison report: per-engine runs, verdicts, metric rows and rendering

use super::ComparisonError;
use crate::config::ComparisonPreferences;
use crate::engines::EngineKind;
use crate::metrics::{reduction_percent, PerformanceMetrics};
use crate::patterns::{result::count_matches, PatternId, PatternMatchResult};
use crate::tokens::{Token, TokenCounts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// VERDICTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityVerdict {
    Maintained,
    Differs,
}

impl QualityVerdict {
    pub fn from_agreement(agree: bool) -> Self {
        if agree {
            QualityVerdict::Maintained
        } else {
            QualityVerdict::Differs
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityVerdict::Maintained => "MAINTAINED",
            QualityVerdict::Differs => "DIFFERS",
        }
    }
}

// ============================================================================
// ENGINE RUNS
// ============================================================================

/// Everything one engine produced for one input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineRun {
    pub engine: EngineKind,
    pub tokens: Vec<Token>,
    pub patterns: Vec<PatternMatchResult>,
    pub metrics: PerformanceMetrics,
}

impl EngineRun {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn match_count(&self) -> usize {
        count_matches(&self.patterns)
    }

    pub fn token_counts(&self) -> TokenCounts {
        TokenCounts::from_tokens(&self.tokens)
    }

    pub fn result_for(&self, pattern: PatternId) -> Option<&PatternMatchResult> {
        self.patterns.iter().find(|result| result.pattern == pattern)
    }

    fn matched(&self, pattern: PatternId) -> bool {
        self.result_for(pattern).is_some_and(|result| result.matched)
    }
}

// ============================================================================
// METRIC ROWS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricName {
    StateTransitions,
    MemoryAccesses,
    StorageSpaceBytes,
    MatchingTimeMs,
    TotalStates,
    TotalEdges,
}

impl MetricName {
    pub const ALL: [MetricName; 6] = [
        MetricName::StateTransitions,
        MetricName::MemoryAccesses,
        MetricName::StorageSpaceBytes,
        MetricName::MatchingTimeMs,
        MetricName::TotalStates,
        MetricName::TotalEdges,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricName::StateTransitions => "State Transitions",
            MetricName::MemoryAccesses => "Memory Accesses",
            MetricName::StorageSpaceBytes => "Storage Space (bytes)",
            MetricName::MatchingTimeMs => "Matching Time (ms)",
            MetricName::TotalStates => "Total States",
            MetricName::TotalEdges => "Total Edges",
        }
    }

    fn read(&self, metrics: &PerformanceMetrics) -> f64 {
        match self {
            MetricName::StateTransitions => metrics.state_transitions() as f64,
            MetricName::MemoryAccesses => metrics.memory_accesses() as f64,
            MetricName::StorageSpaceBytes => metrics.storage_space_bytes() as f64,
            MetricName::MatchingTimeMs => metrics.matching_time_ms(),
            MetricName::TotalStates => metrics.total_states() as f64,
            MetricName::TotalEdges => metrics.total_edges() as f64,
        }
    }

    fn format_value(&self, value: f64) -> String {
        match self {
            MetricName::MatchingTimeMs => format!("{:.4}", value),
            _ => format!("{:.0}", value),
        }
    }
}

/// One metric across the three engines, with the lookahead reduction
/// measured against the auxiliary-variable engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub metric: MetricName,
    pub fa: f64,
    pub xfa: f64,
    pub hfa: f64,
    pub reduction_percent: f64,
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub input: String,
    pub generated_at: DateTime<Utc>,
    pub runs: Vec<EngineRun>,
    pub lexical_quality: QualityVerdict,
    pub pattern_quality: QualityVerdict,
    pub metric_rows: Vec<MetricRow>,
}

impl ComparisonReport {
    pub fn from_runs(input: &str, runs: Vec<EngineRun>) -> Self {
        let lexical_agree = runs.windows(2).all(|pair| pair[0].tokens == pair[1].tokens);
        let pattern_agree = PatternId::ALL
            .iter()
            .all(|&pattern| runs_agree_on(&runs, pattern));

        let mut report = Self {
            input: input.to_string(),
            generated_at: Utc::now(),
            runs,
            lexical_quality: QualityVerdict::from_agreement(lexical_agree),
            pattern_quality: QualityVerdict::from_agreement(pattern_agree),
            metric_rows: Vec::new(),
        };
        report.metric_rows = MetricName::ALL
            .iter()
            .map(|&metric| report.metric_row(metric))
            .collect();
        report
    }

    pub fn run(&self, engine: EngineKind) -> Option<&EngineRun> {
        self.runs.iter().find(|run| run.engine == engine)
    }

    /// Patterns whose matched flag is not the same for every engine
    pub fn differing_patterns(&self) -> Vec<PatternId> {
        PatternId::ALL
            .iter()
            .copied()
            .filter(|&pattern| !runs_agree_on(&self.runs, pattern))
            .collect()
    }

    pub fn token_count(&self, engine: EngineKind) -> usize {
        self.run(engine).map(EngineRun::token_count).unwrap_or(0)
    }

    pub fn match_count(&self, engine: EngineKind) -> usize {
        self.run(engine).map(EngineRun::match_count).unwrap_or(0)
    }

    fn metric_value(&self, engine: EngineKind, metric: MetricName) -> f64 {
        self.run(engine)
            .map(|run| metric.read(&run.metrics))
            .unwrap_or(0.0)
    }

    fn metric_row(&self, metric: MetricName) -> MetricRow {
        let xfa = self.metric_value(EngineKind::AuxiliaryVariable, metric);
        let hfa = self.metric_value(EngineKind::Lookahead, metric);
        MetricRow {
            metric,
            fa: self.metric_value(EngineKind::Plain, metric),
            xfa,
            hfa,
            reduction_percent: reduction_percent(xfa, hfa),
        }
    }

    pub fn to_json(&self) -> Result<String, ComparisonError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable report; sections follow the preferences
    pub fn render_text(&self, preferences: &ComparisonPreferences) -> String {
        let mut out = String::new();

        out.push_str(&format!("=== Analysis: \"{}\" ===\n", self.input));

        if preferences.show_tokens {
            out.push_str("\n--- Lexical Analysis ---\n");
            for run in &self.runs {
                out.push_str(&format!(
                    "{} ({} tokens):\n",
                    run.engine.display_name(),
                    run.token_count()
                ));
                for token in &run.tokens {
                    out.push_str(&format!("  {}\n", token));
                }
            }
        }

        out.push_str("\n--- Pattern Matching ---\n");
        for pattern in PatternId::ALL {
            out.push_str(&format!("Pattern: {:<20}", pattern.label()));
            for run in &self.runs {
                let status = run
                    .result_for(pattern)
                    .map(PatternMatchResult::status_label)
                    .unwrap_or("NO MATCH");
                out.push_str(&format!(" {}: {:<8}", run.engine.short_name(), status));
            }
            out.push('\n');
        }

        if preferences.show_metrics {
            out.push_str("\n--- Performance Metrics ---\n");
            out.push_str(&format!(
                "{:<24}{:>12}{:>12}{:>12}{:>14}\n",
                "Metric", "FA", "XFA", "HFA", "HFA vs XFA"
            ));
            for row in &self.metric_rows {
                out.push_str(&format!(
                    "{:<24}{:>12}{:>12}{:>12}{:>13.2}%\n",
                    row.metric.label(),
                    row.metric.format_value(row.fa),
                    row.metric.format_value(row.xfa),
                    row.metric.format_value(row.hfa),
                    row.reduction_percent
                ));
            }
        }

        out.push_str("\n--- Summary ---\n");
        out.push_str(&format!(
            "Token Count: FA={}, XFA={}, HFA={}\n",
            self.token_count(EngineKind::Plain),
            self.token_count(EngineKind::AuxiliaryVariable),
            self.token_count(EngineKind::Lookahead)
        ));
        out.push_str(&format!(
            "Pattern Matches: FA={}, XFA={}, HFA={}\n",
            self.match_count(EngineKind::Plain),
            self.match_count(EngineKind::AuxiliaryVariable),
            self.match_count(EngineKind::Lookahead)
        ));
        out.push_str(&format!(
            "Lexical Analysis Quality: {}\n",
            self.lexical_quality.as_str()
        ));
        out.push_str(&format!(
            "Pattern Matching Quality: {}\n",
            self.pattern_quality.as_str()
        ));

        out
    }
}

fn runs_agree_on(runs: &[EngineRun], pattern: PatternId) -> bool {
    runs.windows(2)
        .all(|pair| pair[0].matched(pattern) == pair[1].matched(pattern))
}
