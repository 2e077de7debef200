//! Event emission through the global logger
//!
//! The global logger can be installed once per process, so a single test
//! owns the whole sequence.

use fa_compare::comparison::{self, EngineRun};
use fa_compare::logging::{self, codes, Code, LogLevel, LoggingService, MemoryLogger};
use fa_compare::{compare_engines, ComparisonReport, ScannerPreferences};
use std::sync::Arc;

const INPUTS: [&str; 2] = ["abcde fghm", "xyz"];

fn preferences(log_scan_events: bool) -> ScannerPreferences {
    ScannerPreferences {
        log_scan_events,
        record_partial_matches: true,
    }
}

fn compare_all(preferences: &ScannerPreferences) -> Vec<ComparisonReport> {
    INPUTS
        .iter()
        .map(|input| compare_engines(input, preferences))
        .collect()
}

fn assert_same_runs(expected: &[ComparisonReport], actual: &[ComparisonReport]) {
    for (expected, actual) in expected.iter().zip(actual) {
        assert_eq!(expected.pattern_quality, actual.pattern_quality);
        for (a, b) in expected.runs.iter().zip(&actual.runs) {
            assert_same_run(a, b);
        }
    }
}

fn assert_same_run(expected: &EngineRun, actual: &EngineRun) {
    assert_eq!(expected.engine, actual.engine);
    assert_eq!(expected.tokens, actual.tokens);
    assert_eq!(expected.patterns, actual.patterns);
    assert_eq!(
        expected.metrics.state_transitions(),
        actual.metrics.state_transitions()
    );
    assert_eq!(
        expected.metrics.memory_accesses(),
        actual.metrics.memory_accesses()
    );
}

fn counts(memory: &MemoryLogger, codes: &[Code]) -> Vec<usize> {
    codes.iter().map(|&code| memory.count_with_code(code)).collect()
}

#[test]
fn test_scan_events_reach_global_logger() {
    assert!(!logging::is_initialized());
    let unlogged = compare_all(&preferences(true));

    let memory = Arc::new(MemoryLogger::new());
    let service = LoggingService::new(memory.clone(), LogLevel::Debug);
    logging::init_global_logging_with_service(Arc::new(service)).unwrap();
    assert!(logging::is_initialized());
    assert!(logging::init_global_logging_with_service(Arc::new(LoggingService::new(
        Arc::new(MemoryLogger::new()),
        LogLevel::Debug,
    )))
    .is_err());

    let traced = [
        codes::scanner::TOKENIZE_CALL,
        codes::scanner::MATCH_CALL,
        codes::scanner::EARLY_TERMINATION,
    ];
    let harness = [
        codes::comparison::PATTERN_RESULTS_DIFFER,
        codes::success::TOKENIZATION_COMPLETE,
        codes::success::PATTERN_MATCHING_COMPLETE,
        codes::success::COMPARISON_COMPLETE,
    ];

    // One tokenize and one match trace per engine and input; only "xyz"
    // is short enough to stop the lookahead scan early
    let logged = compare_all(&preferences(true));
    assert_eq!(counts(&memory, &traced), vec![6, 6, 1]);
    assert_eq!(counts(&memory, &harness), vec![1, 6, 6, 2]);
    assert_same_runs(&unlogged, &logged);

    let differs = memory
        .get_events()
        .into_iter()
        .find(|event| event.code == codes::comparison::PATTERN_RESULTS_DIFFER)
        .unwrap();
    assert_eq!(differs.level, LogLevel::Warning);
    assert_eq!(
        differs.context.get("patterns").map(String::as_str),
        Some(".*abcde.*fghnm")
    );

    memory.clear();
    let quiet = compare_all(&preferences(false));
    assert_eq!(counts(&memory, &traced), vec![0, 0, 0]);
    assert_eq!(counts(&memory, &harness), vec![1, 6, 6, 2]);
    assert_same_runs(&unlogged, &quiet);

    memory.clear();
    comparison::run_batch(&INPUTS, &preferences(false));
    let cases: Vec<Option<String>> = memory
        .get_events()
        .into_iter()
        .filter(|event| event.code == codes::success::COMPARISON_COMPLETE)
        .map(|event| event.context.get("case").cloned())
        .collect();
    assert_eq!(cases, vec![Some("0".to_string()), Some("1".to_string())]);
    assert_eq!(memory.count_with_code(codes::success::BATCH_COMPLETE), 1);
}
