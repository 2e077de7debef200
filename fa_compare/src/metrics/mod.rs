//! Performance instrumentation for the scanning engines

pub mod model;
pub mod performance;

pub use model::EngineModel;
pub use performance::{PerformanceMetrics, ScanTimer};

/// Percentage by which `candidate` improves on `baseline`
///
/// Returns 0 when the baseline is 0. Negative values mean the candidate did
/// more work than the baseline.
pub fn reduction_percent(baseline: f64, candidate: f64) -> f64 {
    if baseline > 0.0 {
        (baseline - candidate) / baseline * 100.0
    } else {
        0.0
    }
}
