//! Per-engine performance counters

use super::model::EngineModel;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Counters owned by exactly one engine instance
///
/// The model numbers (`storage_space_bytes`, `total_states`, `total_edges`)
/// are fixed at construction. Only transitions, accesses and time are
/// counters, and only those are cleared by [`PerformanceMetrics::reset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    state_transitions: u64,
    memory_accesses: u64,
    storage_space_bytes: u64,
    total_states: u64,
    total_edges: u64,
    matching_time_ms: f64,
}

impl PerformanceMetrics {
    pub fn new(model: EngineModel) -> Self {
        Self {
            state_transitions: 0,
            memory_accesses: 0,
            storage_space_bytes: model.storage_bytes,
            total_states: model.total_states,
            total_edges: model.total_edges,
            matching_time_ms: 0.0,
        }
    }

    pub fn increment_state_transitions(&mut self, count: u64) {
        self.state_transitions += count;
    }

    pub fn increment_memory_accesses(&mut self, count: u64) {
        self.memory_accesses += count;
    }

    /// Add elapsed milliseconds to the running total
    pub fn set_matching_time(&mut self, add_ms: f64) {
        self.matching_time_ms += add_ms;
    }

    pub fn reset(&mut self) {
        self.state_transitions = 0;
        self.memory_accesses = 0;
        self.matching_time_ms = 0.0;
    }

    pub fn state_transitions(&self) -> u64 {
        self.state_transitions
    }

    pub fn memory_accesses(&self) -> u64 {
        self.memory_accesses
    }

    pub fn storage_space_bytes(&self) -> u64 {
        self.storage_space_bytes
    }

    pub fn total_states(&self) -> u64 {
        self.total_states
    }

    pub fn total_edges(&self) -> u64 {
        self.total_edges
    }

    pub fn matching_time_ms(&self) -> f64 {
        self.matching_time_ms
    }
}

/// Monotonic stopwatch around one tokenize or match call
pub struct ScanTimer {
    started: Instant,
}

impl ScanTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Stop the timer and accumulate into `metrics`
    pub fn record(self, metrics: &mut PerformanceMetrics) {
        metrics.set_matching_time(self.elapsed_ms());
    }
}
