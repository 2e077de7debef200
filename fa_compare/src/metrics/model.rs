use crate::config::compile_time::model::{
    auxiliary, lookahead, plain, BYTES_PER_AUX_FLAG, BYTES_PER_EDGE, BYTES_PER_STATE,
};
use serde::{Deserialize, Serialize};

/// Static size of an engine's theoretical automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineModel {
    pub total_states: u64,
    pub total_edges: u64,
    pub storage_bytes: u64,
}

impl EngineModel {
    fn sized(total_states: u64, total_edges: u64, extra_bytes: u64) -> Self {
        Self {
            total_states,
            total_edges,
            storage_bytes: total_states * BYTES_PER_STATE
                + total_edges * BYTES_PER_EDGE
                + extra_bytes,
        }
    }

    pub fn plain() -> Self {
        Self::sized(plain::TOTAL_STATES, plain::TOTAL_EDGES, 0)
    }

    /// Pays for every auxiliary flag on top of its states and edges
    pub fn auxiliary() -> Self {
        Self::sized(
            auxiliary::TOTAL_STATES,
            auxiliary::TOTAL_EDGES,
            auxiliary::AUX_FLAG_COUNT * BYTES_PER_AUX_FLAG,
        )
    }

    pub fn lookahead() -> Self {
        Self::sized(
            lookahead::TOTAL_STATES,
            lookahead::TOTAL_EDGES,
            lookahead::ROUTER_BYTES,
        )
    }
}
