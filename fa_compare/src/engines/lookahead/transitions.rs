//! Per-pattern transition functions for the lookahead engine
//!
//! Each catalog pattern has its own machine. When the leading character of a
//! literal is seen, the machine peeks ahead and jumps straight past the whole
//! literal if it is there. Otherwise it walks the literal one state at a time.
//! A `LookingFor*` state that sees an unexpected character falls back to the
//! "first literal complete" state instead of restarting, except on the first
//! literal's leading character (`a` or `e`), which re-enters the first literal
//! and discards the progress made so far.

use super::state::ScanState;
use crate::config::compile_time::lookahead::EARLY_TERMINATION_WINDOW;
use crate::patterns::{literal_at, PatternComplexity, PatternId};

/// Read-only view of the input at the character being stepped
pub struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(chars: &'a [char], pos: usize) -> Self {
        Self { chars, pos }
    }

    /// Whether `literal` begins at the current character
    pub fn starts(&self, literal: &str) -> bool {
        literal_at(self.chars, self.pos, literal)
    }

    /// Characters from the current one to the end of input
    pub fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.pos)
    }
}

/// Outcome of one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: ScanState,
    /// Accesses spent recording that the first literal is complete
    pub flag_writes: u64,
}

impl Step {
    fn to(next: ScanState) -> Self {
        Self {
            next,
            flag_writes: 0,
        }
    }

    fn first_part(next: ScanState, flag_writes: u64) -> Self {
        Self { next, flag_writes }
    }
}

pub type TransitionFn = fn(ScanState, char, &Cursor<'_>) -> Step;

/// Transition function plus routing decisions for one pattern
#[derive(Clone, Copy)]
pub struct PatternMachine {
    pub id: PatternId,
    pub transition: TransitionFn,
    /// Stop scanning once idle in `Start` with fewer characters than this left
    pub early_exit_window: Option<usize>,
}

impl PatternMachine {
    pub fn step(&self, state: ScanState, c: char, cursor: &Cursor<'_>) -> Step {
        (self.transition)(state, c, cursor)
    }

    pub fn should_stop_early(&self, state: ScanState, cursor: &Cursor<'_>) -> bool {
        match self.early_exit_window {
            Some(window) => state == ScanState::Start && cursor.remaining() < window,
            None => false,
        }
    }
}

/// Route a pattern to its machine by complexity class
pub fn machine_for(id: PatternId) -> PatternMachine {
    let transition: TransitionFn = match id {
        PatternId::AbCd => ab_cd,
        PatternId::EfGh => ef_gh,
        PatternId::AbcDef => abc_def,
        PatternId::AbcdeFghnm => abcde_fghnm,
    };

    let early_exit_window = match id.complexity() {
        PatternComplexity::ComplexPair => Some(EARLY_TERMINATION_WINDOW),
        PatternComplexity::SimplePair | PatternComplexity::MediumPair => None,
    };

    PatternMachine {
        id,
        transition,
        early_exit_window,
    }
}

// ============================================================================
// PATTERN MACHINES
// ============================================================================
//
// States a machine never reaches fall through to "stay".

fn ab_cd(state: ScanState, c: char, cursor: &Cursor<'_>) -> Step {
    let spec = PatternId::AbCd.spec();
    match (state, c) {
        (ScanState::Start, 'a') if cursor.starts(spec.first) => {
            Step::first_part(ScanState::FoundAb, 1)
        }
        (ScanState::Start, 'a') => Step::to(ScanState::FoundA),
        (ScanState::Start, _) => Step::to(ScanState::Start),

        (ScanState::FoundA, 'b') => Step::first_part(ScanState::FoundAb, 2),
        (ScanState::FoundA, 'a') => Step::to(ScanState::FoundA),
        (ScanState::FoundA, _) => Step::to(ScanState::Start),

        (ScanState::FoundAb, 'c') if cursor.starts(spec.second) => Step::to(ScanState::Accept),
        (ScanState::FoundAb, 'c') => Step::to(ScanState::LookingForD),
        (ScanState::FoundAb, 'a') => Step::to(ScanState::FoundA),
        (ScanState::FoundAb, _) => Step::to(ScanState::FoundAb),

        (ScanState::LookingForD, 'd') => Step::to(ScanState::Accept),
        (ScanState::LookingForD, 'a') => Step::to(ScanState::FoundA),
        (ScanState::LookingForD, _) => Step::to(ScanState::FoundAb),

        (other, _) => Step::to(other),
    }
}

fn ef_gh(state: ScanState, c: char, cursor: &Cursor<'_>) -> Step {
    let spec = PatternId::EfGh.spec();
    match (state, c) {
        (ScanState::Start, 'e') if cursor.starts(spec.first) => {
            Step::first_part(ScanState::LookingForG, 1)
        }
        (ScanState::Start, 'e') => Step::to(ScanState::LookingForF),
        (ScanState::Start, _) => Step::to(ScanState::Start),

        (ScanState::LookingForF, 'f') => Step::first_part(ScanState::LookingForG, 1),
        (ScanState::LookingForF, 'e') => Step::to(ScanState::LookingForF),
        (ScanState::LookingForF, _) => Step::to(ScanState::Start),

        (ScanState::LookingForG, 'g') if cursor.starts(spec.second) => {
            Step::to(ScanState::Accept)
        }
        (ScanState::LookingForG, 'g') => Step::to(ScanState::LookingForH),
        (ScanState::LookingForG, 'e') => Step::to(ScanState::LookingForF),
        (ScanState::LookingForG, _) => Step::to(ScanState::LookingForG),

        (ScanState::LookingForH, 'h') => Step::to(ScanState::Accept),
        (ScanState::LookingForH, 'e') => Step::to(ScanState::LookingForF),
        (ScanState::LookingForH, _) => Step::to(ScanState::LookingForG),

        (other, _) => Step::to(other),
    }
}

fn abc_def(state: ScanState, c: char, cursor: &Cursor<'_>) -> Step {
    let spec = PatternId::AbcDef.spec();
    match (state, c) {
        (ScanState::Start, 'a') if cursor.starts(spec.first) => {
            Step::first_part(ScanState::FoundAbc, 1)
        }
        (ScanState::Start, 'a') => Step::to(ScanState::FoundA),
        (ScanState::Start, _) => Step::to(ScanState::Start),

        (ScanState::FoundA, 'b') => Step::to(ScanState::FoundAb),
        (ScanState::FoundAb, 'c') => Step::first_part(ScanState::FoundAbc, 1),
        (ScanState::FoundA | ScanState::FoundAb, 'a') => Step::to(ScanState::FoundA),
        (ScanState::FoundA | ScanState::FoundAb, _) => Step::to(ScanState::Start),

        (ScanState::FoundAbc, 'd') if cursor.starts(spec.second) => Step::to(ScanState::Accept),
        (ScanState::FoundAbc, 'd') => Step::to(ScanState::LookingForE),
        (ScanState::FoundAbc, 'a') => Step::to(ScanState::FoundA),
        (ScanState::FoundAbc, _) => Step::to(ScanState::FoundAbc),

        (ScanState::LookingForE, 'e') => Step::to(ScanState::LookingForF),
        (ScanState::LookingForF, 'f') => Step::to(ScanState::Accept),
        (ScanState::LookingForE | ScanState::LookingForF, 'a') => Step::to(ScanState::FoundA),
        (ScanState::LookingForE | ScanState::LookingForF, _) => Step::to(ScanState::FoundAbc),

        (other, _) => Step::to(other),
    }
}

fn abcde_fghnm(state: ScanState, c: char, cursor: &Cursor<'_>) -> Step {
    let spec = PatternId::AbcdeFghnm.spec();
    match (state, c) {
        (ScanState::Start, 'a') if cursor.starts(spec.first) => {
            Step::first_part(ScanState::FoundAbcde, 1)
        }
        (ScanState::Start, 'a') => Step::to(ScanState::FoundA),
        (ScanState::Start, _) => Step::to(ScanState::Start),

        (ScanState::FoundA, 'b') => Step::to(ScanState::FoundAb),
        (ScanState::FoundAb, 'c') => Step::to(ScanState::FoundAbc),
        (ScanState::FoundAbc, 'd') => Step::to(ScanState::FoundAbcd),
        (ScanState::FoundAbcd, 'e') => Step::first_part(ScanState::FoundAbcde, 1),
        (
            ScanState::FoundA | ScanState::FoundAb | ScanState::FoundAbc | ScanState::FoundAbcd,
            'a',
        ) => Step::to(ScanState::FoundA),
        (
            ScanState::FoundA | ScanState::FoundAb | ScanState::FoundAbc | ScanState::FoundAbcd,
            _,
        ) => Step::to(ScanState::Start),

        (ScanState::FoundAbcde, 'f') if cursor.starts(spec.second) => {
            Step::to(ScanState::Accept)
        }
        (ScanState::FoundAbcde, 'f') => Step::to(ScanState::LookingForG),
        (ScanState::FoundAbcde, 'a') => Step::to(ScanState::FoundA),
        (ScanState::FoundAbcde, _) => Step::to(ScanState::FoundAbcde),

        (ScanState::LookingForG, 'g') => Step::to(ScanState::LookingForH),
        (ScanState::LookingForH, 'h') => Step::to(ScanState::LookingForFghnm),
        (ScanState::LookingForFghnm, 'n') => Step::to(ScanState::LookingForFghnm),
        (ScanState::LookingForFghnm, 'm') => Step::to(ScanState::Accept),
        (
            ScanState::LookingForG | ScanState::LookingForH | ScanState::LookingForFghnm,
            'a',
        ) => Step::to(ScanState::FoundA),
        (
            ScanState::LookingForG | ScanState::LookingForH | ScanState::LookingForFghnm,
            _,
        ) => Step::to(ScanState::FoundAbcde),

        (other, _) => Step::to(other),
    }
}
