use std::fmt;

/// Machine state while matching one pattern
///
/// Every pattern machine starts in `Start` and stops at `Accept`. The
/// `Found*` states track progress through the first literal, the
/// `LookingFor*` states progress through one of the two literals.
/// Reaching the state where the first literal is complete replaces the
/// separate "first part found" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanState {
    Start,
    FoundA,
    FoundAb,
    FoundAbc,
    FoundAbcd,
    FoundAbcde,
    LookingForD,
    LookingForE,
    LookingForF,
    LookingForG,
    LookingForH,
    LookingForFghnm,
    Accept,
}

impl ScanState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanState::Start => "START",
            ScanState::FoundA => "FOUND_A",
            ScanState::FoundAb => "FOUND_AB",
            ScanState::FoundAbc => "FOUND_ABC",
            ScanState::FoundAbcd => "FOUND_ABCD",
            ScanState::FoundAbcde => "FOUND_ABCDE",
            ScanState::LookingForD => "LOOKING_FOR_D",
            ScanState::LookingForE => "LOOKING_FOR_E",
            ScanState::LookingForF => "LOOKING_FOR_F",
            ScanState::LookingForG => "LOOKING_FOR_G",
            ScanState::LookingForH => "LOOKING_FOR_H",
            ScanState::LookingForFghnm => "LOOKING_FOR_FGHNM",
            ScanState::Accept => "ACCEPT",
        }
    }

    pub fn is_accepting(&self) -> bool {
        matches!(self, ScanState::Accept)
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
