pub mod compile_time {
    pub mod lexical {
        /// Reserved words recognized as KEYWORD tokens
        pub const KEYWORDS: [&str; 7] = ["if", "else", "while", "return", "int", "float", "char"];

        /// Single-character operators
        pub const OPERATOR_CHARS: [char; 7] = ['+', '-', '*', '/', '=', '<', '>'];

        /// Single-character punctuation symbols
        pub const SYMBOL_CHARS: [char; 6] = ['(', ')', '{', '}', ';', ','];

        /// The only two-character operator
        pub const DOUBLE_EQUALS: &str = "==";
    }

    pub mod model {
        /// Modeled bytes per automaton state
        pub const BYTES_PER_STATE: u64 = 32;

        /// Modeled bytes per automaton edge
        pub const BYTES_PER_EDGE: u64 = 16;

        /// Modeled bytes per auxiliary boolean flag
        pub const BYTES_PER_AUX_FLAG: u64 = 8;

        pub mod plain {
            /// DFA states for the combined token and pattern recognizer
            pub const TOTAL_STATES: u64 = 10;
            pub const TOTAL_EDGES: u64 = 45;
        }

        pub mod auxiliary {
            /// Extra states come from auxiliary-variable combinations
            pub const TOTAL_STATES: u64 = 18;
            pub const TOTAL_EDGES: u64 = 64;

            /// Four classification flags plus two progress flags per pattern
            pub const AUX_FLAG_COUNT: u64 = 12;
        }

        pub mod lookahead {
            pub const TOTAL_STATES: u64 = 12;
            pub const TOTAL_EDGES: u64 = 36;

            /// Fixed cost of the classify-then-dispatch router tables
            pub const ROUTER_BYTES: u64 = 128;
        }
    }

    pub mod costs {
        /// Flag checks performed by the auxiliary scanner per examined character
        pub const AUX_TOKEN_FLAG_CHECKS: u64 = 2;

        /// Flags cleared before each classification step
        pub const AUX_CLASSIFICATION_FLAGS: u64 = 4;

        /// Progress flags cleared before each pattern scan
        pub const AUX_PATTERN_FLAGS: u64 = 2;

        /// Flag reads per index during an auxiliary pattern scan
        pub const AUX_PATTERN_INDEX_CHECKS: u64 = 3;

        /// Current state plus lookahead window, read per character
        pub const LOOKAHEAD_STEP_READS: u64 = 2;
    }

    pub mod lookahead {
        /// A five-plus-five literal pair needs at least this many characters left
        /// once the machine is idle in START.
        pub const EARLY_TERMINATION_WINDOW: usize = 10;
    }

    pub mod logging {
        /// Maximum events kept by in-memory sinks
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum length of a single message before truncation
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4_096;
    }
}
