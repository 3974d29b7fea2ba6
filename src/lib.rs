//! # Unary-to-binary counting on a single-tape automaton
//!
//! This library counts input items in unary on a tape and runs a fixed
//! 7-state, 3-symbol transition table that rewrites the tally into its
//! binary numeral, most significant digit first.
//!
//! ## Pipeline
//!
//! 1. **Tally**: count the input items (content is discarded)
//! 2. **Tape**: `Blank` sentinel, one `Zero` per item, two `Blank` terminators
//! 3. **Run**: execute [`BINARY_COUNTER`] from cell 1 until it halts
//! 4. **Decode**: read digits from the halting cursor up to the first `Blank`
//!
//! ## Usage Example
//!
//! ```
//! use tally::{build_tape, run};
//!
//! let mut tape = build_tape(6)?;
//! let index = run(&mut tape, 1)?;
//! assert_eq!(tape.digits_from(index), "110");
//! # Ok::<(), tally::MachineError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod io;      // Byte-stream shell
pub mod machine; // Symbols, transition table, engine
pub mod tape;    // Growable tape store

// Re-exports for convenience
pub use machine::{
    Configuration, Engine, Move, Next, State, Symbol, Transition, TransitionTable, BINARY_COUNTER,
};
pub use tape::{build_tape, Tape};

use thiserror::Error;

/// Configuration parameters for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Cell the cursor starts on (1: the first tally cell)
    pub start_index: usize,

    /// Abort after this many transitions (unbounded when `None`)
    pub max_steps: Option<u64>,

    /// Emit a `trace` event per transition
    pub trace_steps: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_index: 1,
            max_steps: None,
            trace_steps: false,
        }
    }
}

impl RunConfig {
    /// Start the cursor on `index`
    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Bound the number of transitions
    pub fn with_max_steps(mut self, limit: u64) -> Self {
        self.max_steps = Some(limit);
        self
    }

    /// Toggle per-step tracing
    pub fn with_trace_steps(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }
}

/// Result of a halted run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cursor index after the halting move
    pub final_index: usize,

    /// Transitions applied, including the halting one
    pub steps: u64,

    /// Rightmost cursor index reached
    pub rightmost_cursor: usize,

    /// Occupied tape length at halt
    pub final_len: usize,
}

/// Errors that can occur while building or running a tape
///
/// Every variant is terminal for the run.
#[derive(Error, Debug)]
pub enum MachineError {
    /// Growing the tape buffer failed
    #[error("Tape allocation failed for {requested} cells")]
    Allocation {
        /// Cells the tape needed to hold
        requested: usize,
    },

    /// A transition moved the cursor left of cell 0
    #[error("Cursor moved left of cell 0 in state {state} at step {step}")]
    CursorUnderflow {
        /// State whose transition moved left
        state: State,
        /// Transitions applied before the failing one
        step: u64,
    },

    /// A transition moved the cursor past the largest addressable index
    #[error("Cursor moved past the last addressable cell in state {state} at step {step}")]
    CursorOverflow {
        /// State whose transition moved right
        state: State,
        /// Transitions applied before the failing one
        step: u64,
    },

    /// Start index outside the occupied tape
    #[error("Start index {index} outside tape of length {len}")]
    InvalidStart {
        /// Requested start index
        index: usize,
        /// Occupied tape length
        len: usize,
    },

    /// Run did not halt within the configured bound
    #[error("Machine did not halt within {limit} steps")]
    StepLimitExceeded {
        /// Configured bound
        limit: u64,
    },

    /// Malformed transition table
    #[error("Invalid transition table: {0}")]
    InvalidTable(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run [`BINARY_COUNTER`] on `tape` from `start_index`, returning the final
/// cursor index
pub fn run(tape: &mut Tape, start_index: usize) -> Result<usize, MachineError> {
    let engine = Engine::new(
        &BINARY_COUNTER,
        RunConfig::default().with_start_index(start_index),
    );
    Ok(engine.run(tape)?.final_index)
}

/// Tally `count`, run the counter, and decode the binary numeral
///
/// Zero yields the empty string.
pub fn count_to_binary(count: usize) -> Result<String, MachineError> {
    let mut tape = build_tape(count)?;
    let summary = Engine::binary_counter().run(&mut tape)?;
    Ok(tape.digits_from(summary.final_index))
}
