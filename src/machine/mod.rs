//! Single-tape automaton representation and execution
//!
//! Provides abstractions for a deterministic single-tape machine:
//! - Three-symbol alphabet Γ = {0, 1, blank}
//! - Finite state set Q, indexed from 0
//! - Deterministic transition function δ with a distinguished halt target
//!
//! The engine owns no tape memory; it borrows a [`Tape`] for the run and
//! keeps only a constant-size [`Configuration`].

mod config;
mod transition;

pub use config::Configuration;
pub use transition::{Move, Next, Row, Transition, TransitionTable, BINARY_COUNTER};

use crate::tape::Tape;
use crate::{MachineError, RunConfig, RunSummary};
use tracing::{debug, trace};

/// Machine state (element of Q)
pub type State = u32;

/// Tape symbol (element of Γ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Binary digit 0, also the unary tally mark
    Zero = 0,

    /// Binary digit 1
    One = 1,

    /// End-marker and unmarked cell
    Blank = 2,
}

impl Symbol {
    /// Size of the alphabet
    pub const COUNT: usize = 3;

    /// All symbols in column order
    pub const ALL: [Symbol; Symbol::COUNT] = [Symbol::Zero, Symbol::One, Symbol::Blank];

    /// Column of this symbol in a transition table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Output digit for this symbol; `Blank` has none
    pub fn digit(self) -> Option<char> {
        match self {
            Symbol::Zero => Some('0'),
            Symbol::One => Some('1'),
            Symbol::Blank => None,
        }
    }
}

/// Executes a transition table against a borrowed tape
#[derive(Debug, Clone, Copy)]
pub struct Engine<'t, const STATES: usize> {
    table: &'t TransitionTable<STATES>,
    config: RunConfig,
}

impl Engine<'static, 7> {
    /// Engine over [`BINARY_COUNTER`] with the default run configuration
    pub fn binary_counter() -> Self {
        Self::new(&BINARY_COUNTER, RunConfig::default())
    }
}

impl<'t, const STATES: usize> Engine<'t, STATES> {
    /// Create an engine for `table`
    pub fn new(table: &'t TransitionTable<STATES>, config: RunConfig) -> Self {
        Self { table, config }
    }

    /// Run configuration in use
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute one transition: read, write back, move, change state
    ///
    /// Returns `true` when the applied transition halts the machine. The
    /// halting move is applied before returning.
    pub fn step(&self, config: &mut Configuration, tape: &mut Tape) -> Result<bool, MachineError> {
        // 1. Read symbol under the cursor
        let symbol = tape.read(config.cursor());

        // 2. Look up transition
        let transition = *self.table.lookup(config.state(), symbol).ok_or_else(|| {
            MachineError::InvalidTable(format!(
                "no row for state {} ({} states)",
                config.state(),
                STATES
            ))
        })?;

        if self.config.trace_steps {
            trace!(
                step = config.steps(),
                state = config.state(),
                cursor = config.cursor(),
                read = ?symbol,
                write = ?transition.write,
                movement = transition.movement.to_i8(),
                "step"
            );
        }

        // 3. Write back and move
        tape.write(config.cursor(), transition.write)?;
        config.advance(&transition)?;

        // 4. Change state
        match transition.next {
            Next::State(next) => {
                config.set_state(next);
                Ok(false)
            }
            Next::Halt => Ok(true),
        }
    }

    /// Run from state 0 at the configured start index until the machine halts
    ///
    /// There is no loop detection: a table that never halts runs forever
    /// unless `max_steps` is set.
    pub fn run(&self, tape: &mut Tape) -> Result<RunSummary, MachineError> {
        let start = self.config.start_index;
        if start >= tape.len() {
            return Err(MachineError::InvalidStart {
                index: start,
                len: tape.len(),
            });
        }

        debug!(start, len = tape.len(), "starting run");

        let mut config = Configuration::initial(start);
        let mut rightmost_cursor = start;
        loop {
            if let Some(limit) = self.config.max_steps {
                if config.steps() >= limit {
                    return Err(MachineError::StepLimitExceeded { limit });
                }
            }

            let halted = self.step(&mut config, tape)?;
            rightmost_cursor = rightmost_cursor.max(config.cursor());
            if halted {
                break;
            }
        }

        let summary = RunSummary {
            final_index: config.cursor(),
            steps: config.steps(),
            rightmost_cursor,
            final_len: tape.len(),
        };
        debug!(
            final_index = summary.final_index,
            steps = summary.steps,
            fingerprint = %tape.fingerprint().to_hex(),
            "halted"
        );
        Ok(summary)
    }
}
