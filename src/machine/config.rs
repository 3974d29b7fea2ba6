//! Configuration (instantaneous description) of the machine
//!
//! Represents the transient state of one run:
//! - Control state q ∈ Q
//! - Cursor index into the tape
//!
//! The tape itself is borrowed from the caller and is not part of the
//! configuration.

use super::{Move, State, Transition};
use crate::MachineError;

/// Control state and cursor position during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Current control state
    state: State,

    /// Cursor index into the tape
    cursor: usize,

    /// Transitions applied so far
    steps: u64,
}

impl Configuration {
    /// Create the initial configuration: state 0 at `start_index`
    pub fn initial(start_index: usize) -> Self {
        Self {
            state: 0,
            cursor: start_index,
            steps: 0,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get cursor index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of transitions applied
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Move the cursor and count the step
    ///
    /// The state is left untouched; a halting transition has no successor
    /// state. Fails if the cursor would move left of cell 0 or past the
    /// largest addressable index.
    pub fn advance(&mut self, transition: &Transition) -> Result<(), MachineError> {
        let (state, step) = (self.state, self.steps);
        self.cursor = transition
            .movement
            .apply(self.cursor)
            .ok_or(match transition.movement {
                Move::Left => MachineError::CursorUnderflow { state, step },
                Move::Right => MachineError::CursorOverflow { state, step },
            })?;
        self.steps += 1;
        Ok(())
    }

    /// Set state (for transitions)
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }
}
