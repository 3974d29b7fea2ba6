//! Transition function δ: Q × Γ → Γ × {L,R} × (Q ∪ {halt})

use super::{State, Symbol};
use crate::MachineError;

/// Head movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Move left (decrement position)
    Left,

    /// Move right (increment position)
    Right,
}

impl Move {
    /// Apply move to a cursor index
    ///
    /// Returns `None` when moving left of cell 0 or right of `usize::MAX`.
    pub fn apply(&self, position: usize) -> Option<usize> {
        match self {
            Move::Left => position.checked_sub(1),
            Move::Right => position.checked_add(1),
        }
    }

    /// Encode as signed offset
    pub fn to_i8(&self) -> i8 {
        match self {
            Move::Left => -1,
            Move::Right => 1,
        }
    }
}

/// Target of a transition: a live state or the halt sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Continue in the given state
    State(State),

    /// Stop after applying this transition
    Halt,
}

/// Single transition rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Symbol written under the cursor
    pub write: Symbol,

    /// Cursor movement applied after the write
    pub movement: Move,

    /// Next state
    pub next: Next,
}

impl Transition {
    /// Const constructor used by table literals
    pub const fn new(write: Symbol, movement: Move, next: Next) -> Self {
        Self {
            write,
            movement,
            next,
        }
    }

    /// Whether this transition ends the run
    pub fn halts(&self) -> bool {
        self.next == Next::Halt
    }
}

/// One row of the table: the transitions for a state, indexed by symbol
pub type Row = [Transition; Symbol::COUNT];

/// Immutable transition table for a single-tape machine
///
/// Rows are indexed by state, columns by [`Symbol::index`].
#[derive(Debug, Clone, Copy)]
pub struct TransitionTable<const STATES: usize> {
    rows: [Row; STATES],
}

impl<const STATES: usize> TransitionTable<STATES> {
    /// Build a table from its rows
    pub const fn from_rows(rows: [Row; STATES]) -> Self {
        Self { rows }
    }

    /// Number of live states
    pub fn num_states(&self) -> usize {
        STATES
    }

    /// Look up the transition for (state, symbol)
    ///
    /// Returns `None` for a state outside the table.
    pub fn lookup(&self, state: State, symbol: Symbol) -> Option<&Transition> {
        self.rows
            .get(state as usize)
            .map(|row| &row[symbol.index()])
    }

    /// Check that every transition targets a live state or halts, and that
    /// at least one transition halts
    pub fn validate(&self) -> Result<(), MachineError> {
        let mut halting = 0usize;
        for (state, row) in self.rows.iter().enumerate() {
            for (column, transition) in row.iter().enumerate() {
                match transition.next {
                    Next::State(next) if next as usize >= STATES => {
                        return Err(MachineError::InvalidTable(format!(
                            "transition ({}, {:?}) targets state {} outside 0..{}",
                            state,
                            Symbol::ALL[column],
                            next,
                            STATES
                        )));
                    }
                    Next::State(_) => {}
                    Next::Halt => halting += 1,
                }
            }
        }

        if halting == 0 {
            return Err(MachineError::InvalidTable(
                "no transition reaches the halt state".to_string(),
            ));
        }
        Ok(())
    }
}

const fn tr(write: Symbol, movement: Move, next: State) -> Transition {
    Transition::new(write, movement, Next::State(next))
}

const fn halt(write: Symbol, movement: Move) -> Transition {
    Transition::new(write, movement, Next::Halt)
}

use self::Move::{Left as L, Right as R};
use super::Symbol::{Blank as E, One as O, Zero as Z};

/// Fixed table that rewrites a unary tally into its binary numeral
///
/// Expects the tally flanked by a `Blank` on the left and two `Blank`
/// terminators on the right, started on the first tally cell. On halt the
/// cursor sits on the most significant digit.
pub static BINARY_COUNTER: TransitionTable<7> = TransitionTable::from_rows([
    // 0: consume one tally mark
    [tr(E, L, 1), tr(E, L, 1), tr(E, L, 5)],
    // 1: increment the counter to the left
    [tr(O, L, 4), tr(Z, L, 1), tr(E, R, 2)],
    // 2, 3: shift the counter one cell right, carrying the previous symbol
    [tr(O, R, 3), tr(O, R, 2), tr(O, R, 0)],
    [tr(Z, R, 3), tr(Z, R, 2), tr(Z, R, 0)],
    // 4: rewind to the sentinel
    [tr(Z, L, 4), tr(O, L, 4), tr(E, R, 6)],
    // 5: rewind and halt on the first digit
    [tr(Z, L, 5), tr(O, L, 5), halt(E, R)],
    // 6: lift the leading one and shift the counter right
    [tr(E, R, 2), tr(E, R, 2), tr(E, R, 2)],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_apply() {
        assert_eq!(Move::Left.apply(3), Some(2));
        assert_eq!(Move::Right.apply(3), Some(4));
        assert_eq!(Move::Left.apply(0), None);
        assert_eq!(Move::Right.apply(usize::MAX), None);
        assert_eq!(Move::Left.to_i8(), -1);
    }

    #[test]
    fn test_binary_counter_is_valid() {
        BINARY_COUNTER.validate().unwrap();
        assert_eq!(BINARY_COUNTER.num_states(), 7);
    }

    #[test]
    fn test_only_state_five_halts() {
        for state in 0..7 {
            for symbol in Symbol::ALL {
                let transition = BINARY_COUNTER.lookup(state, symbol).unwrap();
                let expected = state == 5 && symbol == Symbol::Blank;
                assert_eq!(transition.halts(), expected, "({state}, {symbol:?})");
            }
        }
    }

    #[test]
    fn test_lookup_outside_table() {
        assert!(BINARY_COUNTER.lookup(7, Symbol::Zero).is_none());
    }

    #[test]
    fn test_validate_rejects_dangling_state() {
        let row = [tr(Z, R, 3), tr(Z, R, 0), halt(E, R)];
        let table = TransitionTable::from_rows([row]);
        assert!(matches!(
            table.validate(),
            Err(MachineError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_validate_rejects_table_without_halt() {
        let table = TransitionTable::from_rows([[tr(Z, R, 0), tr(O, R, 0), tr(E, L, 0)]]);
        assert!(table.validate().is_err());
    }
}
