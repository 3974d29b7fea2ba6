//! Tape store: a contiguous, growable run of tri-valued cells
//!
//! Cells are addressed by index from a logical origin at cell 0, which holds
//! a permanent `Blank` sentinel. Occupied length and allocated capacity are
//! tracked separately:
//! - appending a tally cell doubles capacity when the buffer is full
//! - the two terminators are topped up with a fixed slack of 2
//! - capacity never shrinks
//!
//! Writes past the occupied length extend the tape with `Blank` cells, and
//! reads past it observe `Blank`, so the cursor may wander right without
//! touching unowned memory.

use crate::machine::Symbol;
use crate::MachineError;

/// Cells reserved for the run terminators after the tally
pub const TERMINATOR_SLACK: usize = 2;

/// Growable tape of [`Symbol`] cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Symbol>,
}

impl Tape {
    /// Create a tape holding only the left sentinel
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(1);
        cells.push(Symbol::Blank);
        Self { cells }
    }

    /// Build the run input for `count`: sentinel, `count` tally marks, and
    /// two terminators
    pub fn with_count(count: usize) -> Result<Self, MachineError> {
        let mut tape = Self::new();
        for _ in 0..count {
            tape.append(Symbol::Zero)?;
        }
        tape.reserve_slack(TERMINATOR_SLACK)?;
        tape.append(Symbol::Blank)?;
        tape.append(Symbol::Blank)?;
        Ok(tape)
    }

    /// Append one cell, doubling capacity when the buffer is full
    pub fn append(&mut self, symbol: Symbol) -> Result<(), MachineError> {
        if self.cells.len() == self.cells.capacity() {
            let additional = self.cells.capacity().max(1);
            self.grow(additional)?;
        }
        self.cells.push(symbol);
        Ok(())
    }

    /// Ensure room for `slack` more cells without doubling
    pub fn reserve_slack(&mut self, slack: usize) -> Result<(), MachineError> {
        let free = self.cells.capacity() - self.cells.len();
        if free < slack {
            self.grow(slack)?;
        }
        Ok(())
    }

    fn grow(&mut self, additional: usize) -> Result<(), MachineError> {
        self.cells
            .try_reserve_exact(additional)
            .map_err(|_| MachineError::Allocation {
                requested: self.cells.len().saturating_add(additional),
            })
    }

    /// Occupied length
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells are occupied (never true for a tape built by `new`)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Allocated capacity in cells
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    /// Occupied cells
    pub fn as_slice(&self) -> &[Symbol] {
        &self.cells
    }

    /// Bounds-checked read within the occupied region
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied()
    }

    /// Read a cell, observing `Blank` past the occupied region
    pub fn read(&self, index: usize) -> Symbol {
        self.get(index).unwrap_or(Symbol::Blank)
    }

    /// Write a cell, extending the tape with `Blank` up to `index` if needed
    pub fn write(&mut self, index: usize, symbol: Symbol) -> Result<(), MachineError> {
        while self.cells.len() <= index {
            self.append(Symbol::Blank)?;
        }
        self.cells[index] = symbol;
        Ok(())
    }

    /// Decode the digit run starting at `index`
    ///
    /// Stops at the first `Blank` or at the end of the occupied region.
    pub fn digits_from(&self, index: usize) -> String {
        self.cells
            .get(index..)
            .unwrap_or_default()
            .iter()
            .map_while(|symbol| symbol.digit())
            .collect()
    }

    /// Number of tally marks between the sentinel and the first terminator
    pub fn tally_len(&self) -> usize {
        self.cells
            .iter()
            .skip(1)
            .take_while(|&&symbol| symbol == Symbol::Zero)
            .count()
    }

    /// BLAKE3 digest of the occupied cells
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for symbol in &self.cells {
            hasher.update(&[symbol.index() as u8]);
        }
        hasher.finalize()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the tape for a unary count
pub fn build_tape(count: usize) -> Result<Tape, MachineError> {
    Tape::with_count(count)
}
