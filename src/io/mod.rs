//! Byte-stream shell around the core
//!
//! Input items are bytes; only their count matters. Output is the digit run
//! left on the tape after the machine halts.

use std::io::{BufRead, BufReader, Read, Write};

use crate::tape::Tape;
use crate::MachineError;

/// Count the bytes in `source` until end of stream
///
/// Interrupted reads are retried; any other read error is returned.
pub fn count_items<R: Read>(source: R) -> Result<usize, MachineError> {
    let mut reader = BufReader::new(source);
    let mut count = 0usize;
    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf.len(),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(MachineError::Io(e)),
        };
        if available == 0 {
            return Ok(count);
        }
        count += available;
        reader.consume(available);
    }
}

/// Write the digits starting at `index` to `sink`, returning how many were
/// written
pub fn emit_digits<W: Write>(tape: &Tape, index: usize, mut sink: W) -> Result<usize, MachineError> {
    let digits = tape.digits_from(index);
    sink.write_all(digits.as_bytes())?;
    sink.flush()?;
    Ok(digits.len())
}
