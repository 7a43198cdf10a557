//! Line-by-line record reader over any buffered input

use std::io::BufRead;

use tracing::trace;

use super::record::{decode_line, ScannedLine};
use crate::error::Result;

/// Pulls hex-dump records from a buffered reader
///
/// Blank lines between records are skipped. At end of input the reader keeps
/// returning a zero-token [`ScannedLine`].
pub struct HexDumpReader<R> {
    inner: R,
    line: Vec<u8>,
    lines_read: usize,
}

impl<R: BufRead> HexDumpReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::with_capacity(80),
            lines_read: 0,
        }
    }

    /// Scan the next record
    pub fn next_record(&mut self) -> Result<ScannedLine> {
        loop {
            self.line.clear();
            if self.inner.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(ScannedLine::nothing());
            }
            self.lines_read += 1;

            if self.line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }

            let scanned = decode_line(&self.line);
            trace!(
                line = self.lines_read,
                address = scanned.record.address(),
                tokens = scanned.tokens,
                "scanned record"
            );
            return Ok(scanned);
        }
    }

    /// Number of input lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}
