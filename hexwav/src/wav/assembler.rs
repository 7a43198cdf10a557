//! Sample stream assembly
//!
//! Drains the records that follow the header into one contiguous payload
//! buffer. The buffer is seeded with the 4 payload bytes carried by the
//! header's `data` chunk record, then every full record contributes 16 bytes.
//! The first record that is not full ends the stream after contributing the
//! byte values it did carry (none at end of input).
//!
//! Captures sometimes carry one record more than the declared data size; the
//! buffer keeps those bytes so they are written back out unchanged.

use std::io::BufRead;

use tracing::{debug, warn};

use super::header::ParsedHeader;
use crate::error::{Error, Result};
use crate::hexdump::writer::PAYLOAD_OFFSET;
use crate::hexdump::HexDumpReader;

/// Upper bound on the up-front reservation; larger payloads grow on demand
const MAX_INITIAL_RESERVATION: usize = 64 * 1024 * 1024;

/// Reconstructed PCM payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    bytes: Vec<u8>,
}

impl SampleBuffer {
    /// Reserve room for a payload of `declared_size` bytes
    pub fn with_declared_size(declared_size: usize) -> Result<Self> {
        let reservation = declared_size.min(MAX_INITIAL_RESERVATION);
        let mut bytes = Vec::new();
        bytes.try_reserve(reservation).map_err(|e| {
            Error::Resource(format!(
                "cannot reserve {} bytes for samples: {}",
                reservation, e
            ))
        })?;
        Ok(Self { bytes })
    }

    /// Append decoded byte values
    pub fn extend_from_slice(&mut self, values: &[u8]) {
        self.bytes.extend_from_slice(values);
    }

    /// Number of bytes actually received
    pub fn effective_size(&self) -> usize {
        self.bytes.len()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

/// Read the rest of the input into a [`SampleBuffer`]
pub fn assemble<R: BufRead>(
    reader: &mut HexDumpReader<R>,
    parsed: &ParsedHeader,
) -> Result<SampleBuffer> {
    let declared = parsed.header.data_size as usize;
    let mut buffer = SampleBuffer::with_declared_size(declared)?;
    buffer.extend_from_slice(&parsed.data_chunk_record[PAYLOAD_OFFSET..]);

    let mut full_records = 0usize;
    loop {
        let scanned = reader.next_record()?;
        // For a short record the byte count is the token count minus the address
        buffer.extend_from_slice(scanned.record.bytes());
        if !scanned.record.is_full() {
            debug!(
                tail_bytes = scanned.record.len(),
                tokens = scanned.tokens,
                "sample stream ended"
            );
            break;
        }
        full_records += 1;
    }

    let effective = buffer.effective_size();
    debug!(full_records, effective, declared, "sample stream assembled");
    if effective > declared {
        warn!(
            extra = effective - declared,
            "input carries bytes beyond the declared data size"
        );
    } else if effective < declared {
        warn!(
            missing = declared - effective,
            "input ends before the declared data size"
        );
    }

    Ok(buffer)
}
