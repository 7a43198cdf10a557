//! Data section re-encoder
//!
//! Walks the sample buffer and emits it as hex-dump records starting at
//! [`DATA_SECTION_ADDRESS`], the position of the header's `data` chunk record.
//!
//! # Layout
//!
//! - First record: the 12 header bytes of the `data` chunk record followed by
//!   the first 4 bytes of the buffer.
//! - Following records: 16 buffer bytes each, addresses advancing by `0x10`.
//! - Last record: whatever is left (fewer than 16 bytes).
//!
//! The records share one 16-byte line buffer. The last record only refreshes
//! the bytes that still lie inside the declared data size; any other slot it
//! emits keeps the value of the previously emitted record.

use std::io::Write;

use tracing::debug;

use super::record::{encode_record, RECORD_WIDTH};
use crate::error::Result;

/// Address of the first data-section record
pub const DATA_SECTION_ADDRESS: u32 = 0x20;

/// Address increment between records
const ADDRESS_STEP: u32 = 0x10;

/// Offset of the first payload byte inside the `data` chunk record
pub const PAYLOAD_OFFSET: usize = 12;

/// Write the data section
///
/// # Arguments
/// * `out` - Output stream
/// * `data_chunk_record` - The 16 bytes of the header's `data` chunk record
/// * `data_size` - Declared payload size from the header
/// * `samples` - Reconstructed payload (its length is the effective size)
///
/// # Returns
/// Number of records written
pub fn write_data_section<W: Write>(
    out: &mut W,
    data_chunk_record: &[u8; RECORD_WIDTH],
    data_size: usize,
    samples: &[u8],
) -> Result<usize> {
    let effective_size = samples.len();
    let mut line = *data_chunk_record;
    let mut address = DATA_SECTION_ADDRESS;

    let mut written = (RECORD_WIDTH - PAYLOAD_OFFSET).min(effective_size);
    line[PAYLOAD_OFFSET..PAYLOAD_OFFSET + written].copy_from_slice(&samples[..written]);
    encode_record(out, address, &line)?;
    let mut records = 1;

    while written < effective_size {
        address = address.wrapping_add(ADDRESS_STEP);
        let remaining = effective_size - written;

        if remaining >= RECORD_WIDTH {
            line.copy_from_slice(&samples[written..written + RECORD_WIDTH]);
            encode_record(out, address, &line)?;
            written += RECORD_WIDTH;
        } else {
            let fresh = data_size.saturating_sub(written).min(remaining);
            line[..fresh].copy_from_slice(&samples[written..written + fresh]);
            encode_record(out, address, &line[..remaining])?;
            written = effective_size;
        }
        records += 1;
    }

    debug!(records, effective_size, data_size, "data section written");
    Ok(records)
}
