//! End-to-end processing of one hex-dump stream
//!
//! Header parse → sample stream assembly → effect → data section re-encode,
//! in one sequential pass. Output is written as it is produced, so a header
//! failure after records 1 and 2 were accepted leaves those two lines written.

use std::io::{BufRead, Write};

use tracing::info;

use crate::effects::{self, EffectRequest};
use crate::error::Result;
use crate::hexdump::{write_data_section, HexDumpReader};
use crate::wav::{assemble, parse_header, WavHeader};

/// What one run processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub header: WavHeader,

    /// Payload bytes actually received
    pub effective_size: usize,

    /// Data-section records written (header echo not included)
    pub records_written: usize,
}

/// Apply `request` to the hex-dumped WAV on `input`, writing the result to `output`
pub fn process<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    request: EffectRequest,
) -> Result<ProcessSummary> {
    let mut reader = HexDumpReader::new(input);

    let parsed = parse_header(&mut reader, output)?;
    let mut samples = assemble(&mut reader, &parsed)?;

    effects::apply(request, &parsed.header, samples.as_mut_bytes());

    let records_written = write_data_section(
        output,
        &parsed.data_chunk_record,
        parsed.header.data_size as usize,
        samples.as_bytes(),
    )?;
    output.flush()?;

    let summary = ProcessSummary {
        header: parsed.header,
        effective_size: samples.effective_size(),
        records_written,
    };
    info!(
        effect = %request.effect,
        milliseconds = request.milliseconds,
        channels = summary.header.channels,
        sample_rate = summary.header.sample_rate,
        effective_size = summary.effective_size,
        records = summary.records_written,
        input_lines = reader.lines_read(),
        "processing complete"
    );

    Ok(summary)
}
