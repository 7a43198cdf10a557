//! WAV header parsing from the first three hex-dump records
//!
//! **Record layout** (canonical 44-byte PCM header, 16 bytes per record):
//!
//! | Record | Offsets | Content                                        |
//! |--------|---------|------------------------------------------------|
//! | 1      | 0-3     | `RIFF`                                         |
//! | 1      | 8-15    | `WAVEfmt `                                     |
//! | 2      | 6-7     | channel count (LE u16)                         |
//! | 2      | 8-11    | sample rate (LE u32)                           |
//! | 3      | 0-1     | block align, bytes per frame (LE u16)          |
//! | 3      | 4-7     | `data`                                         |
//! | 3      | 8-11    | declared data size (LE u32)                    |
//! | 3      | 12-15   | first 4 payload bytes                          |
//!
//! Marker checks look at the character column of each record. Records 1 and 2
//! are echoed to the output as soon as they are accepted; record 3 is carried
//! forward and re-emitted by the data-section writer.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::hexdump::{encode_record, HexDumpReader, ScannedLine, FULL_RECORD_TOKENS, RECORD_WIDTH};

/// Frame sizes the effect engine can handle
const SUPPORTED_BYTES_PER_SAMPLE: [u16; 2] = [2, 4];

/// Fields extracted from the WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Channel count
    pub channels: u16,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Declared byte count of the PCM payload
    pub data_size: u32,

    /// Bytes per sample frame across all channels (2 or 4)
    pub bytes_per_sample: u16,
}

/// Header fields plus the raw `data` chunk record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub header: WavHeader,

    /// Bytes of header record 3; its last 4 bytes are the start of the payload
    pub data_chunk_record: [u8; RECORD_WIDTH],
}

/// Consume and validate the three header records
///
/// Any record that does not scan completely, or fails its marker check, is a
/// [`Error::Format`]. Records already echoed before the failure stay written.
pub fn parse_header<R: BufRead, W: Write>(
    reader: &mut HexDumpReader<R>,
    out: &mut W,
) -> Result<ParsedHeader> {
    let riff = read_full_record(reader, 1)?;
    check_riff_record(&riff)?;
    encode_record(out, riff.record.address(), riff.record.bytes())?;

    let format = read_full_record(reader, 2)?;
    let (channels, sample_rate) = extract_format(&format);
    encode_record(out, format.record.address(), format.record.bytes())?;

    let data = read_full_record(reader, 3)?;
    let (data_size, bytes_per_sample) = extract_data_chunk(&data)?;

    let header = WavHeader {
        channels,
        sample_rate,
        data_size,
        bytes_per_sample,
    };
    validate(&header)?;

    debug!(
        channels,
        sample_rate, data_size, bytes_per_sample, "WAV header accepted"
    );

    let mut data_chunk_record = [0u8; RECORD_WIDTH];
    data_chunk_record.copy_from_slice(data.record.bytes());

    Ok(ParsedHeader {
        header,
        data_chunk_record,
    })
}

fn read_full_record<R: BufRead>(reader: &mut HexDumpReader<R>, index: usize) -> Result<ScannedLine> {
    let scanned = reader.next_record()?;
    if scanned.tokens != FULL_RECORD_TOKENS {
        return Err(Error::format(format!(
            "header record {} is incomplete ({} of {} tokens)",
            index, scanned.tokens, FULL_RECORD_TOKENS
        )));
    }
    Ok(scanned)
}

/// Record 1 must carry the `RIFF` and `WAVEfmt ` markers
pub fn check_riff_record(scanned: &ScannedLine) -> Result<()> {
    if !scanned.chars_match(0, b"RIFF") {
        return Err(Error::format("missing RIFF marker"));
    }
    if !scanned.chars_match(8, b"WAVEfmt ") {
        return Err(Error::format("missing WAVEfmt marker"));
    }
    Ok(())
}

/// Record 2: channel count and sample rate
pub fn extract_format(scanned: &ScannedLine) -> (u16, u32) {
    let b = scanned.record.bytes();
    let channels = u16::from_le_bytes([b[6], b[7]]);
    let sample_rate = u32::from_le_bytes([b[8], b[9], b[10], b[11]]);
    (channels, sample_rate)
}

/// Record 3: `data` marker, declared data size and bytes per sample frame
pub fn extract_data_chunk(scanned: &ScannedLine) -> Result<(u32, u16)> {
    if !scanned.chars_match(4, b"data") {
        return Err(Error::format("missing data chunk marker"));
    }
    let b = scanned.record.bytes();
    let data_size = u32::from_le_bytes([b[8], b[9], b[10], b[11]]);
    let bytes_per_sample = u16::from_le_bytes([b[0], b[1]]);
    Ok((data_size, bytes_per_sample))
}

fn validate(header: &WavHeader) -> Result<()> {
    if !SUPPORTED_BYTES_PER_SAMPLE.contains(&header.bytes_per_sample) {
        return Err(Error::format(format!(
            "unsupported bytes per sample: {}",
            header.bytes_per_sample
        )));
    }
    if header.channels == 0 {
        return Err(Error::format("channel count is zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RECORD_1: &str =
        "00000000: 52 49 46 46 24 08 00 00 57 41 56 45 66 6d 74 20 RIFF$...WAVEfmt \n";
    const RECORD_2: &str =
        "00000010: 10 00 00 00 01 00 02 00 44 ac 00 00 10 b1 02 00 ........D.......\n";
    const RECORD_3: &str =
        "00000020: 04 00 10 00 64 61 74 61 00 08 00 00 01 02 03 04 ....data........\n";

    fn parse(input: &str) -> (Result<ParsedHeader>, String) {
        let mut reader = HexDumpReader::new(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        let result = parse_header(&mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_valid_header() {
        let input = format!("{}{}{}", RECORD_1, RECORD_2, RECORD_3);
        let (result, echoed) = parse(&input);
        let parsed = result.unwrap();

        assert_eq!(
            parsed.header,
            WavHeader {
                channels: 2,
                sample_rate: 44100,
                data_size: 0x800,
                bytes_per_sample: 4,
            }
        );
        assert_eq!(&parsed.data_chunk_record[12..], &[1, 2, 3, 4]);
        // Records 1 and 2 echoed verbatim, record 3 held back
        assert_eq!(echoed, format!("{}{}", RECORD_1, RECORD_2));
    }

    #[test]
    fn test_missing_riff_marker() {
        let bad = RECORD_1.replace("52 49 46 46", "52 49 46 58").replace("RIFF", "RIFX");
        let (result, echoed) = parse(&format!("{}{}{}", bad, RECORD_2, RECORD_3));

        assert!(matches!(result, Err(Error::Format(_))));
        assert!(echoed.is_empty());
    }

    #[test]
    fn test_missing_wavefmt_marker() {
        let bad = RECORD_1.replace("WAVEfmt ", "WAVEfmtX");
        let (result, _) = parse(&format!("{}{}{}", bad, RECORD_2, RECORD_3));
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_missing_data_marker_after_echo() {
        let bad = RECORD_3.replace("....data", "....list");
        let (result, echoed) = parse(&format!("{}{}{}", RECORD_1, RECORD_2, bad));

        assert!(matches!(result, Err(Error::Format(_))));
        assert_eq!(echoed, format!("{}{}", RECORD_1, RECORD_2));
    }

    #[test]
    fn test_truncated_header_record() {
        let (result, _) = parse(&format!("{}00000010: 10 00 00 00\n", RECORD_1));
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_empty_input() {
        let (result, echoed) = parse("");
        assert!(matches!(result, Err(Error::Format(_))));
        assert!(echoed.is_empty());
    }

    #[test]
    fn test_unsupported_bytes_per_sample() {
        let bad = RECORD_3.replacen("04 00", "03 00", 1);
        let (result, _) = parse(&format!("{}{}{}", RECORD_1, RECORD_2, bad));
        match result {
            Err(Error::Format(msg)) => assert!(msg.contains("bytes per sample")),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_channels_rejected() {
        let bad = RECORD_2.replacen("01 00 02 00", "01 00 00 00", 1);
        let (result, _) = parse(&format!("{}{}{}", RECORD_1, bad, RECORD_3));
        assert!(matches!(result, Err(Error::Format(_))));
    }
}
