//! Single hex-dump record codec
//!
//! One record is one line of text:
//!
//! ```text
//! 00000000: 52 49 46 46 24 08 00 00 57 41 56 45 66 6d 74 20 RIFF$...WAVEfmt
//! ```
//!
//! An 8-digit hex address, a colon and a space, up to 16 two-digit byte
//! values each followed by a space, then the character rendering of those
//! bytes. Short records are padded with three spaces per missing byte so the
//! character column always starts at the same offset.
//!
//! Decoding behaves like a streaming scanner: it counts every token it
//! matched (address, byte values, characters) and stops at the first one it
//! cannot match. Callers compare the count against [`FULL_RECORD_TOKENS`].

use std::fmt;
use std::io::Write;

use crate::error::{Error, Result};

/// Maximum number of byte values in one record
pub const RECORD_WIDTH: usize = 16;

/// Token count of a complete record: address + 16 bytes + 16 characters
pub const FULL_RECORD_TOKENS: usize = 1 + 2 * RECORD_WIDTH;

/// Maximum number of address digits
const ADDRESS_DIGITS: usize = 8;

/// Width of one byte slot ("hh ")
const SLOT_WIDTH: usize = 3;

/// Offset of the character column, relative to the first byte slot
const CHAR_COLUMN: usize = SLOT_WIDTH * RECORD_WIDTH;

/// One hex-dump record: an address and up to 16 byte values
///
/// The character rendering is derived from the bytes on demand and never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexRecord {
    address: u32,
    bytes: [u8; RECORD_WIDTH],
    len: usize,
}

impl HexRecord {
    /// Create a record from an address and up to 16 bytes
    pub fn new(address: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() > RECORD_WIDTH {
            return Err(Error::Encode(format!(
                "record holds at most {} bytes, got {}",
                RECORD_WIDTH,
                bytes.len()
            )));
        }

        let mut storage = [0u8; RECORD_WIDTH];
        storage[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            address,
            bytes: storage,
            len: bytes.len(),
        })
    }

    /// Record address
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Byte values carried by the record
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of byte values
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A record is full when it carries all 16 byte values
    pub fn is_full(&self) -> bool {
        self.len == RECORD_WIDTH
    }

    /// Character rendering of the bytes (non-printable bytes become `.`)
    pub fn rendered_chars(&self) -> String {
        self.bytes().iter().map(|&b| render_char(b)).collect()
    }
}

impl fmt::Display for HexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}: ", self.address)?;
        for byte in self.bytes() {
            write!(f, "{:02x} ", byte)?;
        }
        for _ in self.len..RECORD_WIDTH {
            f.write_str("   ")?;
        }
        f.write_str(&self.rendered_chars())
    }
}

/// Render one byte for the character column
///
/// Printable ASCII (space through tilde) renders as itself, anything else as `.`.
pub fn render_char(byte: u8) -> char {
    if (b' '..=b'~').contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Result of scanning one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// Address and the byte values that were recognized
    pub record: HexRecord,

    /// Raw characters from the character column (only scanned for full records)
    pub chars: Vec<u8>,

    /// Number of tokens matched before scanning stopped
    pub tokens: usize,
}

impl ScannedLine {
    /// Nothing matched (end of input or no address)
    pub fn nothing() -> Self {
        Self {
            record: HexRecord {
                address: 0,
                bytes: [0; RECORD_WIDTH],
                len: 0,
            },
            chars: Vec::new(),
            tokens: 0,
        }
    }

    /// Every token of a complete record matched
    pub fn is_full(&self) -> bool {
        self.tokens == FULL_RECORD_TOKENS
    }

    /// True when the character column at `offset` spells `expected`
    pub fn chars_match(&self, offset: usize, expected: &[u8]) -> bool {
        self.chars.get(offset..offset + expected.len()) == Some(expected)
    }
}

/// Decode one line of hex-dump text
///
/// Never fails: a malformed line simply reports fewer tokens. Characters are
/// only scanned once all 16 byte slots matched, so for a short record
/// `tokens - 1` is the number of byte values recognized.
pub fn decode_line(line: &[u8]) -> ScannedLine {
    let line = trim_line_ending(line);
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let line = &line[start..];

    let digits = line
        .iter()
        .take(ADDRESS_DIGITS)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if digits == 0 {
        return ScannedLine::nothing();
    }

    let address = line[..digits]
        .iter()
        .fold(0u32, |acc, &d| (acc << 4) | u32::from(hex_value(d)));

    let mut scanned = ScannedLine::nothing();
    scanned.record.address = address;
    scanned.tokens = 1;

    let mut pos = digits;
    if line.get(pos) != Some(&b':') {
        return scanned;
    }
    pos += 1;
    if line.get(pos) == Some(&b' ') {
        pos += 1;
    }
    let body = &line[pos..];

    let mut count = 0;
    while count < RECORD_WIDTH {
        match body.get(count * SLOT_WIDTH..).and_then(parse_slot) {
            Some(value) => {
                scanned.record.bytes[count] = value;
                count += 1;
            }
            None => break,
        }
    }
    scanned.record.len = count;
    scanned.tokens += count;

    if count == RECORD_WIDTH {
        scanned.chars = body
            .get(CHAR_COLUMN..)
            .unwrap_or(&[])
            .iter()
            .take(RECORD_WIDTH)
            .copied()
            .collect();
        scanned.tokens += scanned.chars.len();
    }

    scanned
}

/// Write one record followed by a newline
///
/// `bytes` must hold between 1 and 16 values; otherwise nothing is written.
pub fn encode_record<W: Write>(out: &mut W, address: u32, bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::Encode("record must hold at least one byte".to_string()));
    }
    let record = HexRecord::new(address, bytes)?;
    writeln!(out, "{}", record)?;
    Ok(())
}

/// Parse one "hh " slot; the slot may also end the line right after its digits
fn parse_slot(slot: &[u8]) -> Option<u8> {
    match slot {
        [hi, lo, rest @ ..]
            if hi.is_ascii_hexdigit()
                && lo.is_ascii_hexdigit()
                && rest.first().map_or(true, |&b| b == b' ') =>
        {
            Some((hex_value(*hi) << 4) | hex_value(*lo))
        }
        _ => None,
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

fn trim_line_ending(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}
