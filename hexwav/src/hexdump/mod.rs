//! Hex-dump text format
//!
//! **Components:**
//! - `record`: single-line codec (decode with token counting, fixed-width encode)
//! - `reader`: pulls records from buffered input
//! - `writer`: re-encodes the sample buffer as the data section

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::HexDumpReader;
pub use record::{
    decode_line, encode_record, render_char, HexRecord, ScannedLine, FULL_RECORD_TOKENS,
    RECORD_WIDTH,
};
pub use writer::{write_data_section, DATA_SECTION_ADDRESS};
