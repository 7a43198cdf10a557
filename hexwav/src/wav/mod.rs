//! WAV header parsing and sample stream assembly
//!
//! Only the canonical PCM layout is understood: `RIFF`/`WAVE`, a 16-byte `fmt `
//! chunk, then the `data` chunk, with no other chunks in between.

pub mod assembler;
pub mod header;

pub use assembler::{assemble, SampleBuffer};
pub use header::{parse_header, ParsedHeader, WavHeader};
