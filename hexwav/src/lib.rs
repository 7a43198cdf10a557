//! # hexwav
//!
//! Applies simple amplitude-envelope effects to WAV audio carried as a
//! hex-dump text stream.
//!
//! **Purpose:** Parse `address: bytes  chars` records, validate the embedded
//! WAV header, rebuild the PCM payload, apply fade-in, fade-out or pan, and
//! write the result back out in the same record format.
//!
//! **Architecture:** Single sequential pass, see [`pipeline::process`]:
//! - `hexdump`: record codec, reader and data-section writer
//! - `wav`: header parser and sample stream assembler
//! - `effects`: fade-in, fade-out and pan on 16-bit PCM
//! - `config`: TOML bootstrap configuration

pub mod config;
pub mod effects;
pub mod error;
pub mod hexdump;
pub mod pipeline;
pub mod wav;

pub use effects::{Effect, EffectRequest};
pub use error::{Error, Result};
pub use pipeline::{process, ProcessSummary};
