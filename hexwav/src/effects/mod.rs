//! Amplitude-envelope effects on 16-bit PCM
//!
//! The sample buffer is treated as little-endian signed 16-bit samples,
//! interleaved by channel. Only the declared data size is processed; bytes
//! received past it pass through untouched.
//!
//! # Effects
//!
//! - **Fade-in**: linear ramp from silence over the first N frames
//! - **Fade-out**: linear ramp to silence over the last N frames
//! - **Pan**: sweeps the stereo image from left to right over the first N
//!   frames, then silences the rest of the file
//!
//! N is the duration converted to frames at the file's sample rate, clamped to
//! the frames available. All scaling is done in `f64` and truncated toward
//! zero when narrowed back to `i16`.

mod fade;
mod pan;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::wav::WavHeader;

pub use fade::{fade_in, fade_out};
pub use pan::pan;

/// Effect selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FadeIn,
    FadeOut,
    Pan,
}

impl Effect {
    /// Command-line selector for this effect
    pub fn selector(&self) -> &'static str {
        match self {
            Effect::FadeIn => "-fin",
            Effect::FadeOut => "-fout",
            Effect::Pan => "-pan",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Effect::FadeIn => "fade-in",
            Effect::FadeOut => "fade-out",
            Effect::Pan => "pan",
        }
    }
}

impl FromStr for Effect {
    type Err = Error;

    /// Accepts `-fin`, `-fout`, `-pan`, the same without the dash, and the
    /// long names `fade-in`, `fade-out`
    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix('-').unwrap_or(s) {
            "fin" | "fade-in" => Ok(Effect::FadeIn),
            "fout" | "fade-out" => Ok(Effect::FadeOut),
            "pan" => Ok(Effect::Pan),
            _ => Err(Error::usage(format!(
                "unknown effect '{}' (expected -fin, -fout or -pan)",
                s
            ))),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Effect plus its duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectRequest {
    pub effect: Effect,
    pub milliseconds: u64,
}

impl EffectRequest {
    pub fn new(effect: Effect, milliseconds: u64) -> Self {
        Self {
            effect,
            milliseconds,
        }
    }
}

/// Parse a duration argument the way C `strtol` reads a base-10 number
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit. No digits at all, or a negative value, is a usage error.
pub fn parse_milliseconds(arg: &str) -> Result<u64> {
    let trimmed = arg.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(Error::usage(format!("duration '{}' is not a number", arg)));
    }

    let value: u64 = unsigned[..digits]
        .parse()
        .map_err(|_| Error::usage(format!("duration '{}' is out of range", arg)))?;
    if negative && value != 0 {
        return Err(Error::usage(format!("duration '{}' is negative", arg)));
    }
    Ok(value)
}

/// Convert a duration into a frame count, clamped to `total_frames`
pub fn affected_frames(sample_rate: u32, milliseconds: u64, total_frames: usize) -> usize {
    let frames = (f64::from(sample_rate) / 1000.0 * milliseconds as f64) as usize;
    frames.min(total_frames)
}

/// Mutable view of a byte buffer as little-endian `i16` samples
pub struct PcmSamples<'a> {
    bytes: &'a mut [u8],
}

impl<'a> PcmSamples<'a> {
    /// View the first `count` samples of `bytes` (fewer if the buffer is shorter)
    pub fn new(bytes: &'a mut [u8], count: usize) -> Self {
        let len = count.min(bytes.len() / 2) * 2;
        Self {
            bytes: &mut bytes[..len],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, index: usize) -> i16 {
        i16::from_le_bytes([self.bytes[2 * index], self.bytes[2 * index + 1]])
    }

    pub fn set(&mut self, index: usize, value: i16) {
        self.bytes[2 * index..2 * index + 2].copy_from_slice(&value.to_le_bytes());
    }

    /// Multiply a sample by `numerator / denominator`
    pub fn scale(&mut self, index: usize, numerator: usize, denominator: usize) {
        let scaled = (f64::from(self.get(index)) * numerator as f64) / denominator as f64;
        self.set(index, scaled as i16);
    }
}

/// Apply an effect in place to the payload bytes
pub fn apply(request: EffectRequest, header: &WavHeader, payload: &mut [u8]) {
    let channels = usize::from(header.channels);
    if channels == 0 {
        return;
    }

    let mut samples = PcmSamples::new(payload, header.data_size as usize / 2);
    debug!(
        effect = %request.effect,
        milliseconds = request.milliseconds,
        samples = samples.len(),
        "applying effect"
    );

    match request.effect {
        Effect::FadeIn => fade_in(&mut samples, channels, header.sample_rate, request.milliseconds),
        Effect::FadeOut => {
            fade_out(&mut samples, channels, header.sample_rate, request.milliseconds)
        }
        Effect::Pan => pan(&mut samples, channels, header.sample_rate, request.milliseconds),
    }
}
