//! Test helpers for hexwav integration tests
//!
//! - WAV fixture generation with hound (in memory)
//! - Hex-dump rendering and decoding through the library codec

#![allow(dead_code)]

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};
use hexwav::hexdump::{decode_line, encode_record, RECORD_WIDTH};

/// Size of the canonical PCM header hound writes for 16-bit mono/stereo
pub const WAV_HEADER_LEN: usize = 44;

/// Build a 16-bit PCM WAV file in memory
pub fn wav_bytes(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).expect("Failed to create WAV writer");
        for &sample in samples {
            writer.write_sample(sample).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
    }

    let bytes = cursor.into_inner();
    assert_eq!(
        &bytes[36..40],
        b"data",
        "fixture must use the canonical 44-byte header"
    );
    bytes
}

/// Render bytes as a hex dump starting at address 0
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = Vec::new();
    for (i, chunk) in bytes.chunks(RECORD_WIDTH).enumerate() {
        encode_record(&mut out, (i * RECORD_WIDTH) as u32, chunk).expect("Failed to encode");
    }
    String::from_utf8(out).expect("hex dump is ASCII")
}

/// Concatenate the byte values of every record in a hex dump
pub fn undump(text: &str) -> Vec<u8> {
    text.lines()
        .flat_map(|line| decode_line(line.as_bytes()).record.bytes().to_vec())
        .collect()
}

/// Samples of the payload following the canonical header
pub fn payload_samples(wav: &[u8]) -> Vec<i16> {
    wav[WAV_HEADER_LEN..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect()
}

/// Constant-amplitude test signal
pub fn constant(value: i16, count: usize) -> Vec<i16> {
    vec![value; count]
}

/// Alternating-sign ramp, so every sample differs
pub fn ramp(count: usize) -> Vec<i16> {
    (0..count)
        .map(|i| {
            let magnitude = (i as i16 % 1000) * 30 + 100;
            if i % 2 == 0 {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}
