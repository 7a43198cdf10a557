//! Linear fade-in and fade-out

use super::{affected_frames, PcmSamples};

/// Ramp the first N frames up from silence
///
/// Frame `i` of the ramp is scaled by `i / N`, so frame 0 is silent and frame
/// `N - 1` reaches `(N - 1) / N` of its amplitude. Zero duration is a no-op.
pub fn fade_in(samples: &mut PcmSamples<'_>, channels: usize, sample_rate: u32, milliseconds: u64) {
    if milliseconds == 0 {
        return;
    }

    let total_frames = samples.len() / channels;
    let frames = affected_frames(sample_rate, milliseconds, total_frames);

    for frame in 0..frames {
        let base = frame * channels;
        for channel in 0..channels {
            samples.scale(base + channel, frame, frames);
        }
    }
}

/// Ramp the last N frames down to silence
///
/// The window ends at the last sample; its frames are scaled by
/// `(N - 1) / N` down to `0 / N`. Zero duration is a no-op.
pub fn fade_out(samples: &mut PcmSamples<'_>, channels: usize, sample_rate: u32, milliseconds: u64) {
    if milliseconds == 0 {
        return;
    }

    let total_frames = samples.len() / channels;
    let frames = affected_frames(sample_rate, milliseconds, total_frames);
    let start = samples.len() - frames * channels;

    for frame in 0..frames {
        let base = start + frame * channels;
        let remaining = frames - frame - 1;
        for channel in 0..channels {
            samples.scale(base + channel, remaining, frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_bytes(values: &[i16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    fn to_values(bytes: &[u8]) -> Vec<i16> {
        bytes
            .chunks_exact(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect()
    }

    fn run(
        effect: fn(&mut PcmSamples<'_>, usize, u32, u64),
        values: &[i16],
        channels: usize,
        sample_rate: u32,
        milliseconds: u64,
    ) -> Vec<i16> {
        let mut bytes = to_bytes(values);
        let count = values.len();
        effect(&mut PcmSamples::new(&mut bytes, count), channels, sample_rate, milliseconds);
        to_values(&bytes)
    }

    #[test]
    fn test_fade_in_mono_ramp() {
        // 1000 Hz, 4 ms -> 4 frames
        let out = run(fade_in, &[1000; 6], 1, 1000, 4);
        assert_eq!(out, vec![0, 250, 500, 750, 1000, 1000]);
    }

    #[test]
    fn test_fade_in_stereo_scales_both_channels() {
        let out = run(fade_in, &[800, -800, 800, -800, 800, -800], 2, 1000, 2);
        assert_eq!(out, vec![0, 0, 400, -400, 800, -800]);
    }

    #[test]
    fn test_fade_in_last_ramp_frame_not_full_amplitude() {
        let out = run(fade_in, &[3000; 3], 1, 1000, 3);
        assert_eq!(out, vec![0, 1000, 2000]);
    }

    #[test]
    fn test_fade_out_mono_ramp() {
        let out = run(fade_out, &[1000; 6], 1, 1000, 4);
        assert_eq!(out, vec![1000, 1000, 750, 500, 250, 0]);
    }

    #[test]
    fn test_fade_out_stereo() {
        let out = run(fade_out, &[900, 300, 900, 300, 900, 300, 900, 300], 2, 1000, 3);
        assert_eq!(out, vec![900, 300, 600, 200, 300, 100, 0, 0]);
    }

    #[test]
    fn test_zero_duration_is_noop() {
        let values = [123, -456, 789, -1011];
        assert_eq!(run(fade_in, &values, 2, 44100, 0), values.to_vec());
        assert_eq!(run(fade_out, &values, 2, 44100, 0), values.to_vec());
    }

    #[test]
    fn test_window_clamped_to_file() {
        // 10 s at 1000 Hz asks for 10000 frames; only 4 exist
        let out = run(fade_in, &[400; 4], 1, 1000, 10_000);
        assert_eq!(out, vec![0, 100, 200, 300]);

        let out = run(fade_out, &[400; 4], 1, 1000, 10_000);
        assert_eq!(out, vec![300, 200, 100, 0]);
    }

    #[test]
    fn test_negative_samples_truncate_toward_zero() {
        let out = run(fade_in, &[-1000; 3], 1, 1000, 3);
        assert_eq!(out, vec![0, -333, -666]);
    }
}
