//! Left-to-right stereo pan

use super::{affected_frames, PcmSamples};

/// Sweep the stereo image from left to right over the first N frames
///
/// Within the window the left channel is scaled by `(N - i - 1) / N` and the
/// right channel by `i / N`. Every frame after the window is set to silence,
/// including any channels beyond the first two. Mono input is left untouched.
pub fn pan(samples: &mut PcmSamples<'_>, channels: usize, sample_rate: u32, milliseconds: u64) {
    if channels < 2 {
        return;
    }

    let total_frames = samples.len() / channels;
    let frames = affected_frames(sample_rate, milliseconds, total_frames);

    for frame in 0..frames {
        let base = frame * channels;
        samples.scale(base, frames - frame - 1, frames);
        samples.scale(base + 1, frame, frames);
    }

    for frame in frames..total_frames {
        let base = frame * channels;
        for channel in 0..channels {
            samples.set(base + channel, 0);
        }
    }
}
