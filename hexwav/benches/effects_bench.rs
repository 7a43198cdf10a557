//! Effect Engine Performance Benchmark
//!
//! Measures fade-in, fade-out and pan throughput on 10 seconds of
//! 44.1kHz stereo 16-bit PCM.
//!
//! **Goal:** Effects should be negligible next to hex-dump parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hexwav::effects::apply;
use hexwav::wav::WavHeader;
use hexwav::{Effect, EffectRequest};

fn bench_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("effects");

    // 10 seconds @ 44.1kHz stereo = 441,000 frames
    let frames = 441_000usize;
    let header = WavHeader {
        channels: 2,
        sample_rate: 44100,
        data_size: (frames * 4) as u32,
        bytes_per_sample: 4,
    };
    let payload: Vec<u8> = (0..frames * 4).map(|i| (i % 251) as u8).collect();

    for (name, effect) in [
        ("fade_in", Effect::FadeIn),
        ("fade_out", Effect::FadeOut),
        ("pan", Effect::Pan),
    ] {
        group.bench_function(BenchmarkId::new(name, "5000ms"), |b| {
            b.iter_batched(
                || payload.clone(),
                |mut bytes| {
                    apply(EffectRequest::new(effect, 5000), &header, &mut bytes);
                    black_box(bytes)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_effects);
criterion_main!(benches);
