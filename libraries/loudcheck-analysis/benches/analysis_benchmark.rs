//! Performance benchmarks for the loudness detectors
//!
//! Run with: cargo bench -p loudcheck-analysis --bench analysis_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use loudcheck_analysis::{analyze, calculate_db, check_peak, check_sudden, AnalysisConfig};
use loudcheck_wave::WavAudio;
use std::f64::consts::PI;

/// Build the raw bytes of a stereo container holding a 1 kHz sine wave
fn sine_wav_bytes(sample_rate: u32, duration_secs: f64, amplitude: f64) -> Vec<u8> {
    let frames = (f64::from(sample_rate) * duration_secs) as usize;
    let data_len = (frames * 4) as u32;

    let mut bytes = Vec::with_capacity(44 + frames * 4);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 4).to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for i in 0..frames {
        let t = i as f64 / f64::from(sample_rate);
        let value = (amplitude * (2.0 * PI * 1000.0 * t).sin()) as i16;
        bytes.extend_from_slice(&value.to_le_bytes());
        bytes.extend_from_slice(&value.to_le_bytes());
    }

    bytes
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave_parse");

    for seconds in [1_u32, 30] {
        let bytes = sine_wav_bytes(44100, f64::from(seconds), 16000.0);

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse", format!("{}s", seconds)),
            &bytes,
            |b, bytes| {
                b.iter(|| black_box(WavAudio::parse(black_box(bytes)).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_detectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("loudness_detectors");
    let bytes = sine_wav_bytes(44100, 30.0, 16000.0);
    let audio = WavAudio::parse(&bytes).expect("synthesized container must parse");
    group.throughput(Throughput::Elements(audio.total_frames() as u64));

    group.bench_function("calculate_db_full_range", |b| {
        b.iter(|| {
            black_box(calculate_db(
                black_box(&audio),
                0,
                black_box(audio.total_frames()),
            ))
        });
    });

    group.bench_function("check_peak_200ms", |b| {
        b.iter(|| black_box(check_peak(black_box(&audio), 200, -8.0).unwrap()));
    });

    group.bench_function("check_sudden_200ms", |b| {
        b.iter(|| black_box(check_sudden(black_box(&audio), 200, 20.0).unwrap()));
    });

    group.bench_function("analyze_defaults", |b| {
        let config = AnalysisConfig::default();
        b.iter(|| black_box(analyze(black_box(&audio), &config).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_detectors);
criterion_main!(benches);
