//! Performance benchmarks for the framing hot path.
//!
//! Every keystroke in the process flows through the accumulator, and every
//! flushed frame through the validator, so both must stay allocation-light
//! and branch-predictable.
//!
//! # Key Metrics
//!
//! - **Throughput**: keystrokes per second through the accumulator
//! - **Latency**: time per frame validation
//!
//! # Run Benchmarks
//!
//! ```sh
//! # Run all framing benchmarks
//! cargo bench --bench framing_bench
//!
//! # Run a specific group
//! cargo bench --bench framing_bench -- frame_validation
//!
//! # Save a baseline before optimizing, compare after
//! cargo bench --bench framing_bench -- --save-baseline before
//! cargo bench --bench framing_bench -- --baseline before
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tokio::time::Instant;
use wedgescan_core::ScanSource;
use wedgescan_input::RawKeyEvent;
use wedgescan_reader::{FrameAccumulator, FrameConfig, validate_frame};

fn bench_config() -> FrameConfig {
    FrameConfig::builder()
        .idle_timeout(Duration::from_millis(100))
        .min_length(4)
        .max_length(64)
        .prefix_marker('P')
        .suffix_marker('S')
        .build()
        .unwrap()
}

/// Benchmark frame validation across representative frames.
///
/// Covers the accept fast path, marker stripping, and both early-rejection
/// paths.
fn bench_frame_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_validation");
    group.throughput(Throughput::Elements(1));

    let config = bench_config();

    let cases = vec![
        ("typical_rfid", "12345678"),
        ("marked_barcode", "P4006381333931S"),
        ("max_length", "12345678901234567890123456789012345678901234567890123456789012"),
        ("too_short", "12"),
        ("too_long", "X".repeat(80).leak() as &str),
        ("padded", "  12345678  "),
    ];

    for (name, frame) in cases {
        group.bench_with_input(BenchmarkId::new("validate", name), &frame, |b, &frame| {
            b.iter(|| {
                let result = validate_frame(black_box(frame), &config, ScanSource::Device);
                black_box(result)
            });
        });
    }

    group.finish();
}

/// Benchmark full burst accumulation: N characters plus a terminator
/// through the accumulator state machine.
fn bench_burst_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("burst_accumulation");

    let config = FrameConfig::builder()
        .min_length(1)
        .max_length(256)
        .build()
        .unwrap();

    for burst_len in [8usize, 20, 64].iter() {
        group.throughput(Throughput::Elements(*burst_len as u64 + 1));

        let events: Vec<RawKeyEvent> = "0123456789"
            .chars()
            .cycle()
            .take(*burst_len)
            .map(RawKeyEvent::char)
            .collect();

        group.bench_with_input(
            BenchmarkId::new("burst", burst_len),
            &events,
            |b, events| {
                let base = Instant::now();
                b.iter(|| {
                    let mut acc = FrameAccumulator::new(config.clone());
                    let mut at = base;
                    for event in events {
                        black_box(acc.handle_key(black_box(event), at));
                        at += Duration::from_millis(1);
                    }
                    black_box(acc.handle_key(&RawKeyEvent::enter(), at))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_frame_validation, bench_burst_accumulation);
criterion_main!(benches);
