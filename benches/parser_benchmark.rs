//! Benchmarks for episodic.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use episodic::parse;

/// Sample (series name, release title) pairs for benchmarking.
const EPISODE_SAMPLES: &[(&str, &str)] = &[
    ("Test", "Test.S01E02.720p.HDTV.x264-GRP"),
    ("Test", "Test.1x02.720p.WEB-DL.DD5.1.H.264-GRP"),
    ("Test", "Test.Season.2.Episode.14.HDTV.XviD-aAF"),
    ("Test", "Test.706.720p-GRP"),
    ("Test", "Test.2008x12.13.720p-GRP"),
];

const REJECTED_SAMPLES: &[(&str, &str)] = &[
    ("Test", "Test.Season.2.720p-GRP"),
    ("Test", "Test.S02D1.720p-GRP"),
    ("Test", "Test.S06E01-E04.720p-GRP"),
    ("Test", "Another.Show.S01E02.720p-GRP"),
    ("Test", "Test.Revealed.WS.PDTV.XviD-aAF.5190458"),
];

fn bench_parse_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_single");

    group.bench_function("explicit_sxx_eyy", |b| {
        b.iter(|| parse(black_box("Test"), black_box("Test.S01E02.720p.HDTV.x264-GRP")))
    });

    // Falls all the way through the strategy chain to the sequence fallback.
    group.bench_function("sequence_fallback", |b| {
        b.iter(|| parse(black_box("Test"), black_box("Test.706.720p-GRP")))
    });

    group.bench_function("date", |b| {
        b.iter(|| parse(black_box("Test"), black_box("Test.2008x12.13.720p-GRP")))
    });

    group.bench_function("name_mismatch", |b| {
        b.iter(|| parse(black_box("Test"), black_box("Another.Show.S01E02.720p-GRP")))
    });

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_batch");

    group.throughput(Throughput::Elements(EPISODE_SAMPLES.len() as u64));
    group.bench_function("episodes", |b| {
        b.iter(|| {
            for (name, data) in EPISODE_SAMPLES {
                black_box(parse(black_box(name), black_box(data)).ok());
            }
        })
    });

    group.throughput(Throughput::Elements(REJECTED_SAMPLES.len() as u64));
    group.bench_function("rejections", |b| {
        b.iter(|| {
            for (name, data) in REJECTED_SAMPLES {
                black_box(parse(black_box(name), black_box(data)).ok());
            }
        })
    });

    group.finish();
}

fn bench_input_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_length");

    let inputs = [
        ("short", "Test.S01E02"),
        ("medium", "Test.S01E02.720p.HDTV.x264-GRP"),
        (
            "long",
            "Test.S04E02.Some.Very.Long.Episode.Title.1080p.WEB-DL.DD5.1.H.264.PROPER-GRP",
        ),
    ];

    for (label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", label), input, |b, input| {
            b.iter(|| parse(black_box("Test"), black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_single,
    bench_parse_batch,
    bench_input_length,
);

criterion_main!(benches);
