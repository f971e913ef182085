// ABOUTME: Criterion benchmarks for the workout parser
// ABOUTME: Measures segment classification and whole-workout parsing throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the workout parser.
//!
//! Measures single-segment classification per matcher, full workouts of
//! growing length, and canonical-text rendering.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use garmin_workout_creator::formatters::to_canonical_text;
use garmin_workout_creator::parser::{self, WorkoutParser};

/// One segment per matcher, plus a rejected one
const SEGMENTS: &[(&str, &str)] = &[
    ("repeat", "3x 1km @ 4:45 + 2min rest"),
    ("duration", "10 minutes warmup"),
    ("duration_target", "20min tempo @ 4:30-4:40 per km"),
    ("keyword", "cooldown"),
    ("unrecognized", "banana split"),
];

const SESSION: &str = "2km warmup @ 5:45, 6x 800m @ 3:55 + 400m jog, 10min @ 150-160 bpm, cooldown";

fn bench_segments(c: &mut Criterion) {
    let parser = WorkoutParser::default();
    let mut group = c.benchmark_group("parse_segment");

    for (name, segment) in SEGMENTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), segment, |b, segment| {
            b.iter(|| parser.parse_segment(black_box(segment)));
        });
    }

    group.finish();
}

fn bench_workout_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_workout");

    for repetitions in [1_usize, 10, 50] {
        let text = vec![SESSION; repetitions].join(", ");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(repetitions * 4),
            &text,
            |b, text| {
                b.iter(|| parser::parse(black_box(text)));
            },
        );
    }

    group.finish();
}

fn bench_canonical_text(c: &mut Criterion) {
    let Ok(workout) = parser::parse(SESSION) else {
        return;
    };
    c.bench_function("canonical_text", |b| {
        b.iter(|| to_canonical_text(black_box(&workout)));
    });
}

criterion_group!(
    benches,
    bench_segments,
    bench_workout_length,
    bench_canonical_text,
);
criterion_main!(benches);
