// ABOUTME: Integration tests for workout previews and output formats
// ABOUTME: Checks preview lines, numbered text rendering and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use garmin_workout_creator::formatters::{
    format_workout, preview_lines, render_preview, OutputFormat, PreviewLine,
};
use garmin_workout_creator::parser;
use workout_core::models::Workout;

fn sample() -> Workout {
    parser::parse("1km warmup @ 5:30, 3x 1km @ 4:45-5:00 + 2min rest, cooldown").unwrap()
}

#[test]
fn test_preview_lines() {
    let lines = preview_lines(&sample());
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        PreviewLine {
            depth: 0,
            label: "Warmup".to_owned(),
            duration: "1 km".to_owned(),
            target: "Target: 5:30 per km".to_owned(),
        }
    );
    assert_eq!(lines[1].label, "Repeat 3×");
    assert!(lines[1].duration.is_empty());
    assert_eq!(lines[2].depth, 1);
    assert_eq!(lines[2].label, "Interval");
    assert_eq!(lines[2].target, "Target: 4:45 - 5:00 per km");
    assert_eq!(lines[3].duration, "2 min");
    assert_eq!(lines[3].target, "No target");
    assert_eq!(lines[4].duration, "Open (press lap to end)");
}

#[test]
fn test_render_preview() {
    let text = render_preview(&sample());
    let rendered: Vec<&str> = text.lines().collect();
    assert_eq!(rendered[0], "1. Warmup | 1 km | Target: 5:30 per km");
    assert_eq!(rendered[1], "2. Repeat 3×");
    assert_eq!(rendered[2], "  3. Interval | 1 km | Target: 4:45 - 5:00 per km");
    assert_eq!(rendered[3], "  4. Recovery | 2 min | No target");
    assert_eq!(rendered[4], "5. Cooldown | Open (press lap to end) | No target");
}

#[test]
fn test_heart_rate_preview() {
    let workout = parser::parse("10min @ 150-160 bpm").unwrap();
    let lines = preview_lines(&workout);
    assert_eq!(lines[0].target, "Target: 150 - 160 bpm");
}

#[test]
fn test_text_format_starts_with_summary() {
    let output = format_workout(&sample(), "Track", OutputFormat::Text).unwrap();
    assert_eq!(output.content_type, "text/plain");
    assert!(output.data.starts_with("Track: 8 steps\n1. Warmup"));
}

#[test]
fn test_json_format() {
    let workout = sample();
    let output = format_workout(&workout, "Track", OutputFormat::Json).unwrap();
    assert_eq!(output.format, OutputFormat::Json);
    let decoded: Workout = serde_json::from_str(&output.data).unwrap();
    assert_eq!(decoded, workout);
}
