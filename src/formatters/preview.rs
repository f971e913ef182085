// ABOUTME: Preview rendering of a workout as indented, numbered lines
// ABOUTME: Repeat groups get a header line and their children are indented beneath it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use workout_core::models::{Duration, SimpleStep, Step, Target, Workout};

/// One row of a workout preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    /// 0 for top-level steps, 1 for repeat children
    pub depth: usize,
    /// Step label or repeat header
    pub label: String,
    /// Duration text; empty for repeat headers
    pub duration: String,
    /// Target text; empty for repeat headers
    pub target: String,
}

/// Flatten a workout into preview lines
#[must_use]
pub fn preview_lines(workout: &Workout) -> Vec<PreviewLine> {
    let mut lines = Vec::with_capacity(workout.len());
    for step in workout {
        match step {
            Step::Simple(simple) => lines.push(simple_line(simple, 0)),
            Step::Repeat(group) => {
                lines.push(PreviewLine {
                    depth: 0,
                    label: format!("Repeat {}×", group.repeat_count()),
                    duration: String::new(),
                    target: String::new(),
                });
                lines.extend(group.steps().iter().map(|child| simple_line(child, 1)));
            }
        }
    }
    lines
}

/// Render the preview as numbered text, one line per row
#[must_use]
pub fn render_preview(workout: &Workout) -> String {
    let mut out = String::new();
    for (index, line) in preview_lines(workout).iter().enumerate() {
        let indent = "  ".repeat(line.depth);
        if line.duration.is_empty() {
            let _ = writeln!(out, "{indent}{}. {}", index + 1, line.label);
        } else {
            let _ = writeln!(
                out,
                "{indent}{}. {} | {} | {}",
                index + 1,
                line.label,
                line.duration,
                line.target
            );
        }
    }
    out
}

fn simple_line(step: &SimpleStep, depth: usize) -> PreviewLine {
    PreviewLine {
        depth,
        label: step.step_type().label().to_owned(),
        duration: describe_duration(step.duration()),
        target: describe_target(step.target()),
    }
}

/// `5 min`, `1.5 km`, or the open-step hint
#[must_use]
pub fn describe_duration(duration: &Duration) -> String {
    match *duration {
        Duration::Distance { value, unit } => format!("{value} {}", unit.as_str()),
        Duration::Time { value, unit } => format!("{value} {}", unit.as_str()),
        Duration::Open => "Open (press lap to end)".to_owned(),
    }
}

/// `Target: 4:45 - 5:00 per km`, `Target: 150 bpm`, or `No target`
#[must_use]
pub fn describe_target(target: &Target) -> String {
    match target {
        Target::Open => "No target".to_owned(),
        Target::Pace { value, per } => {
            format!("Target: {} per {}", value.render(" - "), per.as_str())
        }
        Target::HeartRate { value } => format!("Target: {} bpm", value.render(" - ")),
        Target::Cadence { value } => format!("Target: {} spm", value.render(" - ")),
    }
}
