// ABOUTME: Renders a workout back into parser-accepted text
// ABOUTME: Parsing the rendered text yields a workout equal to the one rendered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::models::{RepeatGroup, SimpleStep, Step, StepType, Workout};

use crate::parser::step_type::canonical_keyword;

/// Render a workout as comma-separated step descriptions
///
/// Every workout produced by the parser renders to text that parses back to an
/// equal workout. Steps the grammar cannot express (an open step with a
/// target, or a repeat group that is not `work` or `work + recovery`) are
/// rendered as closely as possible.
#[must_use]
pub fn to_canonical_text(workout: &Workout) -> String {
    workout
        .steps()
        .iter()
        .map(|step| match step {
            Step::Simple(simple) => simple_text(simple),
            Step::Repeat(group) => repeat_text(group),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn simple_text(step: &SimpleStep) -> String {
    if step.duration().is_open() {
        return canonical_keyword(step.step_type()).to_owned();
    }

    let mut text = step.duration().to_string();
    if step.step_type() != StepType::Other {
        text.push(' ');
        text.push_str(canonical_keyword(step.step_type()));
    }
    push_target(&mut text, step);
    text
}

fn repeat_text(group: &RepeatGroup) -> String {
    let mut text = format!("{}x", group.repeat_count());
    let mut children = group.steps().iter();

    if let Some(work) = children.next() {
        text.push(' ');
        text.push_str(&work.duration().to_string());
        if !matches!(work.step_type(), StepType::Interval | StepType::Other) {
            text.push(' ');
            text.push_str(canonical_keyword(work.step_type()));
        }
        push_target(&mut text, work);
    }
    if let Some(rest) = children.next() {
        text.push_str(" + ");
        text.push_str(&rest.duration().to_string());
        text.push_str(" rest");
    }
    text
}

fn push_target(text: &mut String, step: &SimpleStep) {
    if !step.target().is_open() {
        text.push_str(" @ ");
        text.push_str(&step.target().to_string());
    }
}
