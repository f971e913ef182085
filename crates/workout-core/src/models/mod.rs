// ABOUTME: Workout data model shared by the parser, formatters and upload collaborators
// ABOUTME: Re-exports Workout, Step, Duration, Target and the upload metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! A `Workout` is an ordered, non-empty list of `Step`s. A step is either a
//! `SimpleStep` (type + duration + target) or a `RepeatGroup` of simple steps.
//! Repeat groups cannot contain other repeat groups, so a workout is at most
//! two levels deep, which matches what the device format can express.
//!
//! ## Design Principles
//!
//! - **Closed sum types**: `Duration`, `Target` and `Step` are enums, so every
//!   consumer has to handle every variant
//! - **Validated construction**: constructors return `Result<_, ModelError>`
//!   and deserialization of a `Workout` re-validates every step
//! - **Immutable**: fields are private and only exposed through accessors
//! - **Serializable**: variant tags and field names are the integration
//!   surface toward upload collaborators

mod duration;
mod metadata;
mod step;
mod target;
mod workout;

pub use duration::{DistanceUnit, Duration, TimeUnit};
pub use metadata::WorkoutMetadata;
pub use step::{RepeatGroup, SimpleStep, Step, StepType};
pub use target::{Pace, PaceUnit, Target, TargetValue};
pub use workout::Workout;

/// Render a float without a trailing `.0` for whole numbers
pub(crate) fn format_number(value: f64) -> String {
    format!("{value}")
}
