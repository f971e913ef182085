// ABOUTME: Workout step model: simple steps and repeat groups
// ABOUTME: Repeat groups hold simple steps only, which bounds nesting to one level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Duration, Target};
use crate::constants::limits::{MAX_REPEAT_COUNT, MIN_REPEAT_COUNT};
use crate::errors::ModelError;

/// Purpose of a simple step on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    /// Warm-up
    Warmup,
    /// Work portion
    Interval,
    /// Recovery or rest between efforts
    Recovery,
    /// Cool-down
    Cooldown,
    /// Anything else
    Other,
}

impl StepType {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Interval => "interval",
            Self::Recovery => "recovery",
            Self::Cooldown => "cooldown",
            Self::Other => "other",
        }
    }

    /// Capitalized name for previews
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Warmup => "Warmup",
            Self::Interval => "Interval",
            Self::Recovery => "Recovery",
            Self::Cooldown => "Cooldown",
            Self::Other => "Step",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step with a duration and an optional target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleStep {
    step_type: StepType,
    duration: Duration,
    #[serde(default)]
    target: Target,
}

impl SimpleStep {
    /// Create a validated step
    ///
    /// # Errors
    /// Returns a `ModelError` when the duration or target breaks an invariant
    pub fn new(step_type: StepType, duration: Duration, target: Target) -> Result<Self, ModelError> {
        let step = Self {
            step_type,
            duration,
            target,
        };
        step.validate()?;
        Ok(step)
    }

    /// Step ending on a lap press with no target
    #[must_use]
    pub const fn open(step_type: StepType) -> Self {
        Self {
            step_type,
            duration: Duration::Open,
            target: Target::Open,
        }
    }

    /// Check duration and target invariants
    ///
    /// # Errors
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), ModelError> {
        self.duration.validate()?;
        self.target.validate()
    }

    /// Step purpose
    #[must_use]
    pub const fn step_type(&self) -> StepType {
        self.step_type
    }

    /// How long the step lasts
    #[must_use]
    pub const fn duration(&self) -> &Duration {
        &self.duration
    }

    /// Intensity constraint
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }
}

/// Compact display, e.g. `Warmup: 1km @ 5:30/km`
impl fmt::Display for SimpleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step_type.label(), self.duration)?;
        if !self.target.is_open() {
            write!(f, " @ {}", self.target)?;
        }
        Ok(())
    }
}

/// Simple steps repeated a fixed number of times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatGroup {
    repeat_count: u32,
    steps: Vec<SimpleStep>,
}

impl RepeatGroup {
    /// Create a validated repeat group
    ///
    /// # Errors
    /// Returns a `ModelError` when the count is outside 1-99, the group is
    /// empty, or a child step is invalid
    pub fn new(repeat_count: u32, steps: Vec<SimpleStep>) -> Result<Self, ModelError> {
        let group = Self {
            repeat_count,
            steps,
        };
        group.validate()?;
        Ok(group)
    }

    /// Check count, emptiness and every child
    ///
    /// # Errors
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.repeat_count == 0 {
            return Err(ModelError::NonPositive {
                field: "repeat count",
                value: 0.0,
            });
        }
        if !(MIN_REPEAT_COUNT..=MAX_REPEAT_COUNT).contains(&self.repeat_count) {
            return Err(ModelError::OutOfRange {
                field: "repeat count",
                value: f64::from(self.repeat_count),
                min: f64::from(MIN_REPEAT_COUNT),
                max: f64::from(MAX_REPEAT_COUNT),
            });
        }
        if self.steps.is_empty() {
            return Err(ModelError::EmptyRepeat);
        }
        self.steps.iter().try_for_each(SimpleStep::validate)
    }

    /// Number of cycles
    #[must_use]
    pub const fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Steps making up one cycle
    #[must_use]
    pub fn steps(&self) -> &[SimpleStep] {
        &self.steps
    }
}

/// Top-level workout entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// A single step
    Simple(SimpleStep),
    /// A repeated block of simple steps
    Repeat(RepeatGroup),
}

impl Step {
    /// Check invariants of the step or group
    ///
    /// # Errors
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Simple(step) => step.validate(),
            Self::Repeat(group) => group.validate(),
        }
    }

    /// Number of device steps once repeats are unrolled
    #[must_use]
    pub fn unrolled_len(&self) -> usize {
        match self {
            Self::Simple(_) => 1,
            Self::Repeat(group) => group.steps.len() * group.repeat_count as usize,
        }
    }

    /// Total of a per-leaf measure, or `None` if any leaf lacks it
    pub(crate) fn total_by(&self, measure: impl Fn(&Duration) -> Option<f64>) -> Option<f64> {
        match self {
            Self::Simple(step) => measure(&step.duration),
            Self::Repeat(group) => {
                let cycle = group
                    .steps
                    .iter()
                    .map(|step| measure(&step.duration))
                    .sum::<Option<f64>>()?;
                Some(cycle * f64::from(group.repeat_count))
            }
        }
    }
}

impl From<SimpleStep> for Step {
    fn from(step: SimpleStep) -> Self {
        Self::Simple(step)
    }
}

impl From<RepeatGroup> for Step {
    fn from(group: RepeatGroup) -> Self {
        Self::Repeat(group)
    }
}
