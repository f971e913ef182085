// ABOUTME: Workout model: an ordered, non-empty list of steps
// ABOUTME: Provides totals, unrolled step counts and a one-line summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{Duration, Step};
use crate::constants::units::{METERS_PER_KILOMETER, SECONDS_PER_MINUTE};
use crate::errors::ModelError;

/// Structured workout produced by one parse call
///
/// Step order is execution order on the device. The value is immutable once
/// built; deserialization goes through the same validation as `Workout::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorkoutSteps", into = "WorkoutSteps")]
pub struct Workout {
    steps: Vec<Step>,
}

#[derive(Serialize, Deserialize)]
struct WorkoutSteps {
    steps: Vec<Step>,
}

impl TryFrom<WorkoutSteps> for Workout {
    type Error = ModelError;

    fn try_from(raw: WorkoutSteps) -> Result<Self, Self::Error> {
        Self::new(raw.steps)
    }
}

impl From<Workout> for WorkoutSteps {
    fn from(workout: Workout) -> Self {
        Self {
            steps: workout.steps,
        }
    }
}

impl Workout {
    /// Create a validated workout
    ///
    /// # Errors
    /// Returns `ModelError::EmptyWorkout` for no steps, or the first invalid step's error
    pub fn new(steps: Vec<Step>) -> Result<Self, ModelError> {
        if steps.is_empty() {
            return Err(ModelError::EmptyWorkout);
        }
        steps.iter().try_for_each(Step::validate)?;
        Ok(Self { steps })
    }

    /// Steps in execution order
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of top-level entries (a repeat group counts once)
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed workout
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of device steps once repeats are unrolled
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.iter().map(Step::unrolled_len).sum()
    }

    fn total_by(&self, measure: impl Fn(&Duration) -> Option<f64> + Copy) -> Option<f64> {
        self.steps.iter().map(|step| step.total_by(measure)).sum()
    }

    /// Total distance in kilometers, if every step is distance-based
    #[must_use]
    pub fn total_distance_km(&self) -> Option<f64> {
        self.total_by(Duration::meters)
            .map(|meters| meters / METERS_PER_KILOMETER)
    }

    /// Total time in minutes, if every step is time-based
    #[must_use]
    pub fn total_time_minutes(&self) -> Option<f64> {
        self.total_by(Duration::seconds)
            .map(|seconds| seconds / SECONDS_PER_MINUTE)
    }

    /// One-line summary, e.g. `Morning Run: 5 steps, 10.0km`
    #[must_use]
    pub fn summary(&self, name: &str) -> String {
        let count = self.step_count();
        let plural = if count == 1 { "" } else { "s" };
        let mut details = vec![format!("{count} step{plural}")];

        if let Some(km) = self.total_distance_km() {
            details.push(format!("{km:.1}km"));
        } else if let Some(minutes) = self.total_time_minutes() {
            details.push(format!("{minutes:.0}min"));
        }

        format!("{name}: {}", details.join(", "))
    }

    /// Consume the workout and return its steps
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Workout {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
