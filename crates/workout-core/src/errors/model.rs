// ABOUTME: Error type for workout model invariant violations
// ABOUTME: Raised by constructors of durations, targets, steps and workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::ErrorCode;

/// A workout model invariant was violated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Numeric value must be strictly positive
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive {
        /// Which value was rejected
        field: &'static str,
        /// The offending value
        value: f64,
    },
    /// Value is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Which value was rejected
        field: &'static str,
    },
    /// Range lower bound exceeds its upper bound
    #[error("invalid {field} range: {min} is greater than {max}")]
    InvertedRange {
        /// Which target the range belongs to
        field: &'static str,
        /// Rendered lower bound
        min: String,
        /// Rendered upper bound
        max: String,
    },
    /// Value outside the representable bounds
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Which value was rejected
        field: &'static str,
        /// The offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// Workouts need at least one step
    #[error("workout must have at least one step")]
    EmptyWorkout,
    /// Repeat groups need at least one child step
    #[error("repeat group must contain at least one step")]
    EmptyRepeat,
}

impl ModelError {
    /// Error category for this violation
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NonPositive { .. }
            | Self::NonFinite { .. }
            | Self::InvertedRange { .. }
            | Self::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
            Self::EmptyWorkout | Self::EmptyRepeat => ErrorCode::MissingRequiredField,
        }
    }
}
