// ABOUTME: Step target model (open, pace, heart rate, cadence)
// ABOUTME: Single values and min/max ranges share the TargetValue wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::limits::{
    MAX_CADENCE_SPM, MAX_HEART_RATE_BPM, MAX_PACE_SECONDS_PER_KM, MIN_CADENCE_SPM,
    MIN_HEART_RATE_BPM, MIN_PACE_SECONDS_PER_KM,
};
use crate::constants::units::{METERS_PER_KILOMETER, METERS_PER_MILE};
use crate::errors::ModelError;

/// Pace as whole seconds per unit of distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pace(u32);

impl Pace {
    /// Create a pace from total seconds per unit
    ///
    /// # Errors
    /// Returns `ModelError::NonPositive` for a zero pace
    pub fn from_seconds(seconds: u32) -> Result<Self, ModelError> {
        let pace = Self(seconds);
        pace.validate()?;
        Ok(pace)
    }

    /// Create a pace from its `m:ss` components
    ///
    /// # Errors
    /// Returns `ModelError::OutOfRange` when `seconds` is 60 or more or the
    /// total does not fit in a `u32`, and `ModelError::NonPositive` for `0:00`
    pub fn from_minutes_seconds(minutes: u32, seconds: u32) -> Result<Self, ModelError> {
        if seconds >= 60 {
            return Err(ModelError::OutOfRange {
                field: "pace seconds",
                value: f64::from(seconds),
                min: 0.0,
                max: 59.0,
            });
        }
        let total = minutes
            .checked_mul(60)
            .and_then(|whole| whole.checked_add(seconds))
            .ok_or_else(|| ModelError::OutOfRange {
                field: "pace",
                value: f64::from(minutes).mul_add(60.0, f64::from(seconds)),
                min: 1.0,
                max: f64::from(u32::MAX),
            })?;
        Self::from_seconds(total)
    }

    fn validate(self) -> Result<(), ModelError> {
        if self.0 == 0 {
            return Err(ModelError::NonPositive {
                field: "pace",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Total seconds per unit distance
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.0
    }
}

/// Rendered as `m:ss`
impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Distance denominator of a pace target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaceUnit {
    /// Minutes per kilometer
    #[default]
    Kilometer,
    /// Minutes per mile
    Mile,
}

impl PaceUnit {
    /// Canonical abbreviation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kilometer => "km",
            Self::Mile => "mi",
        }
    }

    /// Look up a canonical abbreviation
    #[must_use]
    pub fn from_canonical(unit: &str) -> Option<Self> {
        match unit {
            "km" => Some(Self::Kilometer),
            "mi" => Some(Self::Mile),
            _ => None,
        }
    }

    /// Spelled-out name used in previews
    #[must_use]
    pub const fn long_name(&self) -> &'static str {
        match self {
            Self::Kilometer => "km",
            Self::Mile => "mile",
        }
    }

    /// Meters in one unit of distance
    #[must_use]
    pub const fn meters(&self) -> f64 {
        match self {
            Self::Kilometer => METERS_PER_KILOMETER,
            Self::Mile => METERS_PER_MILE,
        }
    }

    /// Inclusive pace bounds in whole seconds per this unit
    ///
    /// The per-kilometer limits are scaled by the unit length, so a mile
    /// accepts 1:37 through 32:11.
    #[must_use]
    pub fn pace_bounds(&self) -> (u32, u32) {
        let scale = self.meters() / METERS_PER_KILOMETER;
        (
            (f64::from(MIN_PACE_SECONDS_PER_KM) * scale).ceil() as u32,
            (f64::from(MAX_PACE_SECONDS_PER_KM) * scale).floor() as u32,
        )
    }

    const fn pace_field(&self) -> &'static str {
        match self {
            Self::Kilometer => "pace seconds per km",
            Self::Mile => "pace seconds per mile",
        }
    }
}

/// A single target value or an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetValue<T> {
    /// Exactly one value
    Single(T),
    /// Inclusive bounds with `min <= max`
    Range {
        /// Lower bound
        min: T,
        /// Upper bound
        max: T,
    },
}

impl<T: PartialOrd + Copy + fmt::Display> TargetValue<T> {
    /// Create a range, rejecting inverted bounds
    ///
    /// # Errors
    /// Returns `ModelError::InvertedRange` when `min > max`
    pub fn range(field: &'static str, min: T, max: T) -> Result<Self, ModelError> {
        let value = Self::Range { min, max };
        value.check_order(field)?;
        Ok(value)
    }

    fn check_order(&self, field: &'static str) -> Result<(), ModelError> {
        match self {
            Self::Range { min, max } if min > max => Err(ModelError::InvertedRange {
                field,
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Lower (or only) value
    #[must_use]
    pub fn low(&self) -> T {
        match *self {
            Self::Single(value) | Self::Range { min: value, .. } => value,
        }
    }

    /// Upper (or only) value
    #[must_use]
    pub fn high(&self) -> T {
        match *self {
            Self::Single(value) | Self::Range { max: value, .. } => value,
        }
    }

    /// Render with a custom range separator
    #[must_use]
    pub fn render(&self, separator: &str) -> String {
        match self {
            Self::Single(value) => value.to_string(),
            Self::Range { min, max } => format!("{min}{separator}{max}"),
        }
    }
}

impl TargetValue<u16> {
    fn check_bounds(&self, field: &'static str, lower: u16, upper: u16) -> Result<(), ModelError> {
        for value in [self.low(), self.high()] {
            if value == 0 {
                return Err(ModelError::NonPositive {
                    field,
                    value: 0.0,
                });
            }
            if !(lower..=upper).contains(&value) {
                return Err(ModelError::OutOfRange {
                    field,
                    value: f64::from(value),
                    min: f64::from(lower),
                    max: f64::from(upper),
                });
            }
        }
        self.check_order(field)
    }
}

/// Intensity constraint for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// No constraint
    #[default]
    Open,
    /// Pace per unit distance
    Pace {
        /// Single pace or range
        value: TargetValue<Pace>,
        /// Distance denominator
        per: PaceUnit,
    },
    /// Heart rate in beats per minute
    HeartRate {
        /// Single bpm or range
        value: TargetValue<u16>,
    },
    /// Cadence in steps per minute
    Cadence {
        /// Single spm or range
        value: TargetValue<u16>,
    },
}

impl Target {
    /// Create a pace target
    ///
    /// # Errors
    /// Returns a `ModelError` for a pace outside 1:00-20:00 per km (scaled
    /// for miles) or an inverted range
    pub fn pace(value: TargetValue<Pace>, per: PaceUnit) -> Result<Self, ModelError> {
        let target = Self::Pace { value, per };
        target.validate()?;
        Ok(target)
    }

    /// Create a heart rate target
    ///
    /// # Errors
    /// Returns a `ModelError` when a bound is outside 40-220 bpm or the range is inverted
    pub fn heart_rate(value: TargetValue<u16>) -> Result<Self, ModelError> {
        let target = Self::HeartRate { value };
        target.validate()?;
        Ok(target)
    }

    /// Create a cadence target
    ///
    /// # Errors
    /// Returns a `ModelError` when a bound is outside 60-220 spm or the range is inverted
    pub fn cadence(value: TargetValue<u16>) -> Result<Self, ModelError> {
        let target = Self::Cadence { value };
        target.validate()?;
        Ok(target)
    }

    /// Check every target invariant
    ///
    /// # Errors
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Open => Ok(()),
            Self::Pace { value, per } => {
                let (fastest, slowest) = per.pace_bounds();
                for pace in [value.low(), value.high()] {
                    pace.validate()?;
                    if !(fastest..=slowest).contains(&pace.seconds()) {
                        return Err(ModelError::OutOfRange {
                            field: per.pace_field(),
                            value: f64::from(pace.seconds()),
                            min: f64::from(fastest),
                            max: f64::from(slowest),
                        });
                    }
                }
                value.check_order("pace")
            }
            Self::HeartRate { value } => {
                value.check_bounds("heart rate", MIN_HEART_RATE_BPM, MAX_HEART_RATE_BPM)
            }
            Self::Cadence { value } => {
                value.check_bounds("cadence", MIN_CADENCE_SPM, MAX_CADENCE_SPM)
            }
        }
    }

    /// Whether the step carries any constraint
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Compact form used in canonical text: `5:30/km`, `150-160 bpm`
impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Pace { value, per } => write!(f, "{}/{}", value.render("-"), per.as_str()),
            Self::HeartRate { value } => write!(f, "{} bpm", value.render("-")),
            Self::Cadence { value } => write!(f, "{} spm", value.render("-")),
        }
    }
}
