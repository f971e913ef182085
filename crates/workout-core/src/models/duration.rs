// ABOUTME: Step duration model (distance, time or open until lap press)
// ABOUTME: Includes the canonical distance and time unit vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format_number;
use crate::constants::units::{
    METERS_PER_KILOMETER, METERS_PER_MILE, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::errors::ModelError;

/// Unit of a distance-based duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Meters (`m`)
    Meter,
    /// Kilometers (`km`)
    Kilometer,
    /// Statute miles (`mi`)
    Mile,
}

impl DistanceUnit {
    /// Canonical abbreviation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Mile => "mi",
        }
    }

    /// Look up a canonical abbreviation
    #[must_use]
    pub fn from_canonical(unit: &str) -> Option<Self> {
        match unit {
            "m" => Some(Self::Meter),
            "km" => Some(Self::Kilometer),
            "mi" => Some(Self::Mile),
            _ => None,
        }
    }

    /// Convert a value in this unit to meters
    #[must_use]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Meter => value,
            Self::Kilometer => value * METERS_PER_KILOMETER,
            Self::Mile => value * METERS_PER_MILE,
        }
    }
}

/// Unit of a time-based duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Seconds (`s`)
    Second,
    /// Minutes (`min`)
    Minute,
    /// Hours (`h`)
    Hour,
}

impl TimeUnit {
    /// Canonical abbreviation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
        }
    }

    /// Look up a canonical abbreviation
    #[must_use]
    pub fn from_canonical(unit: &str) -> Option<Self> {
        match unit {
            "s" => Some(Self::Second),
            "min" => Some(Self::Minute),
            "h" => Some(Self::Hour),
            _ => None,
        }
    }

    /// Convert a value in this unit to seconds
    #[must_use]
    pub fn to_seconds(self, value: f64) -> f64 {
        match self {
            Self::Second => value,
            Self::Minute => value * SECONDS_PER_MINUTE,
            Self::Hour => value * SECONDS_PER_HOUR,
        }
    }
}

/// How long a step lasts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Duration {
    /// Ends after covering a distance
    Distance {
        /// Distance in `unit`
        value: f64,
        /// Distance unit
        unit: DistanceUnit,
    },
    /// Ends after elapsed time
    Time {
        /// Time in `unit`
        value: f64,
        /// Time unit
        unit: TimeUnit,
    },
    /// Ends when the lap button is pressed
    Open,
}

impl Duration {
    /// Create a distance duration
    ///
    /// # Errors
    /// Returns a `ModelError` unless `value` is a finite number above zero
    pub fn distance(value: f64, unit: DistanceUnit) -> Result<Self, ModelError> {
        let duration = Self::Distance { value, unit };
        duration.validate()?;
        Ok(duration)
    }

    /// Create a time duration
    ///
    /// # Errors
    /// Returns a `ModelError` unless `value` is a finite number above zero
    pub fn time(value: f64, unit: TimeUnit) -> Result<Self, ModelError> {
        let duration = Self::Time { value, unit };
        duration.validate()?;
        Ok(duration)
    }

    /// Check the value invariant
    ///
    /// # Errors
    /// Returns `ModelError::NonFinite` for NaN or infinite values and
    /// `ModelError::NonPositive` for zero or negative ones
    pub fn validate(&self) -> Result<(), ModelError> {
        match *self {
            Self::Distance { value, .. } | Self::Time { value, .. } => {
                if value.is_finite() {
                    if value > 0.0 {
                        Ok(())
                    } else {
                        Err(ModelError::NonPositive {
                            field: "duration",
                            value,
                        })
                    }
                } else {
                    Err(ModelError::NonFinite { field: "duration" })
                }
            }
            Self::Open => Ok(()),
        }
    }

    /// Distance in meters, if distance-based
    #[must_use]
    pub fn meters(&self) -> Option<f64> {
        match *self {
            Self::Distance { value, unit } => Some(unit.to_meters(value)),
            Self::Time { .. } | Self::Open => None,
        }
    }

    /// Time in seconds, if time-based
    #[must_use]
    pub fn seconds(&self) -> Option<f64> {
        match *self {
            Self::Time { value, unit } => Some(unit.to_seconds(value)),
            Self::Distance { .. } | Self::Open => None,
        }
    }

    /// Whether the step ends on a lap press
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Compact form used in canonical text: `1.5km`, `90s`, `open`
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Distance { value, unit } => {
                write!(f, "{}{}", format_number(value), unit.as_str())
            }
            Self::Time { value, unit } => write!(f, "{}{}", format_number(value), unit.as_str()),
            Self::Open => f.write_str("open"),
        }
    }
}
