// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Model bounds, unit conversion factors and metadata defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Bounds enforced on workout model values
pub mod limits {
    /// Smallest allowed repeat count
    pub const MIN_REPEAT_COUNT: u32 = 1;
    /// Largest repeat count the device format can express
    pub const MAX_REPEAT_COUNT: u32 = 99;
    /// Lowest plausible heart rate target
    pub const MIN_HEART_RATE_BPM: u16 = 40;
    /// Theoretical maximum heart rate
    pub const MAX_HEART_RATE_BPM: u16 = 220;
    /// Lowest plausible running cadence
    pub const MIN_CADENCE_SPM: u16 = 60;
    /// Highest plausible running cadence
    pub const MAX_CADENCE_SPM: u16 = 220;
    /// Fastest accepted pace, in seconds per kilometer (1:00/km)
    pub const MIN_PACE_SECONDS_PER_KM: u32 = 60;
    /// Slowest accepted pace, in seconds per kilometer (20:00/km)
    pub const MAX_PACE_SECONDS_PER_KM: u32 = 1200;
}

/// Unit conversion factors
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Meters per statute mile
    pub const METERS_PER_MILE: f64 = 1_609.344;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

/// Upload metadata defaults and limits
pub mod metadata {
    /// Name used when the caller supplies none
    pub const DEFAULT_WORKOUT_NAME: &str = "Untitled Workout";
    /// Maximum workout name length in characters
    pub const MAX_NAME_LENGTH: usize = 100;
    /// Maximum notes length in characters
    pub const MAX_NOTES_LENGTH: usize = 500;
}
