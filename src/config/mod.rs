// ABOUTME: Environment-based configuration for the workout creator
// ABOUTME: Builds parser options, default metadata, outbox location and credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; there is no config file.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `WORKOUT_PACE_UNIT` | pace unit when none is written (`km`/`mi`) | `km` |
//! | `WORKOUT_INFER_BARE_HR` | read bare 40-220 targets as heart rate | `false` |
//! | `WORKOUT_UNIT_ALIASES` | extra `alias=unit` pairs, comma separated | none |
//! | `WORKOUT_DEFAULT_NAME` | workout name when none is given | `Untitled Workout` |
//! | `WORKOUT_OUTBOX_DIR` | outbox directory | `~/.garmin-workout-creator/outbox` |
//! | `GARMIN_EMAIL` / `GARMIN_PASSWORD` | service credentials | none |

/// Environment variable loading
pub mod environment;

pub use environment::CreatorConfig;

use thiserror::Error;
use workout_core::errors::AppError;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Variable holds a value outside its accepted set
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Rejected value
        value: String,
        /// What was expected
        reason: &'static str,
    },

    /// No home directory to derive a default path from
    #[error("Cannot determine home directory for default {0}")]
    NoHomeDirectory(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
