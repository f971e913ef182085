// ABOUTME: Main library entry point for the Garmin workout creator
// ABOUTME: Natural-language workout parsing, previews, configuration and upload handoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Garmin Workout Creator
//!
//! Converts running workouts written the way runners write them into
//! structured, validated workouts ready for a fitness service.
//!
//! ## Architecture
//!
//! - **Parser**: segment splitting, unit normalization, ordered matchers
//! - **Formatters**: text preview, JSON output, canonical text
//! - **Upload**: the `WorkoutUploader` boundary with dry-run and outbox uploaders
//! - **Config**: environment-only configuration
//! - **Logging**: `tracing` subscriber setup
//!
//! The data model and error types live in the `workout_core` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use garmin_workout_creator::parser;
//!
//! let workout = parser::parse("1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest, 1km cooldown")
//!     .map_err(|e| e.to_string())?;
//! assert_eq!(workout.len(), 3);
//! assert_eq!(workout.step_count(), 8);
//! # Ok::<(), String>(())
//! ```

/// Environment-based configuration
pub mod config;

/// Workout rendering (preview, JSON, canonical text)
pub mod formatters;

/// Logging configuration and structured logging setup
pub mod logging;

/// Natural-language workout parser
pub mod parser;

/// Upload boundary and bundled uploaders
pub mod upload;

pub use parser::{can_parse, parse, ParserOptions, WorkoutParser};
