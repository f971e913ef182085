// ABOUTME: Natural-language workout parser entry points and options
// ABOUTME: Splits text into segments, normalizes them and dispatches to ordered matchers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Parser
//!
//! Turns a description such as `1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest,
//! 1km cooldown` into a validated [`Workout`].
//!
//! Parsing is pure and deterministic. Each segment (split on `,`, `;` or a
//! newline) is normalized and then offered to the matchers in order. The first
//! matcher that recognizes the segment decides its fate: it either produces a
//! step or reports why the values are invalid. The first failing segment aborts
//! the whole parse with a [`ParseError`] naming it.

/// Ordered segment matchers
pub mod matchers;
/// Segment normalization and unit aliases
pub mod normalize;
/// Step-type inference from keywords
pub mod step_type;
/// Target sub-grammar
pub mod target;

use std::sync::LazyLock;

use tracing::debug;
use workout_core::errors::{ParseError, ParseFailure};
use workout_core::models::{PaceUnit, Step, Workout};

pub use matchers::MatchOutcome;
pub use normalize::UnitAliases;

/// Characters that separate steps in a description
pub const SEGMENT_SEPARATORS: [char; 3] = [',', ';', '\n'];

/// Knobs that change how ambiguous text is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Unit aliases applied during normalization
    pub aliases: UnitAliases,
    /// Pace unit used when a pace has no `/unit`
    pub default_pace_unit: PaceUnit,
    /// Read a bare number in 40-220 as a heart rate instead of failing
    pub infer_bare_heart_rate: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            aliases: UnitAliases::default(),
            default_pace_unit: PaceUnit::Kilometer,
            infer_bare_heart_rate: false,
        }
    }
}

/// Parser bound to a fixed set of options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutParser {
    options: ParserOptions,
}

static DEFAULT_PARSER: LazyLock<WorkoutParser> = LazyLock::new(WorkoutParser::default);

impl WorkoutParser {
    /// Create a parser with the given options
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a full workout description
    ///
    /// # Errors
    /// Returns a [`ParseError`] for empty input or the first segment that
    /// cannot be parsed into a valid step
    pub fn parse(&self, text: &str) -> Result<Workout, ParseError> {
        let segments = split_segments(text);
        if segments.is_empty() {
            return Err(ParseError::new(text, "", ParseFailure::EmptyInput));
        }

        let mut steps = Vec::with_capacity(segments.len());
        for segment in segments {
            let step = self
                .parse_segment(segment)
                .map_err(|reason| ParseError::new(text, segment, reason))?;
            steps.push(step);
        }

        Workout::new(steps).map_err(|reason| ParseError::new(text, text.trim(), reason.into()))
    }

    /// Whether `text` parses without error
    #[must_use]
    pub fn can_parse(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }

    /// Parse one already-split segment into a step
    ///
    /// # Errors
    /// Returns the reason the segment was rejected
    pub fn parse_segment(&self, segment: &str) -> Result<Step, ParseFailure> {
        let normalized = self.options.aliases.normalize(segment);
        for (name, matcher) in matchers::MATCHERS {
            match matcher(&normalized, &self.options) {
                MatchOutcome::NoMatch => {}
                MatchOutcome::Matched(step) => {
                    debug!(segment = %normalized, matcher = name, "Classified workout segment");
                    return Ok(step);
                }
                MatchOutcome::Invalid(reason) => {
                    debug!(segment = %normalized, matcher = name, %reason, "Rejected workout segment");
                    return Err(reason);
                }
            }
        }
        debug!(segment = %normalized, "No matcher recognized workout segment");
        Err(ParseFailure::UnrecognizedPattern)
    }
}

/// Split a description into trimmed, non-empty segments
#[must_use]
pub fn split_segments(text: &str) -> Vec<&str> {
    text.split(SEGMENT_SEPARATORS)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Parse with default options
///
/// # Errors
/// See [`WorkoutParser::parse`]
pub fn parse(text: &str) -> Result<Workout, ParseError> {
    DEFAULT_PARSER.parse(text)
}

/// Whether `text` parses with default options
#[must_use]
pub fn can_parse(text: &str) -> bool {
    DEFAULT_PARSER.can_parse(text)
}
