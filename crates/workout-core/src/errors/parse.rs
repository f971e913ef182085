// ABOUTME: Error type for text-to-workout parsing failures
// ABOUTME: Carries the full input, the offending segment and the reason it failed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::ModelError;

/// Why a segment could not be turned into a workout step
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseFailure {
    /// Nothing but whitespace and separators was supplied
    #[error("workout description cannot be empty")]
    EmptyInput,
    /// No matcher accepted the segment
    #[error("unrecognized step; expected e.g. '1km warmup @ 5:30', '10min @ 150 bpm', '3x 400m + 90s rest' or 'cooldown'")]
    UnrecognizedPattern,
    /// Numeric value given without a unit
    #[error("'{token}' is missing a unit")]
    MissingUnit {
        /// The unit-less token
        token: String,
    },
    /// Unit not present in the canonical vocabulary
    #[error("unknown unit '{unit}'")]
    UnknownUnit {
        /// The unrecognized unit
        unit: String,
    },
    /// Pace not in `m:ss` form
    #[error("pace '{token}' must be written as m:ss with seconds below 60")]
    MalformedPace {
        /// The rejected pace token
        token: String,
    },
    /// Number that does not fit the expected numeric type
    #[error("'{token}' is not a valid number")]
    MalformedNumber {
        /// The rejected token
        token: String,
    },
    /// Parsed values violate a model invariant
    #[error(transparent)]
    Invalid(#[from] ModelError),
}

/// A workout description could not be parsed
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot parse step '{segment}': {reason}")]
pub struct ParseError {
    /// Full original input
    pub input: String,
    /// Segment that failed, as it appeared in the input
    pub segment: String,
    /// Human-readable reason
    pub reason: ParseFailure,
}

impl ParseError {
    /// Create a parse error for one segment of `input`
    #[must_use]
    pub fn new(input: impl Into<String>, segment: impl Into<String>, reason: ParseFailure) -> Self {
        Self {
            input: input.into(),
            segment: segment.into(),
            reason,
        }
    }

    /// Render the input with the failing segment underlined
    ///
    /// Falls back to the bare input when the segment cannot be located.
    #[must_use]
    pub fn highlighted(&self) -> String {
        let line = self.input.replace(['\n', '\r'], " ");
        match (self.segment.is_empty(), line.find(&self.segment)) {
            (false, Some(start)) => {
                let pad = line[..start].chars().count();
                let width = self.segment.chars().count();
                format!("{line}\n{}{}", " ".repeat(pad), "^".repeat(width))
            }
            _ => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_points_at_segment() {
        let error = ParseError::new(
            "1km warmup, banana, cooldown",
            "banana",
            ParseFailure::UnrecognizedPattern,
        );
        assert_eq!(
            error.highlighted(),
            "1km warmup, banana, cooldown\n            ^^^^^^"
        );
    }

    #[test]
    fn test_highlight_without_segment() {
        let error = ParseError::new("   ", "", ParseFailure::EmptyInput);
        assert_eq!(error.highlighted(), "   ");
    }

    #[test]
    fn test_display_includes_segment_and_reason() {
        let error = ParseError::new(
            "5 @ 4:30",
            "5 @ 4:30",
            ParseFailure::MissingUnit {
                token: "5".to_owned(),
            },
        );
        assert_eq!(
            error.to_string(),
            "cannot parse step '5 @ 4:30': '5' is missing a unit"
        );
    }
}
