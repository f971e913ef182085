// ABOUTME: Output format abstraction for rendering parsed workouts
// ABOUTME: Supports a human-readable text preview (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: numbered preview with repeat groups indented, for terminals
//! - **JSON**: the serde representation of the workout, for scripts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use garmin_workout_creator::formatters::{format_workout, OutputFormat};
//! use garmin_workout_creator::parser;
//!
//! if let Ok(workout) = parser::parse("1km warmup, 3x 400m @ 4:30 + 90s rest") {
//!     if let Ok(output) = format_workout(&workout, "Track", OutputFormat::Text) {
//!         println!("{}", output.data);
//!     }
//! }
//! ```

/// Canonical text rendering that parses back to the same workout
pub mod canonical;
/// Structured preview lines
pub mod preview;

pub use canonical::to_canonical_text;
pub use preview::{preview_lines, render_preview, PreviewLine};

use std::fmt;

use clap::ValueEnum;
use workout_core::models::Workout;

/// Output serialization format selector
///
/// Derives `ValueEnum` so the CLI rejects unknown format names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Text preview (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered workout and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered workout
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Render a workout in the requested format
///
/// The text format starts with the workout summary line and is followed by
/// the numbered preview. The JSON format is the serde form of the workout.
///
/// # Errors
/// Returns `FormatError` if JSON serialization fails
pub fn format_workout(
    workout: &Workout,
    name: &str,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => format!("{}\n{}", workout.summary(name), render_preview(workout)),
        OutputFormat::Json => serde_json::to_string_pretty(workout).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("jsno", true).is_err());
        for format in OutputFormat::value_variants() {
            assert_eq!(OutputFormat::from_str(format.as_str(), false), Ok(*format));
        }
    }

    #[test]
    fn test_content_types() {
        assert_eq!(OutputFormat::Json.content_type(), "application/json");
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
