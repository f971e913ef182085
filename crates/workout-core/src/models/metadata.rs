// ABOUTME: User-supplied workout metadata handed to upload collaborators
// ABOUTME: Name, optional scheduled date and optional notes with length limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::metadata::{DEFAULT_WORKOUT_NAME, MAX_NAME_LENGTH, MAX_NOTES_LENGTH};
use crate::errors::UploadError;

/// Metadata attached to a workout at upload time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutMetadata {
    /// Workout name shown on the device
    pub name: String,
    /// Calendar date to schedule the workout on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for WorkoutMetadata {
    fn default() -> Self {
        Self::named(DEFAULT_WORKOUT_NAME)
    }
}

impl WorkoutMetadata {
    /// Metadata with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheduled_date: None,
            notes: None,
        }
    }

    /// Set the scheduled date
    #[must_use]
    pub fn with_scheduled_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    /// Set notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check name and notes limits
    ///
    /// # Errors
    /// Returns `UploadError::InvalidMetadata` for a blank or over-long name, or over-long notes
    pub fn validate(&self) -> Result<(), UploadError> {
        let name_length = self.name.trim().chars().count();
        if name_length == 0 {
            return Err(UploadError::invalid_metadata("name", "must not be blank"));
        }
        if name_length > MAX_NAME_LENGTH {
            return Err(UploadError::invalid_metadata(
                "name",
                format!("must be at most {MAX_NAME_LENGTH} characters, got {name_length}"),
            ));
        }
        if let Some(notes) = &self.notes {
            let notes_length = notes.chars().count();
            if notes_length > MAX_NOTES_LENGTH {
                return Err(UploadError::invalid_metadata(
                    "notes",
                    format!("must be at most {MAX_NOTES_LENGTH} characters, got {notes_length}"),
                ));
            }
        }
        Ok(())
    }
}
