// ABOUTME: Error type for the upload collaborator boundary
// ABOUTME: Covers metadata validation, credentials, handoff I/O and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure while handing a workout to an upload collaborator
#[derive(Debug, Error)]
pub enum UploadError {
    /// Metadata supplied with the workout is unusable
    #[error("invalid {field}: {reason}")]
    InvalidMetadata {
        /// Metadata field name
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
    /// Collaborator needs credentials and none were supplied
    #[error("no credentials supplied; provide an email and password for the first upload")]
    MissingCredentials,
    /// Collaborator refused the workout
    #[error("upload rejected: {reason}")]
    Rejected {
        /// Reason reported by the collaborator
        reason: String,
    },
    /// Filesystem failure while writing a handoff file
    #[error("failed to write upload handoff: {0}")]
    Io(#[from] std::io::Error),
    /// Workout could not be encoded
    #[error("failed to encode workout: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UploadError {
    /// Create a metadata validation error
    #[must_use]
    pub fn invalid_metadata(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            field,
            reason: reason.into(),
        }
    }
}
