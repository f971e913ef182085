// ABOUTME: Uploader that writes each request as a JSON handoff file in an outbox directory
// ABOUTME: The external sync tool picks the files up; passwords are never written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;
use workout_core::errors::UploadError;
use workout_core::models::{Workout, WorkoutMetadata};

use super::{UploadReceipt, UploadRequest, WorkoutUploader};

/// Contents of one handoff file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboxEntry {
    /// Upload id, also the file stem
    pub id: Uuid,
    /// When the entry was written
    pub created_at: DateTime<Utc>,
    /// Account email, if credentials were supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Name, schedule date and notes
    pub metadata: WorkoutMetadata,
    /// Parsed workout
    pub workout: Workout,
}

/// Writes `<outbox>/<id>.json` for every accepted request
#[derive(Debug, Clone)]
pub struct OutboxUploader {
    directory: PathBuf,
    require_credentials: bool,
}

impl OutboxUploader {
    /// Outbox rooted at `directory`; created on first upload
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            require_credentials: false,
        }
    }

    /// Reject requests that carry no credentials
    ///
    /// Off by default: the entry only records the account email, and the
    /// sync tool signs in with its own stored login.
    #[must_use]
    pub const fn requiring_credentials(mut self) -> Self {
        self.require_credentials = true;
        self
    }

    /// Outbox directory
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Read a handoff file back
    ///
    /// # Errors
    /// Returns `UploadError::Io` or `UploadError::Serialization` when the file
    /// cannot be read or is not a valid entry
    pub async fn read_entry(path: &Path) -> Result<OutboxEntry, UploadError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl WorkoutUploader for OutboxUploader {
    fn name(&self) -> &'static str {
        "outbox"
    }

    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt, UploadError> {
        request.validate()?;
        if self.require_credentials && request.credentials.is_none() {
            return Err(UploadError::MissingCredentials);
        }

        let receipt = UploadReceipt::new(self.name());
        let entry = OutboxEntry {
            id: receipt.id,
            created_at: receipt.accepted_at,
            email: request.credentials.as_ref().map(|c| c.email.clone()),
            metadata: request.metadata.clone(),
            workout: request.workout.clone(),
        };
        let body = serde_json::to_vec_pretty(&entry)?;

        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.directory.join(format!("{}.json", entry.id));
        debug!(path = %path.display(), bytes = body.len(), "Writing outbox entry");
        tokio::fs::write(&path, body).await?;

        info!(
            upload.id = %entry.id,
            workout.name = %entry.metadata.name,
            path = %path.display(),
            "Workout queued in outbox"
        );
        Ok(receipt.at(path.display().to_string()))
    }
}
