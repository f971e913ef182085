// ABOUTME: Uploader that validates a request and logs what would be uploaded
// ABOUTME: Used for previews and the CLI --dry-run flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tracing::info;
use workout_core::errors::UploadError;

use super::{UploadReceipt, UploadRequest, WorkoutUploader};

/// Validates and logs; never writes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunUploader;

#[async_trait]
impl WorkoutUploader for DryRunUploader {
    fn name(&self) -> &'static str {
        "dry_run"
    }

    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt, UploadError> {
        request.validate()?;
        let receipt = UploadReceipt::new(self.name());
        info!(
            upload.id = %receipt.id,
            workout.name = %request.metadata.name,
            workout.steps = request.workout.step_count(),
            scheduled = ?request.metadata.scheduled_date,
            "Dry run: workout accepted but not uploaded"
        );
        Ok(receipt)
    }
}
