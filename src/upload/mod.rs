// ABOUTME: Upload boundary between parsed workouts and the fitness service sync layer
// ABOUTME: Defines the async uploader trait, request and receipt types, and credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Upload Boundary
//!
//! A parsed [`Workout`] plus its [`WorkoutMetadata`] form an [`UploadRequest`].
//! Any [`WorkoutUploader`] can accept it; the service wire format and
//! transport live outside this crate.
//!
//! ## Bundled uploaders
//!
//! - [`DryRunUploader`]: validates and logs, touches nothing
//! - [`OutboxUploader`]: writes a JSON handoff file for the external sync tool
//!
//! ```rust,no_run
//! use garmin_workout_creator::parser;
//! use garmin_workout_creator::upload::{DryRunUploader, UploadRequest, WorkoutUploader};
//! use workout_core::models::WorkoutMetadata;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workout = parser::parse("10min warmup, 5x 3min @ 4:10 + 2min jog, cooldown")?;
//! let request = UploadRequest::new(workout, WorkoutMetadata::named("VO2 max"));
//! let receipt = DryRunUploader.upload(&request).await?;
//! println!("{}", receipt.id);
//! # Ok(())
//! # }
//! ```

/// Uploader that only validates and logs
pub mod dry_run;
/// Uploader that writes JSON handoff files
pub mod outbox;

pub use dry_run::DryRunUploader;
pub use outbox::OutboxUploader;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use workout_core::errors::UploadError;
use workout_core::models::{Workout, WorkoutMetadata};

/// Account credentials for the fitness service
///
/// The password never appears in `Debug` output or serialized handoff files.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email
    pub email: String,
    password: String,
}

impl Credentials {
    /// Create credentials
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Account password, for uploaders that sign in to the service
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Build credentials only when both parts are present and non-blank
    #[must_use]
    pub fn from_parts(email: Option<String>, password: Option<String>) -> Option<Self> {
        match (email, password) {
            (Some(email), Some(password))
                if !email.trim().is_empty() && !password.is_empty() =>
            {
                Some(Self::new(email.trim(), password))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Everything an uploader needs to create a workout
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    /// Parsed workout
    pub workout: Workout,
    /// Name, schedule date and notes
    pub metadata: WorkoutMetadata,
    /// Service credentials, if the uploader needs them
    pub credentials: Option<Credentials>,
}

impl UploadRequest {
    /// Request without credentials
    #[must_use]
    pub const fn new(workout: Workout, metadata: WorkoutMetadata) -> Self {
        Self {
            workout,
            metadata,
            credentials: None,
        }
    }

    /// Attach credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Validate the metadata before any side effect
    ///
    /// # Errors
    /// Returns `UploadError::InvalidMetadata` for a blank or overlong name or
    /// overlong notes
    pub fn validate(&self) -> Result<(), UploadError> {
        self.metadata.validate()
    }
}

/// Proof that an uploader accepted a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Identifier assigned to the upload
    pub id: Uuid,
    /// Name of the uploader that accepted it
    pub uploader: String,
    /// When it was accepted
    pub accepted_at: DateTime<Utc>,
    /// Where the handoff was written, if anywhere
    pub location: Option<String>,
}

impl UploadReceipt {
    /// New receipt with a fresh id
    #[must_use]
    pub fn new(uploader: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            uploader: uploader.to_owned(),
            accepted_at: Utc::now(),
            location: None,
        }
    }

    /// Record where the handoff was written
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Destination for parsed workouts
///
/// Implementations must validate the request before any side effect.
#[async_trait]
pub trait WorkoutUploader: Send + Sync {
    /// Uploader name used in logs and receipts
    fn name(&self) -> &'static str;

    /// Hand a workout to the service
    ///
    /// # Errors
    /// Returns an `UploadError` for invalid metadata, missing credentials,
    /// rejection, or I/O and serialization failures
    async fn upload(&self, request: &UploadRequest) -> Result<UploadReceipt, UploadError>;
}
