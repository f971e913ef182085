// ABOUTME: Unified error handling for the workout creator
// ABOUTME: Defines ErrorCode, AppError, AppResult and re-exports the domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain errors (`ParseError`, `ModelError`, `UploadError`) carry precise
//! context for the layer that raised them. Callers that only need a category
//! and a message convert them into `AppError`, which pairs a stable
//! `ErrorCode` with the human-readable description.

mod model;
mod parse;
mod upload;

pub use model::ModelError;
pub use parse::{ParseError, ParseFailure};
pub use upload::UploadError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input text could not be understood
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A value has the wrong shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A value is outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // External Services (5000-5999)
    /// Upload collaborator rejected the request
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// Credentials were missing or refused
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Filesystem failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON encoding or decoding failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Short description of the error category
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::MissingRequiredField => "Missing required field",
            Self::InvalidFormat => "Invalid format",
            Self::ValueOutOfRange => "Value out of range",
            Self::ExternalServiceError => "Upload failed",
            Self::ExternalAuthFailed => "Authentication failed",
            Self::ConfigInvalid => "Invalid configuration",
            Self::InternalError => "Internal error",
            Self::StorageError => "Storage error",
            Self::SerializationError => "Serialization error",
        }
    }

    /// Whether the error was caused by what the user typed
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::InvalidFormat
                | Self::ValueOutOfRange
                | Self::ConfigInvalid
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Application error pairing an `ErrorCode` with a message
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Human-readable detail
    pub message: String,
}

impl AppError {
    /// Create a new error
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl From<ParseError> for AppError {
    fn from(error: ParseError) -> Self {
        let code = match &error.reason {
            ParseFailure::Invalid(model) => model.code(),
            ParseFailure::EmptyInput => ErrorCode::MissingRequiredField,
            ParseFailure::MissingUnit { .. }
            | ParseFailure::UnknownUnit { .. }
            | ParseFailure::MalformedPace { .. }
            | ParseFailure::MalformedNumber { .. } => ErrorCode::InvalidFormat,
            ParseFailure::UnrecognizedPattern => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
    }
}

impl From<ModelError> for AppError {
    fn from(error: ModelError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

impl From<UploadError> for AppError {
    fn from(error: UploadError) -> Self {
        let code = match &error {
            UploadError::InvalidMetadata { .. } => ErrorCode::InvalidInput,
            UploadError::MissingCredentials => ErrorCode::ExternalAuthFailed,
            UploadError::Rejected { .. } => ErrorCode::ExternalServiceError,
            UploadError::Io(_) => ErrorCode::StorageError,
            UploadError::Serialization(_) => ErrorCode::SerializationError,
        };
        Self::new(code, error.to_string())
    }
}
