// ABOUTME: Core types and constants for the workout creator
// ABOUTME: Foundation crate with the workout data model, error handling, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing the structured workout model shared by the
//! parser, the preview formatters, and upload collaborators. This crate is
//! designed to change infrequently, enabling incremental compilation benefits
//! in the workspace.
//!
//! ## Modules
//!
//! - **models**: `Workout`, `Step`, `Duration`, `Target` and the upload metadata
//! - **errors**: `ParseError`, `ModelError`, `UploadError` and the unified `AppError`
//! - **constants**: Model limits, unit conversion factors and defaults

/// Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
pub mod errors;

/// Model limits, unit conversions and defaults organized by domain
pub mod constants;

/// Workout data model (Workout, Step, Duration, Target, metadata)
pub mod models;
