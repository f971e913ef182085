// ABOUTME: Subcommand implementations for garmin-workout
// ABOUTME: Reads input, runs the parser and drives the selected uploader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use garmin_workout_creator::config::CreatorConfig;
use garmin_workout_creator::formatters::{format_workout, OutputFormat};
use garmin_workout_creator::upload::{
    Credentials, DryRunUploader, OutboxUploader, UploadRequest, WorkoutUploader,
};
use tokio::io::AsyncReadExt;
use tracing::info;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{Workout, WorkoutMetadata};

use crate::helpers::display;

type Result<T> = AppResult<T>;

/// Exit status for a description that does not parse
fn invalid_workout() -> ExitCode {
    ExitCode::from(2)
}

/// Options of the `upload` subcommand
pub struct UploadArgs {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub dry_run: bool,
    pub outbox: Option<PathBuf>,
}

/// Print a preview of the workout
pub async fn parse(
    config: &CreatorConfig,
    text: Option<String>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let text = read_text(text).await?;
    let Some(workout) = parse_or_report(config, &text) else {
        return Ok(invalid_workout());
    };
    let output = format_workout(&workout, &config.default_name, format)
        .map_err(|e| AppError::internal(e.to_string()))?;
    println!("{}", output.data.trim_end());
    Ok(ExitCode::SUCCESS)
}

/// Report whether the workout parses
pub async fn check(config: &CreatorConfig, text: Option<String>) -> Result<ExitCode> {
    let text = read_text(text).await?;
    Ok(match parse_or_report(config, &text) {
        Some(workout) => {
            println!("{}", workout.summary(&config.default_name));
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    })
}

/// Parse the workout and hand it to the outbox or dry-run uploader
pub async fn upload(
    config: &CreatorConfig,
    text: Option<String>,
    args: UploadArgs,
) -> Result<ExitCode> {
    let text = read_text(text).await?;
    let Some(workout) = parse_or_report(config, &text) else {
        return Ok(invalid_workout());
    };

    let mut metadata =
        WorkoutMetadata::named(args.name.unwrap_or_else(|| config.default_name.clone()));
    if let Some(date) = args.date {
        metadata = metadata.with_scheduled_date(date);
    }
    if let Some(notes) = args.notes {
        metadata = metadata.with_notes(notes);
    }

    let credentials = Credentials::from_parts(args.email, args.password)
        .or_else(|| config.credentials.clone());
    let mut request = UploadRequest::new(workout, metadata);
    if let Some(credentials) = credentials {
        request = request.with_credentials(credentials);
    }

    let receipt = if args.dry_run {
        DryRunUploader.upload(&request).await?
    } else {
        let directory = args.outbox.unwrap_or_else(|| config.outbox_dir.clone());
        OutboxUploader::new(directory).upload(&request).await?
    };
    info!(upload.id = %receipt.id, uploader = %receipt.uploader, "Upload finished");

    display::print_receipt(&request, &receipt);
    Ok(ExitCode::SUCCESS)
}

/// Parse, printing the failure and supported formats on error
fn parse_or_report(config: &CreatorConfig, text: &str) -> Option<Workout> {
    config
        .parser()
        .parse(text)
        .map_err(|error| display::print_parse_failure(&error))
        .ok()
}

/// Use the argument, or all of stdin when it is absent
async fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map_err(|e| AppError::invalid_input(format!("cannot read workout from stdin: {e}")))?;
    Ok(buffer)
}
