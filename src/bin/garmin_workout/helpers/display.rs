// ABOUTME: Output formatting helpers for garmin-workout
// ABOUTME: Prints parse failures, upload receipts and errors consistently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use garmin_workout_creator::upload::{UploadReceipt, UploadRequest};
use workout_core::errors::{AppError, ParseError};

/// Example inputs shown after a parse failure
const SUPPORTED_FORMATS: &[(&str, &str)] = &[
    ("Distance", "1km warmup @ 5:30"),
    ("Time", "10min @ 165 bpm"),
    ("Intervals", "3x 1km @ 4:45 + 2min rest"),
    ("Pace range", "20min tempo @ 4:30-4:40/km"),
    ("Open step", "cooldown"),
];

/// Show where parsing failed and what the parser accepts
pub fn print_parse_failure(error: &ParseError) {
    eprintln!("error: {error}");
    eprintln!();
    eprintln!("{}", error.highlighted());
    eprintln!();
    eprintln!("Supported formats:");
    for (label, example) in SUPPORTED_FORMATS {
        eprintln!("  - {label}: {example}");
    }
}

/// Summarize an accepted upload
pub fn print_receipt(request: &UploadRequest, receipt: &UploadReceipt) {
    println!("{}", request.workout.summary(&request.metadata.name));
    if let Some(date) = request.metadata.scheduled_date {
        println!("   Scheduled: {}", date.format("%Y-%m-%d"));
    }
    if let Some(credentials) = &request.credentials {
        println!("   Account: {}", credentials.email);
    }
    println!("   Upload ID: {}", receipt.id);
    match &receipt.location {
        Some(location) => println!("   Queued at: {location}"),
        None => println!("   Dry run: nothing was written"),
    }
}

/// Print an error with its code
pub fn print_error(error: &AppError) {
    eprintln!("error: {}", error.message);
    eprintln!("       ({})", error.code.description());
}
