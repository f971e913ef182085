// ABOUTME: garmin-workout - command-line front end for the workout parser
// ABOUTME: Parses, checks and queues natural-language running workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Preview a workout
//! garmin-workout parse "1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest, 1km cooldown"
//!
//! # Same workout as JSON, read from stdin
//! echo "10min wu, 20min tempo @ 4:30-4:40/km, cd" | garmin-workout parse --format json
//!
//! # Exit status only
//! garmin-workout check "5x 400m @ 3:50 + 90s jog"
//!
//! # Queue for upload (account email from GARMIN_EMAIL, if set)
//! garmin-workout upload "3x 1mi @ 7:00/mi + 2min rest" --name "Mile repeats" --date 2025-06-01
//!
//! # Validate and log without writing anything
//! garmin-workout upload "45min easy" --dry-run
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use garmin_workout_creator::config::CreatorConfig;
use garmin_workout_creator::formatters::OutputFormat;
use garmin_workout_creator::logging;
use tracing::debug;
use workout_core::errors::ErrorCode;

#[derive(Parser)]
#[command(
    name = "garmin-workout",
    version,
    about = "Turn natural-language running workouts into structured workouts",
    long_about = "Parses descriptions like '1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest' into structured workouts, previews them, and queues them for upload."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Parse a workout and print a preview
    Parse {
        /// Workout description (read from stdin when omitted)
        text: Option<String>,

        /// Output format
        #[arg(
            long,
            short = 'f',
            value_enum,
            ignore_case = true,
            default_value_t = OutputFormat::Text
        )]
        format: OutputFormat,
    },

    /// Exit with status 0 if the workout parses, 1 otherwise
    Check {
        /// Workout description (read from stdin when omitted)
        text: Option<String>,
    },

    /// Parse a workout and hand it to an uploader
    Upload {
        /// Workout description (read from stdin when omitted)
        text: Option<String>,

        /// Workout name (defaults to WORKOUT_DEFAULT_NAME)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Scheduled date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Account email (overrides GARMIN_EMAIL), recorded in the outbox entry
        #[arg(long)]
        email: Option<String>,

        /// Account password (overrides GARMIN_PASSWORD). Only uploaders that
        /// sign in read it; the outbox never stores it and works without it
        #[arg(long)]
        password: Option<String>,

        /// Validate and log without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Outbox directory (overrides WORKOUT_OUTBOX_DIR)
        #[arg(long)]
        outbox: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_from_env(cli.verbose.then_some("debug"))?;

    let config = match CreatorConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            helpers::display::print_error(&error.into());
            return Ok(exit_code(ErrorCode::ConfigInvalid));
        }
    };
    debug!(outbox = %config.outbox_dir.display(), "garmin-workout starting");

    let result = match cli.command {
        Command::Parse { text, format } => commands::parse(&config, text, format).await,
        Command::Check { text } => commands::check(&config, text).await,
        Command::Upload {
            text,
            name,
            date,
            notes,
            email,
            password,
            dry_run,
            outbox,
        } => {
            let args = commands::UploadArgs {
                name,
                date,
                notes,
                email,
                password,
                dry_run,
                outbox,
            };
            commands::upload(&config, text, args).await
        }
    };

    Ok(match result {
        Ok(code) => code,
        Err(error) => {
            helpers::display::print_error(&error);
            exit_code(error.code)
        }
    })
}

/// 2 for problems with the user's input, 1 for everything else
fn exit_code(code: ErrorCode) -> ExitCode {
    if code.is_user_error() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_format(args: &[&str]) -> Result<OutputFormat, clap::Error> {
        let cli = Cli::try_parse_from(["garmin-workout", "parse", "1km easy"].iter().chain(args))?;
        let Command::Parse { format, .. } = cli.command else {
            unreachable!("arguments always select the parse subcommand");
        };
        Ok(format)
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(parse_format(&[]).unwrap(), OutputFormat::Text);
        assert_eq!(parse_format(&["--format", "json"]).unwrap(), OutputFormat::Json);
        assert_eq!(parse_format(&["-f", "JSON"]).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let error = parse_format(&["--format", "jsno"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
