// ABOUTME: Loads CreatorConfig from environment variables with strict validation
// ABOUTME: Invalid values are reported instead of silently replaced by defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::PathBuf;

use tracing::debug;
use workout_core::constants::metadata::DEFAULT_WORKOUT_NAME;
use workout_core::models::{PaceUnit, WorkoutMetadata};

use super::ConfigError;
use crate::parser::normalize::is_reserved_word;
use crate::parser::{ParserOptions, UnitAliases, WorkoutParser};
use crate::upload::Credentials;

/// Directory under the home directory holding local state
pub const APP_DIR_NAME: &str = ".garmin-workout-creator";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CreatorConfig {
    /// Options handed to the parser
    pub parser: ParserOptions,
    /// Name used when the user gives none
    pub default_name: String,
    /// Where the outbox uploader writes handoff files
    pub outbox_dir: PathBuf,
    /// Service credentials, when both parts are set
    pub credentials: Option<Credentials>,
}

impl CreatorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns `ConfigError` when a variable holds an invalid value or no
    /// home directory exists for the default outbox path
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_pace_unit = match env::var("WORKOUT_PACE_UNIT") {
            Ok(value) => parse_pace_unit(&value)?,
            Err(_) => PaceUnit::Kilometer,
        };

        let infer_bare_heart_rate = env::var("WORKOUT_INFER_BARE_HR")
            .map(|v| parse_bool(&v))
            .unwrap_or(false);

        let aliases = match env::var("WORKOUT_UNIT_ALIASES") {
            Ok(value) => parse_aliases(&value, UnitAliases::default())?,
            Err(_) => UnitAliases::default(),
        };

        let default_name = env_var_or("WORKOUT_DEFAULT_NAME", DEFAULT_WORKOUT_NAME);
        WorkoutMetadata::named(default_name.clone())
            .validate()
            .map_err(|_| ConfigError::InvalidValue {
                key: "WORKOUT_DEFAULT_NAME",
                value: default_name.clone(),
                reason: "expected 1-100 characters",
            })?;

        let outbox_dir = match env::var("WORKOUT_OUTBOX_DIR") {
            Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
            _ => default_outbox_dir()?,
        };

        let credentials =
            Credentials::from_parts(env::var("GARMIN_EMAIL").ok(), env::var("GARMIN_PASSWORD").ok());

        let config = Self {
            parser: ParserOptions {
                aliases,
                default_pace_unit,
                infer_bare_heart_rate,
            },
            default_name,
            outbox_dir,
            credentials,
        };
        debug!(
            pace_unit = config.parser.default_pace_unit.as_str(),
            infer_bare_heart_rate = config.parser.infer_bare_heart_rate,
            aliases = config.parser.aliases.len(),
            outbox = %config.outbox_dir.display(),
            has_credentials = config.credentials.is_some(),
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Parser configured with these options
    #[must_use]
    pub fn parser(&self) -> WorkoutParser {
        WorkoutParser::new(self.parser.clone())
    }
}

/// `~/.garmin-workout-creator/outbox`
///
/// # Errors
/// Returns `ConfigError::NoHomeDirectory` when the home directory is unknown
pub fn default_outbox_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(APP_DIR_NAME).join("outbox"))
        .ok_or(ConfigError::NoHomeDirectory("outbox directory"))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value.eq_ignore_ascii_case("false") || value == "0")
}

fn parse_pace_unit(value: &str) -> Result<PaceUnit, ConfigError> {
    let normalized = value.trim().to_lowercase();
    let canonical = UnitAliases::default()
        .canonical(&normalized)
        .map_or(normalized.clone(), str::to_owned);
    PaceUnit::from_canonical(&canonical).ok_or_else(|| ConfigError::InvalidValue {
        key: "WORKOUT_PACE_UNIT",
        value: value.to_owned(),
        reason: "expected km or mi",
    })
}

/// Parse `alias=unit,alias=unit` on top of `base`
fn parse_aliases(value: &str, base: UnitAliases) -> Result<UnitAliases, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: "WORKOUT_UNIT_ALIASES",
        value: value.to_owned(),
        reason: "expected alias=unit pairs with units km, m, mi, s, min, h, bpm or spm",
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .try_fold(base, |table, pair| {
            let (alias, canonical) = pair.split_once('=').ok_or_else(invalid)?;
            let alias = alias.trim();
            if alias.is_empty() || !alias.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid());
            }
            if is_reserved_word(alias) {
                return Err(ConfigError::InvalidValue {
                    key: "WORKOUT_UNIT_ALIASES",
                    value: value.to_owned(),
                    reason: "aliases cannot shadow x, to, per or step keywords",
                });
            }
            table
                .with_alias(alias, canonical.trim())
                .ok_or_else(invalid)
        })
}
