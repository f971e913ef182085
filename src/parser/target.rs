// ABOUTME: Target sub-grammar parsed after the `@` in a segment
// ABOUTME: Handles m:ss paces, bpm heart rates, spm cadences and their ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::{Captures, Regex};
use workout_core::constants::limits::{MAX_HEART_RATE_BPM, MIN_HEART_RATE_BPM};
use workout_core::errors::ParseFailure;
use workout_core::models::{Pace, PaceUnit, Target, TargetValue};

use super::ParserOptions;

// Matches: 5:30, 5:30/km, 4:45-5:00/km, 4:45/mi to 5:00/mi, 5:30min/km
static PACE_TARGET: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<low>\d+:\d+)(?:min)?(?:\s*/\s*(?P<low_unit>[a-z]+))?(?:\s*(?:-|to)\s*(?P<high>\d+:\d+)(?:min)?(?:\s*/\s*(?P<high_unit>[a-z]+))?)?$",
    )
    .ok()
});

// Matches: 165bpm, 150-160bpm, 150bpm to 160bpm, 180spm, 165
static NUMERIC_TARGET: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<low>\d+)(?P<low_unit>[a-z]+)?(?:\s*(?:-|to)\s*(?P<high>\d+)(?P<high_unit>[a-z]+)?)?$",
    )
    .ok()
});

/// Parse the text after `@` into a target
///
/// # Errors
/// Returns a `ParseFailure` for malformed values, missing or unknown units,
/// and inverted or out-of-range values
pub fn parse_target(text: &str, options: &ParserOptions) -> Result<Target, ParseFailure> {
    let text = text.trim();

    if let Some(caps) = PACE_TARGET.as_ref().and_then(|re| re.captures(text)) {
        return parse_pace(&caps, options);
    }
    if let Some(caps) = NUMERIC_TARGET.as_ref().and_then(|re| re.captures(text)) {
        return parse_numeric(&caps, options);
    }
    Err(ParseFailure::UnrecognizedPattern)
}

fn parse_pace(caps: &Captures, options: &ParserOptions) -> Result<Target, ParseFailure> {
    let unit = match shared_unit(caps)? {
        Some(unit) => PaceUnit::from_canonical(unit).ok_or_else(|| ParseFailure::UnknownUnit {
            unit: unit.to_owned(),
        })?,
        None => options.default_pace_unit,
    };

    let low = parse_pace_value(&caps["low"])?;
    let value = match caps.name("high") {
        Some(high) => TargetValue::range("pace", low, parse_pace_value(high.as_str())?)?,
        None => TargetValue::Single(low),
    };
    Ok(Target::pace(value, unit)?)
}

fn parse_pace_value(token: &str) -> Result<Pace, ParseFailure> {
    let malformed = || ParseFailure::MalformedPace {
        token: token.to_owned(),
    };
    let (minutes, seconds) = token.split_once(':').ok_or_else(malformed)?;
    if seconds.len() != 2 {
        return Err(malformed());
    }
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    let seconds: u32 = seconds.parse().map_err(|_| malformed())?;
    if seconds >= 60 {
        return Err(malformed());
    }
    Ok(Pace::from_minutes_seconds(minutes, seconds)?)
}

fn parse_numeric(caps: &Captures, options: &ParserOptions) -> Result<Target, ParseFailure> {
    let low = parse_count(&caps["low"])?;
    let value = match caps.name("high") {
        Some(high) => {
            let high = parse_count(high.as_str())?;
            TargetValue::range("target", low, high)?
        }
        None => TargetValue::Single(low),
    };

    match shared_unit(caps)? {
        Some("bpm") => Ok(Target::heart_rate(value)?),
        Some("spm") => Ok(Target::cadence(value)?),
        Some(unit) => Err(ParseFailure::UnknownUnit {
            unit: unit.to_owned(),
        }),
        None if options.infer_bare_heart_rate && is_plausible_heart_rate(value) => {
            Ok(Target::heart_rate(value)?)
        }
        None => Err(ParseFailure::MissingUnit {
            token: caps[0].to_owned(),
        }),
    }
}

fn is_plausible_heart_rate(value: TargetValue<u16>) -> bool {
    let plausible = MIN_HEART_RATE_BPM..=MAX_HEART_RATE_BPM;
    plausible.contains(&value.low()) && plausible.contains(&value.high())
}

fn parse_count(token: &str) -> Result<u16, ParseFailure> {
    token.parse().map_err(|_| ParseFailure::MalformedNumber {
        token: token.to_owned(),
    })
}

/// Unit written after either bound; both bounds must agree when both carry one
fn shared_unit<'t>(caps: &Captures<'t>) -> Result<Option<&'t str>, ParseFailure> {
    let low = caps.name("low_unit").map(|unit| unit.as_str());
    let high = caps.name("high_unit").map(|unit| unit.as_str());
    match (low, high) {
        (Some(low), Some(high)) if low != high => Err(ParseFailure::UnknownUnit {
            unit: format!("{low}/{high}"),
        }),
        (Some(unit), _) | (None, Some(unit)) => Ok(Some(unit)),
        (None, None) => Ok(None),
    }
}
