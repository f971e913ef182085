// ABOUTME: Ordered segment matchers for the workout parser
// ABOUTME: Each matcher returns an explicit outcome; the first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::{Captures, Regex};
use workout_core::errors::ParseFailure;
use workout_core::models::{
    DistanceUnit, Duration, RepeatGroup, SimpleStep, Step, StepType, Target, TimeUnit,
};

use super::step_type::{self, StepContext};
use super::target::parse_target;
use super::ParserOptions;

/// Result of trying one matcher against a normalized segment
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Pattern does not apply; try the next matcher
    NoMatch,
    /// Pattern applies and produced a step
    Matched(Step),
    /// Pattern applies but the values are invalid; stop here
    Invalid(ParseFailure),
}

impl From<Result<Step, ParseFailure>> for MatchOutcome {
    fn from(result: Result<Step, ParseFailure>) -> Self {
        match result {
            Ok(step) => Self::Matched(step),
            Err(reason) => Self::Invalid(reason),
        }
    }
}

/// Signature shared by every matcher
pub type Matcher = fn(&str, &ParserOptions) -> MatchOutcome;

/// Matchers in the order they are tried
///
/// Repeat must precede the duration matchers because `3x 1km` also starts
/// with a number.
pub const MATCHERS: [(&str, Matcher); 4] = [
    ("repeat", match_repeat),
    ("duration", match_duration_only),
    ("duration_target", match_duration_with_target),
    ("keyword", match_keyword_only),
];

// Matches: 3x 1km @ 4:45 + 2min rest, 5 x 400m + 90s, 4x 5min tempo
static REPEAT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<count>\d+)\s*x\s*(?P<value>\d+(?:\.\d+)?)(?P<unit>[a-z]+)?(?:\s+(?P<keyword>[a-z][a-z-]*))?(?:\s*@\s*(?P<target>[^+]+?))?(?:\s*\+\s*(?P<rest_value>\d+(?:\.\d+)?)(?P<rest_unit>[a-z]+)?(?:\s+(?P<rest_keyword>[a-z][a-z-]*))?)?$",
    )
    .ok()
});

// Matches: 1km, 1km warmup, warmup 1km, 5min @ 165bpm, 1.5km easy @ 6:00
static DURATION_STEP: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<before>[a-z][a-z-]*)\s+)?(?P<value>\d+(?:\.\d+)?)(?P<unit>[a-z]+)?(?:\s+(?P<after>[a-z][a-z-]*))?(?:\s*@\s*(?P<target>.+))?$",
    )
    .ok()
});

// Matches: cooldown, warmup, rest, open
static KEYWORD_STEP: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?P<keyword>[a-z][a-z-]*)$").ok());

/// `<N>x <duration>[ @ <target>][ + <rest-duration>[ rest]]`
fn match_repeat(segment: &str, options: &ParserOptions) -> MatchOutcome {
    let Some(caps) = REPEAT.as_ref().and_then(|re| re.captures(segment)) else {
        return MatchOutcome::NoMatch;
    };
    let keyword = caps.name("keyword").map(|m| m.as_str());
    let rest_keyword = caps.name("rest_keyword").map(|m| m.as_str());
    if keyword.is_some_and(|word| !step_type::is_keyword(word))
        || rest_keyword.is_some_and(|word| !step_type::is_recovery_keyword(word))
    {
        return MatchOutcome::NoMatch;
    }
    build_repeat(&caps, keyword, options).into()
}

fn build_repeat(
    caps: &Captures,
    keyword: Option<&str>,
    options: &ParserOptions,
) -> Result<Step, ParseFailure> {
    let count_token = &caps["count"];
    let repeat_count: u32 = count_token
        .parse()
        .map_err(|_| ParseFailure::MalformedNumber {
            token: count_token.to_owned(),
        })?;

    let target = caps
        .name("target")
        .map(|m| parse_target(m.as_str(), options))
        .transpose()?
        .unwrap_or_default();
    let work_type = step_type::infer(
        keyword.as_slice(),
        StepContext {
            repeat_work: true,
            has_target: !target.is_open(),
        },
    );
    let duration = parse_duration(&caps["value"], caps.name("unit").map(|m| m.as_str()))?;
    let mut steps = vec![SimpleStep::new(work_type, duration, target)?];

    if let Some(rest_value) = caps.name("rest_value") {
        let rest = parse_duration(
            rest_value.as_str(),
            caps.name("rest_unit").map(|m| m.as_str()),
        )?;
        steps.push(SimpleStep::new(StepType::Recovery, rest, Target::Open)?);
    }

    Ok(RepeatGroup::new(repeat_count, steps)?.into())
}

/// Bare duration with an optional keyword before or after it
fn match_duration_only(segment: &str, options: &ParserOptions) -> MatchOutcome {
    if segment.contains('@') {
        return MatchOutcome::NoMatch;
    }
    match_duration_step(segment, options)
}

/// `<duration> @ <target>` with an optional keyword
fn match_duration_with_target(segment: &str, options: &ParserOptions) -> MatchOutcome {
    if !segment.contains('@') {
        return MatchOutcome::NoMatch;
    }
    match_duration_step(segment, options)
}

fn match_duration_step(segment: &str, options: &ParserOptions) -> MatchOutcome {
    let Some(caps) = DURATION_STEP.as_ref().and_then(|re| re.captures(segment)) else {
        return MatchOutcome::NoMatch;
    };
    let keywords: Vec<&str> = ["before", "after"]
        .iter()
        .filter_map(|name| caps.name(name).map(|m| m.as_str()))
        .collect();
    if !keywords.iter().all(|word| step_type::is_keyword(word)) {
        return MatchOutcome::NoMatch;
    }
    build_simple(&caps, &keywords, options).into()
}

fn build_simple(
    caps: &Captures,
    keywords: &[&str],
    options: &ParserOptions,
) -> Result<Step, ParseFailure> {
    let duration = parse_duration(&caps["value"], caps.name("unit").map(|m| m.as_str()))?;
    let target = caps
        .name("target")
        .map(|m| parse_target(m.as_str(), options))
        .transpose()?
        .unwrap_or_default();
    let step_type = step_type::infer(
        keywords,
        StepContext {
            repeat_work: false,
            has_target: !target.is_open(),
        },
    );
    Ok(SimpleStep::new(step_type, duration, target)?.into())
}

/// A lone keyword: open duration, no target
fn match_keyword_only(segment: &str, _options: &ParserOptions) -> MatchOutcome {
    let Some(caps) = KEYWORD_STEP.as_ref().and_then(|re| re.captures(segment)) else {
        return MatchOutcome::NoMatch;
    };
    let keyword = &caps["keyword"];
    if !step_type::is_keyword(keyword) {
        return MatchOutcome::NoMatch;
    }
    let step_type = step_type::infer(&[keyword], StepContext::default());
    MatchOutcome::Matched(SimpleStep::open(step_type).into())
}

/// Build a duration from a number and its canonical unit
///
/// # Errors
/// Returns `MissingUnit` without a unit, `UnknownUnit` for non-duration units,
/// and `Invalid` for non-positive values
fn parse_duration(value: &str, unit: Option<&str>) -> Result<Duration, ParseFailure> {
    let Some(unit) = unit else {
        return Err(ParseFailure::MissingUnit {
            token: value.to_owned(),
        });
    };
    let number: f64 = value.parse().map_err(|_| ParseFailure::MalformedNumber {
        token: value.to_owned(),
    })?;

    if let Some(distance) = DistanceUnit::from_canonical(unit) {
        return Ok(Duration::distance(number, distance)?);
    }
    if let Some(time) = TimeUnit::from_canonical(unit) {
        return Ok(Duration::time(number, time)?);
    }
    Err(ParseFailure::UnknownUnit {
        unit: unit.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_is_tried_first() {
        assert_eq!(MATCHERS[0].0, "repeat");
        let outcome = match_duration_only("3x 1km", &ParserOptions::default());
        assert_eq!(outcome, MatchOutcome::NoMatch);
    }

    #[test]
    fn test_unknown_rest_keyword_is_no_match() {
        assert_eq!(
            match_repeat("3x 1km + 2min banana", &ParserOptions::default()),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn test_duration_without_unit_is_invalid() {
        assert_eq!(
            match_duration_only("5 warmup", &ParserOptions::default()),
            MatchOutcome::Invalid(ParseFailure::MissingUnit {
                token: "5".to_owned()
            })
        );
    }

    #[test]
    fn test_heart_rate_unit_is_not_a_duration() {
        assert_eq!(
            parse_duration("150", Some("bpm")),
            Err(ParseFailure::UnknownUnit {
                unit: "bpm".to_owned()
            })
        );
    }

    #[test]
    fn test_keyword_only_rejects_unknown_words() {
        let options = ParserOptions::default();
        assert_eq!(
            match_keyword_only("gobbledygook", &options),
            MatchOutcome::NoMatch
        );
        assert!(matches!(
            match_keyword_only("cooldown", &options),
            MatchOutcome::Matched(_)
        ));
    }
}
