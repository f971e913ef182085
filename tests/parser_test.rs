// ABOUTME: Integration tests for the natural-language workout parser
// ABOUTME: Covers step patterns, keywords, units, targets, failures and canonical round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use garmin_workout_creator::formatters::to_canonical_text;
use garmin_workout_creator::parser::normalize::{UnitAliases, CANONICAL_UNITS};
use garmin_workout_creator::parser::{self, ParserOptions, WorkoutParser};
use workout_core::errors::{ModelError, ParseFailure};
use workout_core::models::{
    DistanceUnit, Duration, Pace, PaceUnit, SimpleStep, Step, StepType, Target, TargetValue,
    TimeUnit, Workout,
};

fn single(text: &str) -> SimpleStep {
    let workout = parser::parse(text).unwrap();
    assert_eq!(workout.len(), 1, "expected one step for '{text}'");
    match &workout.steps()[0] {
        Step::Simple(step) => *step,
        Step::Repeat(_) => panic!("expected a simple step for '{text}'"),
    }
}

fn pace(minutes: u32, seconds: u32) -> Pace {
    Pace::from_minutes_seconds(minutes, seconds).unwrap()
}

fn km(value: f64) -> Duration {
    Duration::distance(value, DistanceUnit::Kilometer).unwrap()
}

fn minutes(value: f64) -> Duration {
    Duration::time(value, TimeUnit::Minute).unwrap()
}

fn failure(text: &str) -> ParseFailure {
    parser::parse(text).unwrap_err().reason
}

// ============================================================================
// Simple steps
// ============================================================================

#[test]
fn test_distance_warmup_with_pace() {
    let step = single("1km warmup @ 5:30");
    assert_eq!(step.step_type(), StepType::Warmup);
    assert_eq!(*step.duration(), km(1.0));
    assert_eq!(
        *step.target(),
        Target::Pace {
            value: TargetValue::Single(pace(5, 30)),
            per: PaceUnit::Kilometer,
        }
    );
}

#[test]
fn test_keyword_before_duration() {
    assert_eq!(single("warmup 1km @ 5:30"), single("1km warmup @ 5:30"));
}

#[test]
fn test_time_warmup() {
    let step = single("10min warmup");
    assert_eq!(step.step_type(), StepType::Warmup);
    assert_eq!(*step.duration(), minutes(10.0));
    assert!(step.target().is_open());
}

#[test]
fn test_time_with_heart_rate() {
    let step = single("5min @ 165 bpm");
    assert_eq!(step.step_type(), StepType::Interval);
    assert_eq!(*step.duration(), minutes(5.0));
    assert_eq!(
        *step.target(),
        Target::HeartRate {
            value: TargetValue::Single(165)
        }
    );
}

#[test]
fn test_keyword_only_cooldown_is_open() {
    let step = single("cooldown");
    assert_eq!(step.step_type(), StepType::Cooldown);
    assert_eq!(*step.duration(), Duration::Open);
    assert_eq!(*step.target(), Target::Open);
}

#[test]
fn test_distance_cooldown() {
    let step = single("1km cooldown");
    assert_eq!(step.step_type(), StepType::Cooldown);
    assert_eq!(*step.duration(), km(1.0));
}

#[test]
fn test_bare_duration_is_other() {
    let step = single("20min");
    assert_eq!(step.step_type(), StepType::Other);
    assert_eq!(*step.duration(), minutes(20.0));
}

#[test]
fn test_open_keyword() {
    let step = single("open");
    assert_eq!(step.step_type(), StepType::Other);
    assert!(step.duration().is_open());
}

#[test]
fn test_decimal_distance() {
    assert_eq!(*single("1.5km warmup").duration(), km(1.5));
}

#[test]
fn test_meters_and_seconds() {
    let step = single("400m interval @ 4:00");
    assert_eq!(step.step_type(), StepType::Interval);
    assert_eq!(
        *step.duration(),
        Duration::distance(400.0, DistanceUnit::Meter).unwrap()
    );

    let rest = single("90sec rest");
    assert_eq!(rest.step_type(), StepType::Recovery);
    assert_eq!(
        *rest.duration(),
        Duration::time(90.0, TimeUnit::Second).unwrap()
    );
}

#[test]
fn test_recovery_keyword() {
    assert_eq!(single("2min recovery").step_type(), StepType::Recovery);
    assert_eq!(single("2min jog").step_type(), StepType::Recovery);
}

#[test]
fn test_abbreviated_keywords() {
    assert_eq!(single("1km wu").step_type(), StepType::Warmup);
    assert_eq!(single("1km cd").step_type(), StepType::Cooldown);
    assert_eq!(single("Warm-up 2km").step_type(), StepType::Warmup);
    assert_eq!(single("cool down").step_type(), StepType::Cooldown);
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_unit_aliases() {
    assert_eq!(*single("1k warmup").duration(), km(1.0));
    assert_eq!(*single("10mins warmup").duration(), minutes(10.0));
    assert_eq!(*single("2 kilometers easy").duration(), km(2.0));
    assert_eq!(
        *single("1 mile").duration(),
        Duration::distance(1.0, DistanceUnit::Mile).unwrap()
    );
    assert_eq!(
        *single("1 hour easy").duration(),
        Duration::time(1.0, TimeUnit::Hour).unwrap()
    );
}

#[test]
fn test_case_insensitive() {
    assert_eq!(single("1KM WARMUP @ 5:30"), single("1km warmup @ 5:30"));
}

#[test]
fn test_normalization_is_idempotent() {
    let aliases = UnitAliases::default();
    for unit in CANONICAL_UNITS {
        let canonical = format!("5{unit}");
        assert_eq!(aliases.normalize(&canonical), canonical);
    }
    for text in [
        "3 X 1 Kilometers @ 4:45 per mile + 2 MINS rest",
        "Warm Up 10 minutes",
        "20min tempo @ 4:30 to 4:40/km",
    ] {
        let once = aliases.normalize(text);
        assert_eq!(aliases.normalize(&once), once);
    }
}

#[test]
fn test_custom_alias_table() {
    let aliases = UnitAliases::default().with_alias("klick", "km").unwrap();
    let parser = WorkoutParser::new(ParserOptions {
        aliases,
        ..ParserOptions::default()
    });
    let workout = parser.parse("5 klicks easy").unwrap_err();
    assert_eq!(workout.reason, ParseFailure::UnrecognizedPattern);

    let workout = parser.parse("5 klick easy").unwrap();
    assert_eq!(workout.total_distance_km(), Some(5.0));
}

// ============================================================================
// Repeats
// ============================================================================

#[test]
fn test_repeat_without_rest() {
    let workout = parser::parse("3x 1km @ 4:45").unwrap();
    let Step::Repeat(group) = &workout.steps()[0] else {
        panic!("expected repeat");
    };
    assert_eq!(group.repeat_count(), 3);
    assert_eq!(group.steps().len(), 1);
    assert_eq!(group.steps()[0].step_type(), StepType::Interval);
}

#[test]
fn test_repeat_with_rest() {
    let workout = parser::parse("3x 1km @ 4:45 + 2min rest").unwrap();
    assert_eq!(workout.len(), 1);
    let Step::Repeat(group) = &workout.steps()[0] else {
        panic!("expected repeat");
    };
    assert_eq!(group.repeat_count(), 3);

    let work = group.steps()[0];
    assert_eq!(work.step_type(), StepType::Interval);
    assert_eq!(*work.duration(), km(1.0));
    assert_eq!(
        *work.target(),
        Target::Pace {
            value: TargetValue::Single(pace(4, 45)),
            per: PaceUnit::Kilometer,
        }
    );

    let rest = group.steps()[1];
    assert_eq!(rest.step_type(), StepType::Recovery);
    assert_eq!(*rest.duration(), minutes(2.0));
    assert_eq!(*rest.target(), Target::Open);
}

#[test]
fn test_repeat_spacing_variants() {
    let expected = parser::parse("3x 1km @ 4:45 + 2min rest").unwrap();
    for text in [
        "3x1km@4:45+2min rest",
        "3 x 1km @ 4:45 + 2min",
        "3 × 1 km @ 4:45 + 2 mins recovery",
    ] {
        assert_eq!(parser::parse(text).unwrap(), expected, "input: {text}");
    }
}

#[test]
fn test_repeat_count_bounds() {
    assert!(matches!(
        failure("0x 400m"),
        ParseFailure::Invalid(ModelError::NonPositive { .. })
    ));
    assert!(matches!(
        failure("100x 400m"),
        ParseFailure::Invalid(ModelError::OutOfRange { .. })
    ));
    assert!(parser::can_parse("99x 100m"));
}

#[test]
fn test_overflowing_distance_is_not_finite() {
    let text = format!("1{}m easy", "0".repeat(400));
    assert_eq!(
        failure(&text),
        ParseFailure::Invalid(ModelError::NonFinite { field: "duration" })
    );
}

#[test]
fn test_multiple_repeats() {
    let workout = parser::parse("3x 1km @ 4:30 + 2min, 5x 400m @ 4:00 + 90sec rest").unwrap();
    assert_eq!(workout.len(), 2);
    assert_eq!(workout.step_count(), 16);
}

// ============================================================================
// Targets
// ============================================================================

#[test]
fn test_pace_range_and_units() {
    let step = single("20min tempo @ 4:30-4:40/km");
    assert_eq!(
        *step.target(),
        Target::Pace {
            value: TargetValue::range("pace", pace(4, 30), pace(4, 40)).unwrap(),
            per: PaceUnit::Kilometer,
        }
    );

    let step = single("1mi @ 7:00 per mile");
    assert_eq!(
        *step.target(),
        Target::Pace {
            value: TargetValue::Single(pace(7, 0)),
            per: PaceUnit::Mile,
        }
    );
}

#[test]
fn test_heart_rate_range() {
    let step = single("30min easy @ 140 to 150 bpm");
    assert_eq!(step.step_type(), StepType::Recovery);
    assert_eq!(
        *step.target(),
        Target::HeartRate {
            value: TargetValue::range("target", 140, 150).unwrap()
        }
    );
}

#[test]
fn test_cadence_target() {
    let step = single("5min @ 180spm");
    assert_eq!(
        *step.target(),
        Target::Cadence {
            value: TargetValue::Single(180)
        }
    );
}

#[test]
fn test_default_pace_unit_option() {
    let parser = WorkoutParser::new(ParserOptions {
        default_pace_unit: PaceUnit::Mile,
        ..ParserOptions::default()
    });
    let workout = parser.parse("1mi @ 8:00").unwrap();
    let Step::Simple(step) = &workout.steps()[0] else {
        panic!("expected simple step");
    };
    assert_eq!(
        *step.target(),
        Target::Pace {
            value: TargetValue::Single(pace(8, 0)),
            per: PaceUnit::Mile,
        }
    );
}

#[test]
fn test_bare_number_target_needs_unit_by_default() {
    assert_eq!(
        failure("10min @ 150"),
        ParseFailure::MissingUnit {
            token: "150".to_owned()
        }
    );

    let lenient = WorkoutParser::new(ParserOptions {
        infer_bare_heart_rate: true,
        ..ParserOptions::default()
    });
    let workout = lenient.parse("10min @ 150").unwrap();
    let Step::Simple(step) = &workout.steps()[0] else {
        panic!("expected simple step");
    };
    assert_eq!(
        *step.target(),
        Target::HeartRate {
            value: TargetValue::Single(150)
        }
    );
}

#[test]
fn test_heart_rate_out_of_range() {
    assert!(matches!(
        failure("5min @ 250 bpm"),
        ParseFailure::Invalid(ModelError::OutOfRange { .. })
    ));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_empty_input() {
    for text in ["", "   ", ",,", "\n;\n"] {
        let error = parser::parse(text).unwrap_err();
        assert_eq!(error.reason, ParseFailure::EmptyInput, "input: {text:?}");
    }
    assert!(!parser::can_parse(""));
}

#[test]
fn test_inverted_pace_range() {
    assert!(matches!(
        failure("1km @ 6:00-5:00"),
        ParseFailure::Invalid(ModelError::InvertedRange { .. })
    ));
}

#[test]
fn test_unrecognized_text() {
    assert_eq!(failure("gobbledygook nonsense"), ParseFailure::UnrecognizedPattern);
    assert!(!parser::can_parse("gobbledygook"));
}

#[test]
fn test_duration_needs_unit() {
    assert_eq!(
        failure("5 warmup"),
        ParseFailure::MissingUnit {
            token: "5".to_owned()
        }
    );
}

#[test]
fn test_unknown_and_misplaced_units() {
    assert_eq!(
        failure("5furlongs"),
        ParseFailure::UnknownUnit {
            unit: "furlongs".to_owned()
        }
    );
    assert_eq!(
        failure("150bpm"),
        ParseFailure::UnknownUnit {
            unit: "bpm".to_owned()
        }
    );
}

#[test]
fn test_malformed_pace() {
    assert!(matches!(failure("1km @ 5:75"), ParseFailure::MalformedPace { .. }));
    assert!(matches!(failure("1km @ 5:3"), ParseFailure::MalformedPace { .. }));
}

#[test]
fn test_huge_pace_minutes_are_rejected_without_panicking() {
    for text in ["1km @ 99999999:00", "1km @ 4294967295:59", "1km @ 99999999999:00"] {
        let result = std::panic::catch_unwind(|| parser::parse(text));
        assert!(result.is_ok(), "parse panicked for '{text}'");
        assert!(result.unwrap().is_err(), "'{text}' should not parse");
    }
    assert!(matches!(
        failure("1km @ 99999999:00"),
        ParseFailure::Invalid(ModelError::OutOfRange { .. })
    ));
}

#[test]
fn test_pace_bounds() {
    assert_eq!(
        single("1km @ 1:00").target(),
        &Target::Pace {
            value: TargetValue::Single(pace(1, 0)),
            per: PaceUnit::Kilometer,
        }
    );
    assert!(parser::parse("1km @ 20:00/km").is_ok());
    assert_eq!(
        failure("1km @ 0:59"),
        ParseFailure::Invalid(ModelError::OutOfRange {
            field: "pace seconds per km",
            value: 59.0,
            min: 60.0,
            max: 1200.0,
        })
    );
    assert!(matches!(
        failure("1km @ 20:01"),
        ParseFailure::Invalid(ModelError::OutOfRange { .. })
    ));
    assert!(matches!(
        failure("1km @ 999:00"),
        ParseFailure::Invalid(ModelError::OutOfRange { .. })
    ));

    assert!(parser::parse("1mi @ 1:37/mi").is_ok());
    assert!(parser::parse("1mi @ 32:11/mi").is_ok());
    assert!(matches!(
        failure("1mi @ 1:36/mi"),
        ParseFailure::Invalid(ModelError::OutOfRange { .. })
    ));
    assert!(matches!(
        failure("1mi @ 32:12/mi"),
        ParseFailure::Invalid(ModelError::OutOfRange { .. })
    ));
}

#[test]
fn test_first_bad_segment_is_reported() {
    let error = parser::parse("1km warmup, 3x 1km @ 4:45, Banana Split, also bad").unwrap_err();
    assert_eq!(error.segment, "Banana Split");
    assert_eq!(
        error.input,
        "1km warmup, 3x 1km @ 4:45, Banana Split, also bad"
    );
    assert!(error.to_string().contains("Banana Split"));
}

// ============================================================================
// Whole workouts
// ============================================================================

#[test]
fn test_full_workout_preserves_order() {
    let workout =
        parser::parse("1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest, 1km cooldown").unwrap();
    assert_eq!(workout.len(), 3);
    assert!(matches!(&workout.steps()[0], Step::Simple(s) if s.step_type() == StepType::Warmup));
    assert!(matches!(&workout.steps()[1], Step::Repeat(g) if g.repeat_count() == 3));
    assert!(matches!(&workout.steps()[2], Step::Simple(s) if s.step_type() == StepType::Cooldown));
    assert_eq!(workout.step_count(), 8);
}

#[test]
fn test_alternative_separators() {
    let workout = parser::parse("1km warmup; 5km run\n1km cooldown").unwrap();
    let types: Vec<StepType> = workout
        .steps()
        .iter()
        .filter_map(|step| match step {
            Step::Simple(simple) => Some(simple.step_type()),
            Step::Repeat(_) => None,
        })
        .collect();
    assert_eq!(
        types,
        vec![StepType::Warmup, StepType::Interval, StepType::Cooldown]
    );
    assert_eq!(workout.total_distance_km(), Some(7.0));
}

#[test]
fn test_can_parse() {
    assert!(parser::can_parse("1km warmup @ 5:30"));
    assert!(parser::can_parse("3x 1km + 2min rest"));
    assert!(parser::can_parse("cooldown"));
}

// ============================================================================
// Canonical round trip
// ============================================================================

#[test]
fn test_canonical_text_round_trip() {
    for text in [
        "1km warmup @ 5:30",
        "3x 1km @ 4:45 + 2min rest",
        "5min @ 165 bpm",
        "cooldown",
        "open",
        "20min",
        "1.5 miles easy @ 150-160bpm",
        "10min wu, 4 x 5min tempo @ 4:30-4:40/km + 90s jog, 5x 200m, 30s @ 180 spm, cd",
        "2 hours @ 6:15 per mile",
    ] {
        let parsed = parser::parse(text).unwrap();
        let canonical = to_canonical_text(&parsed);
        let reparsed: Workout = parser::parse(&canonical)
            .unwrap_or_else(|e| panic!("'{canonical}' (from '{text}') failed: {e}"));
        assert_eq!(reparsed, parsed, "canonical: {canonical}");
    }
}

#[test]
fn test_canonical_text_shape() {
    let workout =
        parser::parse("1km warmup @ 5:30, 3x 1km @ 4:45 + 2min rest, 1km cooldown").unwrap();
    assert_eq!(
        to_canonical_text(&workout),
        "1km warmup @ 5:30/km, 3x 1km @ 4:45/km + 2min rest, 1km cooldown"
    );
}
