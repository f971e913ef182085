// ABOUTME: Deterministic step-type inference from segment keywords
// ABOUTME: Keywords are checked in a fixed priority order so inference is total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::models::StepType;

/// Keyword vocabulary per step type, in priority order
const KEYWORDS: &[(StepType, &[&str])] = &[
    (StepType::Warmup, &["warmup", "wu"]),
    (StepType::Cooldown, &["cooldown", "cd"]),
    (
        StepType::Recovery,
        &["recovery", "recover", "rest", "rec", "easy", "jog"],
    ),
    (
        StepType::Interval,
        &["interval", "int", "work", "hard", "fast", "tempo", "run"],
    ),
];

/// Keyword for an open step with no particular purpose
pub const OPEN_KEYWORD: &str = "open";

/// Where the segment sits in the workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepContext {
    /// Segment is the work portion of a repeat
    pub repeat_work: bool,
    /// Segment carries an `@` target
    pub has_target: bool,
}

/// Whether `word` is a step keyword (including `open`)
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    word == OPEN_KEYWORD || keyword_type(word).is_some()
}

/// Whether `word` names a recovery step
#[must_use]
pub fn is_recovery_keyword(word: &str) -> bool {
    keyword_type(word) == Some(StepType::Recovery)
}

fn keyword_type(word: &str) -> Option<StepType> {
    KEYWORDS
        .iter()
        .find(|(_, words)| words.contains(&word))
        .map(|(step_type, _)| *step_type)
}

/// Infer the step type from the keywords present in a segment
///
/// Priority is warmup, cooldown, recovery, then interval keywords. Without a
/// keyword, the work portion of a repeat or a step with a target is an
/// interval, and anything else is `Other`.
#[must_use]
pub fn infer(keywords: &[&str], context: StepContext) -> StepType {
    KEYWORDS
        .iter()
        .find(|(_, words)| keywords.iter().any(|keyword| words.contains(keyword)))
        .map_or_else(
            || {
                if context.repeat_work || context.has_target {
                    StepType::Interval
                } else {
                    StepType::Other
                }
            },
            |(step_type, _)| *step_type,
        )
}

/// Keyword that makes `infer` return `step_type` without any context
#[must_use]
pub const fn canonical_keyword(step_type: StepType) -> &'static str {
    match step_type {
        StepType::Warmup => "warmup",
        StepType::Cooldown => "cooldown",
        StepType::Recovery => "recovery",
        StepType::Interval => "interval",
        StepType::Other => OPEN_KEYWORD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let context = StepContext::default();
        assert_eq!(infer(&["rest", "warmup"], context), StepType::Warmup);
        assert_eq!(infer(&["tempo", "cd"], context), StepType::Cooldown);
        assert_eq!(infer(&["fast", "jog"], context), StepType::Recovery);
    }

    #[test]
    fn test_context_fallback() {
        assert_eq!(infer(&[], StepContext::default()), StepType::Other);
        assert_eq!(
            infer(
                &[],
                StepContext {
                    has_target: true,
                    ..StepContext::default()
                }
            ),
            StepType::Interval
        );
        assert_eq!(
            infer(
                &[OPEN_KEYWORD],
                StepContext {
                    repeat_work: true,
                    ..StepContext::default()
                }
            ),
            StepType::Interval
        );
    }

    #[test]
    fn test_canonical_keywords_round_trip() {
        for step_type in [
            StepType::Warmup,
            StepType::Cooldown,
            StepType::Recovery,
            StepType::Interval,
        ] {
            assert_eq!(
                infer(&[canonical_keyword(step_type)], StepContext::default()),
                step_type
            );
        }
        assert!(is_keyword(OPEN_KEYWORD));
        assert!(!is_keyword("banana"));
    }
}
