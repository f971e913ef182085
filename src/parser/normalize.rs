// ABOUTME: Segment normalization with a table-driven unit alias vocabulary
// ABOUTME: Case-folds, collapses whitespace and rewrites unit aliases to canonical units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::step_type;

/// Units the classifier understands after normalization
pub const CANONICAL_UNITS: &[&str] = &["km", "m", "mi", "s", "min", "h", "bpm", "spm"];

/// Grammar words an alias may not shadow: repeat marker, range and pace separators
pub const RESERVED_WORDS: &[&str] = &["x", "to", "per"];

/// Built-in alias → canonical unit table
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("k", "km"),
    ("km", "km"),
    ("kms", "km"),
    ("kilometer", "km"),
    ("kilometers", "km"),
    ("kilometre", "km"),
    ("kilometres", "km"),
    ("m", "m"),
    ("meter", "m"),
    ("meters", "m"),
    ("metre", "m"),
    ("metres", "m"),
    ("mi", "mi"),
    ("mile", "mi"),
    ("miles", "mi"),
    ("s", "s"),
    ("sec", "s"),
    ("secs", "s"),
    ("second", "s"),
    ("seconds", "s"),
    ("min", "min"),
    ("mins", "min"),
    ("minute", "min"),
    ("minutes", "min"),
    ("h", "h"),
    ("hr", "h"),
    ("hrs", "h"),
    ("hour", "h"),
    ("hours", "h"),
    ("bpm", "bpm"),
    ("beats", "bpm"),
    ("spm", "spm"),
];

// A unit is only looked up right after a number, a slash, or "per ".
static UNIT_POSITION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?P<lead>\d|/)\s*(?P<unit>[a-z]+)\b").ok());

static PER_UNIT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*\bper\s+(?P<unit>[a-z]+)\b").ok());

static MULTI_WORD_KEYWORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?P<head>warm|cool)[\s-]*(?P<tail>up|down)\b").ok());

/// Immutable alias → canonical unit mapping
///
/// New aliases are added by building a new table; classification logic never
/// needs to change for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitAliases {
    table: HashMap<String, String>,
}

impl Default for UnitAliases {
    fn default() -> Self {
        Self {
            table: DEFAULT_ALIASES
                .iter()
                .map(|(alias, canonical)| ((*alias).to_owned(), (*canonical).to_owned()))
                .collect(),
        }
    }
}

impl UnitAliases {
    /// Table containing only the given pairs
    ///
    /// Returns `None` if any canonical unit is outside [`CANONICAL_UNITS`] or
    /// any alias is a reserved word.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Option<Self> {
        let mut table = HashMap::new();
        for (alias, canonical) in pairs {
            let alias = alias.to_lowercase();
            if !CANONICAL_UNITS.contains(&canonical) || is_reserved_word(&alias) {
                return None;
            }
            table.insert(alias, canonical.to_owned());
        }
        Some(Self { table })
    }

    /// Copy of this table with one more alias
    ///
    /// Returns `None` if `canonical` is not a canonical unit or `alias` is a
    /// reserved word.
    #[must_use]
    pub fn with_alias(&self, alias: &str, canonical: &str) -> Option<Self> {
        let alias = alias.to_lowercase();
        if !CANONICAL_UNITS.contains(&canonical) || is_reserved_word(&alias) {
            return None;
        }
        let mut table = self.table.clone();
        table.insert(alias, canonical.to_owned());
        Some(Self { table })
    }

    /// Canonical unit for an alias
    #[must_use]
    pub fn canonical(&self, alias: &str) -> Option<&str> {
        self.table.get(alias).map(String::as_str)
    }

    /// Number of aliases in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Normalize one segment
    ///
    /// Lowercases, folds `×` to `x` and dashes to `-`, joins "warm up" and
    /// "cool down", collapses whitespace, and rewrites units following a
    /// number, `/` or `per ` to their canonical form (`per km` becomes `/km`).
    #[must_use]
    pub fn normalize(&self, segment: &str) -> String {
        let folded: String = segment
            .to_lowercase()
            .chars()
            .map(|c| match c {
                '×' => 'x',
                '–' | '—' => '-',
                other => other,
            })
            .collect();
        let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");

        let joined = match MULTI_WORD_KEYWORDS.as_ref() {
            Some(pattern) => pattern
                .replace_all(&collapsed, |caps: &Captures| {
                    format!("{}{}", &caps["head"], &caps["tail"])
                })
                .into_owned(),
            None => collapsed,
        };

        let slashed = match PER_UNIT.as_ref() {
            Some(pattern) => pattern
                .replace_all(&joined, |caps: &Captures| match self.canonical(&caps["unit"]) {
                    Some(unit) => format!("/{unit}"),
                    None => caps[0].to_owned(),
                })
                .into_owned(),
            None => joined,
        };

        let Some(pattern) = UNIT_POSITION.as_ref() else {
            return slashed;
        };
        pattern
            .replace_all(&slashed, |caps: &Captures| match self.canonical(&caps["unit"]) {
                Some(unit) => format!("{}{unit}", &caps["lead"]),
                None => caps[0].to_owned(),
            })
            .into_owned()
    }
}

/// Whether `word` belongs to the grammar and cannot name a unit
///
/// Covers [`RESERVED_WORDS`] and every step keyword, since an alias is
/// rewritten wherever it follows a number.
#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    let word = word.to_lowercase();
    RESERVED_WORDS.contains(&word.as_str()) || step_type::is_keyword(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_targets_canonical_units() {
        let aliases = UnitAliases::default();
        for (_, canonical) in DEFAULT_ALIASES {
            assert!(CANONICAL_UNITS.contains(canonical));
        }
        assert_eq!(aliases.len(), DEFAULT_ALIASES.len());
    }

    #[test]
    fn test_rejects_non_canonical_target() {
        assert!(UnitAliases::default().with_alias("klicks", "kilometers").is_none());
        assert!(UnitAliases::from_pairs([("furlong", "fur")]).is_none());
    }

    #[test]
    fn test_rejects_reserved_aliases() {
        let aliases = UnitAliases::default();
        for word in ["x", "X", "to", "per", "rest", "open", "warmup"] {
            assert!(aliases.with_alias(word, "km").is_none(), "{word} accepted");
        }
        assert!(UnitAliases::from_pairs([("to", "m")]).is_none());
        assert_eq!(aliases.normalize("3x 1k"), "3x 1km");
    }

    #[test]
    fn test_keywords_are_not_rewritten() {
        let aliases = UnitAliases::default();
        assert_eq!(aliases.normalize("2 mins rest"), "2min rest");
        assert_eq!(aliases.normalize("Warm Up 1K"), "warmup 1km");
        assert_eq!(aliases.normalize("cool-down"), "cooldown");
    }
}
