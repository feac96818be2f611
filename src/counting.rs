//! Letter-frequency counting.
//!
//! The canonical mode drops every character outside ASCII `[0-9A-Za-z_]`
//! and lowercases the rest, so `'A'` and `'a'` share one key. Digits and
//! underscores are counted like letters.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]").ok());

/// Which characters are counted and whether case is folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountMode {
    /// ASCII word characters only, lowercased.
    #[default]
    #[serde(rename = "folded")]
    FoldedWordChars,
    /// Every non-whitespace character, case preserved.
    #[serde(rename = "raw")]
    RawNonWhitespace,
}

/// Frequency table of the characters in a text.
///
/// Iteration is always in ascending character order. Every stored count is
/// at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LetterCounts(BTreeMap<char, usize>);

impl LetterCounts {
    /// Count of `letter`, zero when absent.
    pub fn get(&self, letter: char) -> usize {
        self.0.get(&letter).copied().unwrap_or_default()
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no character was counted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().fold(0_usize, |acc, n| acc.saturating_add(*n))
    }

    /// Entries in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }

    fn bump(&mut self, letter: char) {
        let slot = self.0.entry(letter).or_insert(0);
        *slot = slot.saturating_add(1);
    }
}

impl FromIterator<(char, usize)> for LetterCounts {
    /// Collect `(letter, count)` pairs, dropping zero counts and summing
    /// repeated letters.
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (letter, n) in iter.into_iter().filter(|(_, n)| *n > 0) {
            let slot: &mut usize = counts.entry(letter).or_insert(0);
            *slot = slot.saturating_add(n);
        }
        Self(counts)
    }
}

/// Count letters in `text` with the canonical mode.
pub fn count_letters(text: &str) -> LetterCounts {
    count_with(text, CountMode::FoldedWordChars)
}

/// Count characters in `text` according to `mode`.
pub fn count_with(text: &str, mode: CountMode) -> LetterCounts {
    let mut counts = LetterCounts::default();
    match mode {
        CountMode::FoldedWordChars => {
            for c in normalize(text).chars() {
                counts.bump(c.to_ascii_lowercase());
            }
        }
        CountMode::RawNonWhitespace => {
            for c in text.chars().filter(|c| !c.is_whitespace()) {
                counts.bump(c);
            }
        }
    }
    counts
}

/// Signed per-character difference `expected - actual`.
///
/// Covers every character present in either table; equal counts are left
/// out, so two identical tables produce an empty map.
pub fn count_differences(expected: &LetterCounts, actual: &LetterCounts) -> BTreeMap<char, i64> {
    let letters: BTreeSet<char> = expected
        .iter()
        .chain(actual.iter())
        .map(|(c, _)| c)
        .collect();

    letters
        .into_iter()
        .filter_map(|c| {
            let want = i64::try_from(expected.get(c)).unwrap_or(i64::MAX);
            let have = i64::try_from(actual.get(c)).unwrap_or(i64::MAX);
            let delta = want.saturating_sub(have);
            (delta != 0).then_some((c, delta))
        })
        .collect()
}

fn normalize(text: &str) -> String {
    match NON_WORD.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect(),
    }
}
