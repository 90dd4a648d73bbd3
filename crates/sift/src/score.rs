//! Heuristic relevance scoring for a single (query, text) pair.
//!
//! Scores fall into fixed tiers, checked in priority order:
//!
//! | Tier | Condition | Score |
//! |------|-----------|-------|
//! | Exact | `text == query` | 100 |
//! | Prefix | `text` starts with `query` | 90 |
//! | Substring | `text` contains `query` | 70 |
//! | Subsequence | every query char found in order | 50 + 2 × matched (max 100) |
//! | None | otherwise | 0 |
//!
//! Case folding is the caller's job; these functions compare exactly what
//! they are given.

use crate::value::Number;

/// Highest possible score.
pub const MAX_SCORE: u32 = 100;

/// Score for an exact match.
pub const EXACT_SCORE: u32 = 100;

/// Score for a prefix match.
pub const PREFIX_SCORE: u32 = 90;

/// Score for a substring match.
pub const SUBSTRING_SCORE: u32 = 70;

/// Base score for a subsequence match, before per-character credit.
pub const SUBSEQUENCE_BASE: u32 = 50;

/// Credit per matched character in a subsequence match.
pub const SUBSEQUENCE_PER_CHAR: u32 = 2;

/// Which tier a (query, text) pair fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
    Substring,
    /// Subsequence match, carrying the number of matched characters.
    Subsequence(usize),
    None,
}

impl MatchKind {
    /// Returns the score for this tier.
    pub fn points(self) -> u32 {
        match self {
            MatchKind::Exact => EXACT_SCORE,
            MatchKind::Prefix => PREFIX_SCORE,
            MatchKind::Substring => SUBSTRING_SCORE,
            MatchKind::Subsequence(matched) => {
                let credit = u32::try_from(matched)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(SUBSEQUENCE_PER_CHAR);
                SUBSEQUENCE_BASE.saturating_add(credit).min(MAX_SCORE)
            }
            MatchKind::None => 0,
        }
    }

    /// Returns `true` unless this is [`MatchKind::None`].
    pub fn is_match(self) -> bool {
        !matches!(self, MatchKind::None)
    }
}

/// Classifies how `query` matches `text`.
///
/// With `fuzzy` off the subsequence tier is skipped, so only literal
/// matches count.
pub fn classify(query: &str, text: &str, fuzzy: bool) -> MatchKind {
    if text == query {
        MatchKind::Exact
    } else if text.starts_with(query) {
        MatchKind::Prefix
    } else if text.contains(query) {
        MatchKind::Substring
    } else if fuzzy {
        match subsequence_len(query, text) {
            Some(matched) => MatchKind::Subsequence(matched),
            None => MatchKind::None,
        }
    } else {
        MatchKind::None
    }
}

/// Scores `text` against `query` with all tiers enabled.
///
/// ```
/// use sift::score;
///
/// assert_eq!(score("alpha", "alpha"), 100);
/// assert_eq!(score("alpha", "alphabet"), 90);
/// assert_eq!(score("pha", "alphabet"), 70);
/// assert_eq!(score("ac", "abcabc"), 54);
/// assert_eq!(score("xyz", "abc"), 0);
/// ```
pub fn score(query: &str, text: &str) -> u32 {
    classify(query, text, true).points()
}

/// Scores a numeric field.
///
/// A number matches when its decimal rendering contains the query, and then
/// always scores [`MAX_SCORE`]. This is deliberately loose: `"1"` matches
/// `100`, `21` and `512`.
pub fn score_number(query: &str, number: Number) -> u32 {
    if number.to_decimal_string().contains(query) {
        MAX_SCORE
    } else {
        0
    }
}

// Greedy left-to-right walk; returns the matched count only when every
// query char was consumed.
fn subsequence_len(query: &str, text: &str) -> Option<usize> {
    let mut wanted = query.chars().peekable();
    let mut matched = 0;

    for c in text.chars() {
        match wanted.peek() {
            Some(&q) if q == c => {
                wanted.next();
                matched += 1;
            }
            Some(_) => {}
            None => break,
        }
    }

    wanted.peek().is_none().then_some(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_in_priority_order() {
        assert_eq!(classify("report", "report", true), MatchKind::Exact);
        assert_eq!(classify("rep", "report", true), MatchKind::Prefix);
        assert_eq!(classify("port", "report", true), MatchKind::Substring);
        assert_eq!(classify("rpt", "report", true), MatchKind::Subsequence(3));
        assert_eq!(classify("zzz", "report", true), MatchKind::None);
    }

    #[test]
    fn subsequence_scoring() {
        assert_eq!(score("ac", "abcabc"), 54);
        assert_eq!(score("xyz", "abc"), 0);
        assert_eq!(score("wpe", "wipe"), 56);
    }

    #[test]
    fn incomplete_subsequence_scores_zero() {
        assert_eq!(score("abz", "aabb"), 0);
        assert_eq!(score("ba", "ab"), 0);
    }

    #[test]
    fn long_subsequence_is_capped() {
        let query = "abcdefghijklmnopqrstuvwxyz";
        let text = "a-b-c-d-e-f-g-h-i-j-k-l-m-n-o-p-q-r-s-t-u-v-w-x-y-z";
        assert_eq!(classify(query, text, true), MatchKind::Subsequence(26));
        assert_eq!(score(query, text), MAX_SCORE);
    }

    #[test]
    fn fuzzy_off_skips_subsequence() {
        assert_eq!(classify("rpt", "report", false), MatchKind::None);
        assert_eq!(classify("rep", "report", false), MatchKind::Prefix);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(score("öl", "öl"), 100);
        assert_eq!(score("çé", "façade é"), 54);
    }

    #[test]
    fn numbers_match_by_containment() {
        assert_eq!(score_number("1", Number::U64(100)), 100);
        assert_eq!(score_number("1", Number::I64(21)), 100);
        assert_eq!(score_number("1", Number::U64(512)), 100);
        assert_eq!(score_number("3", Number::U64(512)), 0);
        assert_eq!(score_number("2.5", Number::F64(12.5)), 100);
    }
}
