//! Pure classification rules — difficulty, search intent, and the base
//! volume multiplier.
//!
//! Everything here is a deterministic function of the keyword text (and
//! volume); the synthesizer's randomness never reaches these rules, so two
//! runs over the same inputs always classify identically.

use crate::types::{Difficulty, SearchIntent};
use regex::Regex;
use std::sync::LazyLock;

static COMPETITIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("best|top|review|vs|comparison").expect("static pattern"));

static TRANSACTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("buy|purchase|order|cart|checkout|price|cost|cheap|deal").expect("static pattern")
});

static INFORMATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("how to|what is|guide|tutorial|learn|tips|example").expect("static pattern")
});

static COMMERCIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("best|top|review|compare|comparison|vs|alternative").expect("static pattern")
});

/// Ranking difficulty from keyword shape and synthesized volume.
///
/// Short heads, six-figure volumes, and competitive-term keywords are Hard;
/// mid-volume or three-word phrases are Medium; the long tail is Easy.
pub fn difficulty(keyword: &str, volume: u64) -> Difficulty {
    let word_count = keyword.split_whitespace().count();
    let competitive = COMPETITIVE.is_match(&keyword.to_lowercase());

    if volume > 100_000 || word_count <= 2 || competitive {
        Difficulty::Hard
    } else if volume > 30_000 || word_count == 3 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// Presumed search intent. Pattern precedence is significant: transactional
/// markers win over informational, informational over commercial, and
/// anything unmatched defaults to informational.
pub fn intent(keyword: &str) -> SearchIntent {
    let lower = keyword.to_lowercase();

    if TRANSACTIONAL.is_match(&lower) {
        SearchIntent::Transactional
    } else if INFORMATIONAL.is_match(&lower) {
        SearchIntent::Informational
    } else if COMMERCIAL.is_match(&lower) {
        SearchIntent::Commercial
    } else {
        SearchIntent::Informational
    }
}

/// Base volume multiplier, first matching rule wins. Matches the raw keyword
/// text without lowercasing, unlike [`difficulty`] and [`intent`].
pub fn volume_multiplier(keyword: &str) -> u64 {
    if keyword.contains("how to") {
        50_000
    } else if keyword.contains("best") {
        40_000
    } else if keyword.contains("free") {
        60_000
    } else if keyword.contains("download") {
        70_000
    } else if keyword.chars().count() < 10 {
        80_000
    } else {
        30_000
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    // Two-word heads are Hard regardless of volume.
    #[case("rust async", 5_000, Difficulty::Hard)]
    // Six-figure volume is Hard regardless of shape.
    #[case("learning rust programming deeply", 150_000, Difficulty::Hard)]
    // Competitive terms are Hard even in long-tail phrases.
    #[case("quiet mechanical keyboard review roundup", 2_000, Difficulty::Hard)]
    // Three words at low volume land on Medium.
    #[case("learn rust programming", 5_000, Difficulty::Medium)]
    // Mid volume, four words: Medium.
    #[case("learning rust programming deeply", 50_000, Difficulty::Medium)]
    // Long tail, low volume: Easy.
    #[case("learning rust programming deeply today", 5_000, Difficulty::Easy)]
    fn difficulty_rules(#[case] keyword: &str, #[case] volume: u64, #[case] expected: Difficulty) {
        assert_eq!(difficulty(keyword, volume), expected);
    }

    #[rstest]
    #[case("buy mechanical keyboard", SearchIntent::Transactional)]
    #[case("how to solder", SearchIntent::Informational)]
    #[case("top mechanical keyboards", SearchIntent::Commercial)]
    #[case("weather tomorrow", SearchIntent::Informational)]
    // Transactional markers outrank informational ones when both match.
    #[case("how to buy a keyboard", SearchIntent::Transactional)]
    // Informational markers outrank commercial ones.
    #[case("best rust tutorial", SearchIntent::Informational)]
    fn intent_precedence(#[case] keyword: &str, #[case] expected: SearchIntent) {
        assert_eq!(intent(keyword), expected);
    }

    #[rstest]
    #[case("how to cook", 50_000)]
    #[case("best free things", 40_000)] // "best" checked before "free"
    #[case("free fonts collection", 60_000)]
    #[case("download manager apps", 70_000)]
    #[case("short", 80_000)]
    #[case("mechanical keyboards", 30_000)]
    fn multiplier_priority(#[case] keyword: &str, #[case] expected: u64) {
        assert_eq!(volume_multiplier(keyword), expected);
    }

    #[test]
    fn classification_is_pure() {
        for keyword in ["best rust ide", "buy cheap deals", "how to generate qr code"] {
            assert_eq!(difficulty(keyword, 40_000), difficulty(keyword, 40_000));
            assert_eq!(intent(keyword), intent(keyword));
        }
    }
}
