//! Suggestion expansion — turns one seed keyword into a bounded, deduplicated,
//! ranked pool of candidate phrases.
//!
//! Three operations with different cost/coverage trade-offs:
//!
//! - [`expand`] — the full catalogue: template families, alphabet traversal,
//!   numeric and year suffixes, plus keyword-triggered families. Ranked and
//!   capped at 200. Deterministic in both membership and order.
//! - [`alphabet_probe`] — a lightweight alphabet-only sample, shuffled with
//!   the injected RNG and capped at 50.
//! - [`quick_suggestions`] — ten instant search-box templates, no traversal.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Upper bound on the ranked pool returned by [`expand`].
pub const EXPANSION_CAP: usize = 200;
/// Upper bound on the shuffled sample returned by [`alphabet_probe`].
pub const PROBE_CAP: usize = 50;
/// Candidates longer than this are dropped before ranking.
pub const MAX_CANDIDATE_LEN: usize = 100;
/// Ranking pulls candidates toward this length within each affinity group.
const EXPAND_TARGET_LEN: usize = 20;

// ---------------------------------------------------------------------------
// Template tables
// ---------------------------------------------------------------------------

/// Suffix half of the high-frequency template family. The prefix templates
/// (the seed itself, "how to {seed}", "best {seed}") are pushed inline.
const HIGH_FREQUENCY_SUFFIXES: &[&str] = &[
    "tutorial",
    "guide",
    "step by step",
    "for beginners",
    "tips",
    "tricks",
    "online",
    "free",
    "course",
    "training",
    "certification",
    "examples",
    "vs",
    "review",
    "comparison",
    "alternative",
    "software",
    "app",
    "tool",
    "platform",
    "service",
];

/// Substitutions applied when the seed is itself a "how to" phrase.
const HOW_TO_SUBSTITUTIONS: &[&str] = &["ways to", "steps to", "guide to"];

/// Modifier suffixes added alongside the "how to" substitutions.
const HOW_TO_MODIFIERS: &[&str] = &[
    "easily",
    "quickly",
    "at home",
    "online",
    "for free",
    "without",
    "step by step",
];

/// Domain family appended for generator-style seeds.
const GENERATE_SUFFIXES: &[&str] = &[
    "code",
    "api key",
    "password",
    "report",
    "invoice",
    "barcode",
    "qr code",
    "certificate",
    "token",
    "key",
    "id",
    "number",
    "file",
    "document",
    "content",
    "data",
    "random",
    "unique",
    "secure",
    "automatic",
];

// ---------------------------------------------------------------------------
// Full expansion
// ---------------------------------------------------------------------------

/// Expand a seed keyword into the full ranked candidate pool.
///
/// Callers pass a trimmed, non-empty seed; the HTTP layer rejects blank
/// queries before anything reaches this point. Seeds are plain text — they
/// are only ever concatenated and substring-tested, never compiled as
/// patterns.
pub fn expand(seed: &str) -> Vec<String> {
    let lower = seed.to_lowercase();
    let mut pool: Vec<String> = Vec::with_capacity(256);

    // High-frequency templates
    pool.push(seed.to_string());
    pool.push(format!("how to {seed}"));
    pool.push(format!("best {seed}"));
    for suffix in HIGH_FREQUENCY_SUFFIXES {
        pool.push(format!("{seed} {suffix}"));
    }

    // Alphabet traversal; the first five letters get richer combinations
    for letter in 'a'..='z' {
        pool.push(format!("{seed} {letter}"));
        pool.push(format!("{seed} a{letter}"));
        pool.push(format!("{seed} {letter}a"));
        if matches!(letter, 'a'..='e') {
            pool.push(format!("how to {seed} {letter}"));
            pool.push(format!("{seed} for {letter}"));
            pool.push(format!("{seed} in {letter}"));
            pool.push(format!("{seed} with {letter}"));
            pool.push(format!("{seed} {letter} code"));
            pool.push(format!("{seed} {letter} example"));
        }
    }

    // Numeric and year suffixes
    for i in 1..=20 {
        pool.push(format!("{seed} {i}"));
        if i <= 10 {
            pool.push(format!("{seed} {i}0"));
        }
    }
    for year in 2020..=2025 {
        pool.push(format!("{seed} {year}"));
    }

    // Phrase substitutions for seeds that are already "how to" queries
    if lower.contains("how to") {
        for substitution in HOW_TO_SUBSTITUTIONS {
            pool.push(seed.replacen("how to", substitution, 1));
        }
        for modifier in HOW_TO_MODIFIERS {
            pool.push(format!("{seed} {modifier}"));
        }
    }

    // Generator-domain family
    if lower.contains("generate") {
        for suffix in GENERATE_SUFFIXES {
            pool.push(format!("{seed} {suffix}"));
        }
    }

    let mut out = dedup_and_filter(pool, seed);
    rank_by_affinity(&mut out, &lower, EXPAND_TARGET_LEN);
    out.truncate(EXPANSION_CAP);
    out
}

/// Lightweight alphabet-only expansion: six patterns per letter, shuffled,
/// first [`PROBE_CAP`] returned. Membership is deterministic; order comes
/// from the injected RNG.
pub fn alphabet_probe(seed: &str, rng: &mut impl Rng) -> Vec<String> {
    let mut pool: Vec<String> = Vec::with_capacity(26 * 6);
    for letter in 'a'..='z' {
        pool.push(format!("{seed} {letter}"));
        pool.push(format!("{seed} a{letter}"));
        pool.push(format!("{seed} {letter}a"));
        pool.push(format!("how to {seed} {letter}"));
        pool.push(format!("{seed} for {letter}"));
        pool.push(format!("best {seed} {letter}"));
    }
    pool.shuffle(rng);
    pool.truncate(PROBE_CAP);
    pool
}

/// Ten instant templates for a search-box dropdown. No traversal, no network.
pub fn quick_suggestions(seed: &str) -> Vec<String> {
    [
        seed.to_string(),
        format!("how to {seed}"),
        format!("{seed} tutorial"),
        format!("{seed} guide"),
        format!("{seed} tips"),
        format!("best {seed}"),
        format!("{seed} free"),
        format!("{seed} online"),
        format!("{seed} download"),
        format!("{seed} app"),
    ]
    .into_iter()
    .filter(|s| !s.trim().is_empty())
    .collect()
}

// ---------------------------------------------------------------------------
// Dedup, filter, rank
// ---------------------------------------------------------------------------

/// Trim every candidate, drop blanks, the seed itself, and over-long entries,
/// then dedup keeping the first occurrence.
fn dedup_and_filter(pool: Vec<String>, seed: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(pool.len());
    let mut out: Vec<String> = Vec::with_capacity(pool.len());
    for candidate in pool {
        let candidate = candidate.trim();
        if candidate.is_empty()
            || candidate == seed
            || candidate.chars().count() > MAX_CANDIDATE_LEN
        {
            continue;
        }
        if seen.insert(candidate.to_string()) {
            out.push(candidate.to_string());
        }
    }
    out
}

/// Rank candidates in place: entries containing the (lowercased) seed sort
/// before entries that do not; within each group, ascending distance of the
/// candidate's length from `target_len`. The sort is stable, so candidates
/// tied on both keys keep their prior relative order.
pub fn rank_by_affinity(candidates: &mut [String], seed_lower: &str, target_len: usize) {
    candidates.sort_by_cached_key(|candidate| {
        let contains_seed = candidate.to_lowercase().contains(seed_lower);
        let distance = (candidate.chars().count() as i64 - target_len as i64).abs();
        (!contains_seed, distance)
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
