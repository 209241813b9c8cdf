//! Core types shared across the pipeline: the synthesized [`KeywordRecord`],
//! its classification enums, and the report returned by an orchestration run.
//!
//! Wire names are camelCase to match the JSON the HTTP surface serves.

use serde::{Deserialize, Serialize};

/// Number of points in a trend series — one relative-interest value per day
/// for a week. Carried in the type so a short series cannot be constructed.
pub const TREND_POINTS: usize = 7;

/// A week of relative search interest, oldest point first.
pub type TrendWeek = [u32; TREND_POINTS];

/// A keyword with synthesized metrics attached. Created fresh for every
/// orchestration run; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    /// Opaque unique identifier: epoch-millis plus a random suffix. Unique
    /// within a run; probabilistically unique across runs.
    pub id: String,
    /// The keyword itself, immutable once assigned.
    pub keyword: String,
    /// Estimated monthly search volume. Always at least 1000.
    pub volume: u64,
    /// Ranking difficulty, derived from keyword text and volume.
    pub difficulty: Difficulty,
    /// Advertiser competition, in [0.15, 0.85) on the primary path and
    /// [0.2, 0.8) on the fallback path.
    pub competition: f64,
    /// Cost per click in dollars, in [0.3, 2.8) primary / [1.0, 3.0) fallback.
    pub cpc: f64,
    /// Relative interest over the last week.
    pub trend: TrendWeek,
    /// Presumed purpose behind the search phrase.
    pub search_intent: SearchIntent,
    /// Related queries, attached to the main record only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_keywords: Option<Vec<String>>,
}

/// How hard a keyword is to rank for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Classification of the presumed user purpose behind a search phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchIntent {
    Informational,
    Commercial,
    Transactional,
    Navigational,
}

impl std::fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchIntent::Informational => write!(f, "Informational"),
            SearchIntent::Commercial => write!(f, "Commercial"),
            SearchIntent::Transactional => write!(f, "Transactional"),
            SearchIntent::Navigational => write!(f, "Navigational"),
        }
    }
}

/// Which path produced a suggestion set. Constructed at the point the
/// winning path is known and carried through every return value — never
/// inferred after the fact from result counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// A remote autocomplete endpoint answered with usable suggestions.
    Live,
    /// Every endpoint failed; the suggestions were generated locally.
    Fallback,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Live => write!(f, "live"),
            Provenance::Fallback => write!(f, "fallback"),
        }
    }
}

/// A set of suggestions together with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionBatch {
    pub suggestions: Vec<String>,
    pub provenance: Provenance,
}

/// The result of one orchestration run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// Monotonic request token. A client that issues overlapping searches
    /// discards any report whose generation is not the latest it received.
    pub generation: u64,
    /// The seed keyword, analyzed.
    pub main: KeywordRecord,
    /// Related keywords, sorted by volume descending.
    pub related: Vec<KeywordRecord>,
    /// Size of the deduplicated candidate pool before the selection cap.
    /// Display only — not a count of analyzed keywords.
    pub total_candidates: usize,
    /// Which path supplied the candidate suggestions.
    pub provenance: Provenance,
}

/// Compact human formatting for volumes: 1_230_000 → "1.2M", 45_600 → "45.6K".
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
