//! Metric synthesis — attaches mock SEO metrics to a single keyword.
//!
//! [`MetricsSynthesizer::synthesize`] never fails: when the trend
//! collaborator errors, the record is completed from randomized defaults
//! instead. Randomness comes from an injected, seedable [`StdRng`], so tests
//! can pin every draw; classification stays a pure function of the keyword
//! text and volume either way.

use crate::types::{KeywordRecord, TrendWeek, TREND_POINTS};
use crate::{classify, TrendSource};
use chrono::Utc;
use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct MetricsSynthesizer {
    trends: Arc<dyn TrendSource>,
    rng: Mutex<StdRng>,
}

impl MetricsSynthesizer {
    /// Production constructor: RNG seeded from OS entropy.
    pub fn new(trends: Arc<dyn TrendSource>) -> Self {
        Self::with_rng(trends, StdRng::from_entropy())
    }

    /// Test constructor: a caller-seeded RNG makes every draw reproducible.
    pub fn with_rng(trends: Arc<dyn TrendSource>, rng: StdRng) -> Self {
        Self { trends, rng: Mutex::new(rng) }
    }

    /// Synthesize a full record for `keyword`.
    pub async fn synthesize(&self, keyword: &str) -> KeywordRecord {
        let fetched = self.trends.fetch_week(keyword).await;
        let mut rng = self.rng.lock().await;
        match fetched {
            Ok(week) => primary_record(keyword, week, &mut *rng),
            Err(err) => {
                tracing::debug!(
                    keyword = %keyword,
                    error = %err,
                    "trend fetch failed, synthesizing from defaults"
                );
                fallback_record(keyword, &mut *rng)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Record construction
// ---------------------------------------------------------------------------

/// Build a record from a real trend week. Volume scales the keyword's base
/// multiplier by the week's average interest and a random factor in
/// [0.7, 1.3), floored at 1000.
fn primary_record(keyword: &str, trend: TrendWeek, rng: &mut StdRng) -> KeywordRecord {
    let avg = trend.iter().copied().sum::<u32>() as f64 / TREND_POINTS as f64;
    let multiplier = classify::volume_multiplier(keyword) as f64;
    let factor: f64 = rng.gen_range(0.7..1.3);
    let volume = (((avg / 100.0) * multiplier * factor).round() as u64).max(1000);

    KeywordRecord {
        id: fresh_id(rng),
        keyword: keyword.to_string(),
        volume,
        difficulty: classify::difficulty(keyword, volume),
        competition: rng.gen_range(0.15..0.85),
        cpc: rng.gen_range(0.3..2.8),
        trend,
        search_intent: classify::intent(keyword),
        related_keywords: None,
    }
}

/// Build a record with no trend data at all: synthetic week, randomized
/// volume, difficulty pinned to Medium. Intent is still derived from text.
fn fallback_record(keyword: &str, rng: &mut StdRng) -> KeywordRecord {
    let mut trend = [0u32; TREND_POINTS];
    for point in trend.iter_mut() {
        *point = rng.gen_range(30..70);
    }

    KeywordRecord {
        id: fresh_id(rng),
        keyword: keyword.to_string(),
        volume: rng.gen_range(10_000..60_000),
        difficulty: crate::types::Difficulty::Medium,
        competition: rng.gen_range(0.2..0.8),
        cpc: rng.gen_range(1.0..3.0),
        trend,
        search_intent: classify::intent(keyword),
        related_keywords: None,
    }
}

/// Epoch-millis plus nine random alphanumeric characters. Unique within a
/// run; collisions across runs are only probabilistically avoided.
fn fresh_id(rng: &mut StdRng) -> String {
    let suffix = Alphanumeric.sample_string(rng, 9).to_lowercase();
    format!("{}{}", Utc::now().timestamp_millis(), suffix)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
