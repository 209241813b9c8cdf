//! Stub collaborators with scripted behavior.
//!
//! These stand in for the network adapters so harnesses can exercise the
//! orchestrator and router deterministically: fixed suggestion sets, fixed
//! trend weeks, and switchable failure modes. Paired with a seeded RNG,
//! every synthesized metric is reproducible.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use trendseed_core::config::AnalysisConfig;
use trendseed_core::{
    Orchestrator, Provenance, SourceError, SuggestionBatch, SuggestionSource, TrendSource,
    TrendWeek,
};

// ---------------------------------------------------------------------------
// StubSuggestions
// ---------------------------------------------------------------------------

/// A [`SuggestionSource`] that returns a fixed batch — or fails on demand.
pub struct StubSuggestions {
    pub suggestions: Vec<String>,
    pub provenance: Provenance,
    pub fail: bool,
}

impl StubSuggestions {
    /// A live batch with the given suggestions.
    pub fn live(suggestions: &[&str]) -> Self {
        Self {
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            provenance: Provenance::Live,
            fail: false,
        }
    }

    /// A locally generated batch with the given suggestions.
    pub fn fallback(suggestions: &[&str]) -> Self {
        Self {
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            provenance: Provenance::Fallback,
            fail: false,
        }
    }

    /// A source that always errors — unlike the production fetcher, which
    /// never does. Drives the orchestrator's own fallback path.
    pub fn offline() -> Self {
        Self { suggestions: Vec::new(), provenance: Provenance::Live, fail: true }
    }
}

#[async_trait]
impl SuggestionSource for StubSuggestions {
    async fn fetch(&self, _keyword: &str) -> Result<SuggestionBatch, SourceError> {
        if self.fail {
            return Err(SourceError::Transport("stub offline".to_string()));
        }
        Ok(SuggestionBatch {
            suggestions: self.suggestions.clone(),
            provenance: self.provenance,
        })
    }
}

// ---------------------------------------------------------------------------
// StubTrends
// ---------------------------------------------------------------------------

/// A [`TrendSource`] with a fixed week and related-query set.
pub struct StubTrends {
    pub week: TrendWeek,
    pub related: Vec<String>,
    pub fail: bool,
}

impl StubTrends {
    /// A steady mid-interest week, no related queries.
    pub fn steady() -> Self {
        Self { week: [50, 55, 48, 62, 58, 65, 60], related: Vec::new(), fail: false }
    }

    pub fn with_related(related: &[&str]) -> Self {
        Self { related: related.iter().map(|s| s.to_string()).collect(), ..Self::steady() }
    }

    /// A trend source that always errors; the synthesizer falls back to
    /// randomized defaults.
    pub fn offline() -> Self {
        Self { fail: true, ..Self::steady() }
    }
}

#[async_trait]
impl TrendSource for StubTrends {
    async fn fetch_week(&self, _keyword: &str) -> Result<TrendWeek, SourceError> {
        if self.fail {
            return Err(SourceError::Transport("stub offline".to_string()));
        }
        Ok(self.week)
    }

    async fn related_queries(&self, _keyword: &str) -> Result<Vec<String>, SourceError> {
        if self.fail {
            return Err(SourceError::Transport("stub offline".to_string()));
        }
        Ok(self.related.clone())
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

/// Orchestration config for tests: production caps, zero inter-batch delay.
pub fn test_analysis_config() -> AnalysisConfig {
    AnalysisConfig { max_related: 20, batch_size: 5, batch_delay_ms: 0 }
}

/// An orchestrator over the given stubs with a seeded RNG.
pub fn orchestrator_with(suggestions: StubSuggestions, trends: StubTrends, seed: u64) -> Orchestrator {
    Orchestrator::with_rng(
        Arc::new(suggestions),
        Arc::new(trends),
        test_analysis_config(),
        StdRng::seed_from_u64(seed),
    )
}
