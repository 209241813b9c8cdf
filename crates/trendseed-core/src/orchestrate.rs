//! Search orchestration — composes expansion, remote suggestions, and metric
//! synthesis into one report.
//!
//! [`Orchestrator::run`] never fails. The primary path gathers candidates
//! from the local catalogue and the remote suggestion source, merges and
//! ranks them, and synthesizes metrics in small rate-limited batches. If
//! candidate gathering errors, a best-effort report is built from a short
//! fixed set of phrase variants instead.

use crate::config::AnalysisConfig;
use crate::synth::MetricsSynthesizer;
use crate::types::{KeywordRecord, Provenance, SearchReport};
use crate::{expand, SourceError, SuggestionSource, TrendSource};
use futures::future::join_all;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ranking inside the orchestrator pulls candidates toward this length,
/// shorter than the expander's own target — selected keywords end up closer
/// to card-sized phrases.
const RELATED_TARGET_LEN: usize = 15;

/// Candidates at or below this char count are dropped before selection.
const MIN_CANDIDATE_LEN: usize = 3;
/// Candidates at or above this char count are dropped before selection.
const MAX_SELECTED_LEN: usize = 80;

/// Phrase variants used to build a related list when candidate gathering
/// fails outright.
const FALLBACK_VARIANT_SUFFIXES: &[&str] = &["tutorial", "guide", "tips"];

pub struct Orchestrator {
    suggestions: Arc<dyn SuggestionSource>,
    trends: Arc<dyn TrendSource>,
    synth: MetricsSynthesizer,
    cfg: AnalysisConfig,
    generation: AtomicU64,
}

impl Orchestrator {
    /// Production constructor: synthesis RNG seeded from OS entropy.
    pub fn new(
        suggestions: Arc<dyn SuggestionSource>,
        trends: Arc<dyn TrendSource>,
        cfg: AnalysisConfig,
    ) -> Self {
        let synth = MetricsSynthesizer::new(trends.clone());
        Self { suggestions, trends, synth, cfg, generation: AtomicU64::new(0) }
    }

    /// Test constructor: a caller-seeded RNG makes synthesized metrics exact.
    pub fn with_rng(
        suggestions: Arc<dyn SuggestionSource>,
        trends: Arc<dyn TrendSource>,
        cfg: AnalysisConfig,
        rng: StdRng,
    ) -> Self {
        let synth = MetricsSynthesizer::with_rng(trends.clone(), rng);
        Self { suggestions, trends, synth, cfg, generation: AtomicU64::new(0) }
    }

    /// Run a full analysis for `seed`. The seed is assumed trimmed and
    /// non-empty; the HTTP layer rejects blank queries upstream.
    pub async fn run(&self, seed: &str) -> SearchReport {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(seed = %seed, generation, "starting analysis run");

        match self.run_primary(seed, generation).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(
                    seed = %seed,
                    error = %err,
                    "candidate gathering failed, serving best-effort report"
                );
                self.run_fallback(seed, generation).await
            }
        }
    }

    async fn run_primary(&self, seed: &str, generation: u64) -> Result<SearchReport, SourceError> {
        let mut main = self.synth.synthesize(seed).await;
        main.related_keywords = Some(self.related_for(seed).await);

        // Candidate gathering: local catalogue plus the remote source.
        let local = expand::expand(seed);
        let remote = self.suggestions.fetch(seed).await?;
        let provenance = remote.provenance;

        let merged = merge_unique(local, remote.suggestions);
        let total_candidates = merged.len();

        let seed_lower = seed.to_lowercase();
        let mut selected: Vec<String> = merged
            .into_iter()
            .filter(|candidate| keep_candidate(candidate, seed))
            .collect();
        expand::rank_by_affinity(&mut selected, &seed_lower, RELATED_TARGET_LEN);
        selected.truncate(self.cfg.max_related);

        let related = self.synthesize_batched(&selected).await;

        tracing::debug!(
            seed = %seed,
            total_candidates,
            selected = selected.len(),
            source = %provenance,
            "analysis run complete"
        );

        Ok(SearchReport {
            generation,
            main,
            related,
            total_candidates,
            provenance,
        })
    }

    /// Best-effort report from a short fixed set of phrase variants.
    async fn run_fallback(&self, seed: &str, generation: u64) -> SearchReport {
        let mut main = self.synth.synthesize(seed).await;
        main.related_keywords = Some(default_related(seed));

        let variants = fallback_variants(seed);
        let total_candidates = variants.len();
        let mut related = Vec::with_capacity(variants.len());
        for variant in &variants {
            related.push(self.synth.synthesize(variant).await);
        }
        related.sort_by(|a, b| b.volume.cmp(&a.volume));

        SearchReport {
            generation,
            main,
            related,
            total_candidates,
            provenance: Provenance::Fallback,
        }
    }

    /// Synthesize the selected candidates in fixed-size concurrent batches,
    /// pausing between batches. The pause is a courtesy toward the trend
    /// collaborator's rate expectations, not a correctness requirement, so
    /// the final batch is not followed by one. Results arrive sorted by
    /// volume, descending.
    async fn synthesize_batched(&self, selected: &[String]) -> Vec<KeywordRecord> {
        let batch_size = self.cfg.batch_size.max(1);
        let chunks: Vec<&[String]> = selected.chunks(batch_size).collect();
        let total = chunks.len();

        let mut related: Vec<KeywordRecord> = Vec::with_capacity(selected.len());
        for (index, chunk) in chunks.into_iter().enumerate() {
            let settled =
                join_all(chunk.iter().map(|keyword| self.synth.synthesize(keyword))).await;
            related.extend(settled);

            if index + 1 < total && !self.cfg.batch_delay().is_zero() {
                tokio::time::sleep(self.cfg.batch_delay()).await;
            }
        }

        related.sort_by(|a, b| b.volume.cmp(&a.volume));
        related
    }

    /// Related queries for the main record, recovered to a fixed variant set
    /// when the collaborator errors or comes back empty.
    async fn related_for(&self, seed: &str) -> Vec<String> {
        match self.trends.related_queries(seed).await {
            Ok(queries) if !queries.is_empty() => queries,
            Ok(_) => default_related(seed),
            Err(err) => {
                tracing::debug!(seed = %seed, error = %err, "related queries unavailable");
                default_related(seed)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Candidate pool helpers
// ---------------------------------------------------------------------------

/// Merge two candidate lists, deduplicating by exact equality and keeping
/// first-seen order (local candidates before remote ones).
fn merge_unique(local: Vec<String>, remote: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(local.len() + remote.len());
    let mut merged: Vec<String> = Vec::with_capacity(local.len() + remote.len());
    for candidate in local.into_iter().chain(remote) {
        let candidate = candidate.trim().to_string();
        if !candidate.is_empty() && seen.insert(candidate.clone()) {
            merged.push(candidate);
        }
    }
    merged
}

/// Selection filter: never the seed itself, card-sized lengths only, and no
/// serialization artifacts that occasionally leak out of autocomplete
/// payloads.
fn keep_candidate(candidate: &str, seed: &str) -> bool {
    let len = candidate.chars().count();
    candidate != seed
        && len > MIN_CANDIDATE_LEN
        && len < MAX_SELECTED_LEN
        && !candidate.contains("undefined")
        && !candidate.contains("null")
}

fn default_related(seed: &str) -> Vec<String> {
    FALLBACK_VARIANT_SUFFIXES
        .iter()
        .map(|suffix| format!("{seed} {suffix}"))
        .collect()
}

fn fallback_variants(seed: &str) -> Vec<String> {
    let mut variants = vec![format!("how to {seed}")];
    variants.extend(default_related(seed));
    variants.push(format!("best {seed}"));
    variants
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_first_seen_order() {
        let merged = merge_unique(
            vec!["a b c".to_string(), "d e f".to_string()],
            vec!["d e f".to_string(), "g h i".to_string()],
        );
        assert_eq!(merged, ["a b c", "d e f", "g h i"]);
    }

    #[test]
    fn filter_enforces_bounds_and_artifacts() {
        assert!(keep_candidate("rust async book", "rust"));
        assert!(!keep_candidate("rust", "rust"), "seed must be dropped");
        assert!(!keep_candidate("abc", "rust"), "len 3 is too short");
        assert!(keep_candidate("abcd", "rust"), "len 4 is allowed");
        let long = "x".repeat(80);
        assert!(!keep_candidate(&long, "rust"), "len 80 is too long");
        let almost = "x".repeat(79);
        assert!(keep_candidate(&almost, "rust"), "len 79 is allowed");
        assert!(!keep_candidate("rust undefined behavior", "rust"));
        assert!(!keep_candidate("null pointer rust", "rust"));
    }

    #[test]
    fn fallback_variants_cover_the_fixed_set() {
        let variants = fallback_variants("cook");
        assert_eq!(
            variants,
            [
                "how to cook",
                "cook tutorial",
                "cook guide",
                "cook tips",
                "best cook"
            ]
        );
    }
}
