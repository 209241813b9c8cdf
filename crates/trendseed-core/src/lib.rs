//! trendseed-core — keyword suggestion and analysis pipeline.
//!
//! This crate holds everything that does not talk to the network: the shared
//! types, the suggestion expansion catalogue, the pure classification rules,
//! the metric synthesizer, and the orchestrator that ties a whole search
//! together. Network collaborators plug in through the [`SuggestionSource`]
//! and [`TrendSource`] traits, implemented in `trendseed-sources`.
//!
//! # Architecture
//!
//! ```text
//! Orchestrator ──► expand (local catalogue)
//!      │      └──► SuggestionSource (remote autocomplete, offline fallback)
//!      │
//!      └──► MetricsSynthesizer ──► TrendSource (interest-over-time)
//! ```
//!
//! The orchestrator never fails: every collaborator error is recovered into
//! a locally generated result, and the only caller-visible trace of the
//! recovery is the [`Provenance`] tag on the report.

pub mod classify;
pub mod config;
pub mod expand;
pub mod orchestrate;
pub mod synth;
pub mod types;

pub use orchestrate::Orchestrator;
pub use synth::MetricsSynthesizer;
pub use types::{
    Difficulty, KeywordRecord, Provenance, SearchIntent, SearchReport, SuggestionBatch, TrendWeek,
};

use async_trait::async_trait;
use thiserror::Error;

/// Error at a collaborator seam. Callers inside this crate always recover
/// from these; they exist so that adapters and stubs can report *why* a
/// fallback was taken.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection, DNS, timeout, or non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),
    /// The collaborator answered, but not in the shape we expect.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// A provider of keyword suggestions for a seed.
///
/// The production implementation tries remote autocomplete endpoints and
/// falls back to local generation, so it never actually returns `Err`; the
/// `Result` is part of the seam so the orchestrator's own fallback path
/// stays reachable (and testable) for sources that can fail.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch(&self, keyword: &str) -> Result<SuggestionBatch, SourceError>;
}

/// A provider of relative-interest time series and related queries.
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// The last week of relative interest for `keyword`, one point per day.
    async fn fetch_week(&self, keyword: &str) -> Result<TrendWeek, SourceError>;

    /// Top related queries for `keyword`, best first. May be empty.
    async fn related_queries(&self, keyword: &str) -> Result<Vec<String>, SourceError>;
}
