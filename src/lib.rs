//! trendseed — keyword suggestion and mock-metrics trend analysis API.
//!
//! A user submits a seed keyword over HTTP and receives a main analyzed
//! keyword plus a ranked list of related keywords, each carrying synthetic
//! search volume, competition, cost-per-click, a week of trend points, and
//! difficulty/intent classifications. Remote collaborators (autocomplete,
//! trends) are best-effort: every failure is recovered into locally
//! generated results, tagged with a `fallback` provenance.
//!
//! # Architecture
//!
//! ```text
//! HTTP ──► Orchestrator ──► expand (local catalogue)
//!               │      └──► RemoteSuggestionFetcher ──► autocomplete endpoints
//!               │
//!               └──► MetricsSynthesizer ──► TrendsClient
//! ```
//!
//! The crates mirror the layers: `trendseed-core` holds everything offline
//! (types, config, expansion, classification, synthesis, orchestration),
//! `trendseed-sources` the outbound adapters, `trendseed-server` the axum
//! surface. This root crate is the binary plus the integration harnesses.

pub use trendseed_core::{
    Difficulty, KeywordRecord, Orchestrator, Provenance, SearchIntent, SearchReport,
    SuggestionBatch, TrendWeek,
};
pub use trendseed_server::{build_router, AppState};
pub use trendseed_sources::{RemoteSuggestionFetcher, TrendsClient};
