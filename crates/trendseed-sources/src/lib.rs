//! trendseed-sources — outbound collaborator adapters.
//!
//! Each adapter implements a trait seam from `trendseed-core` over plain
//! HTTPS: [`autocomplete::RemoteSuggestionFetcher`] for keyword suggestions
//! (with a fully offline fallback) and [`trends::TrendsClient`] for
//! relative-interest time series and related queries.

pub mod autocomplete;
pub mod trends;

pub use autocomplete::RemoteSuggestionFetcher;
pub use trends::TrendsClient;
