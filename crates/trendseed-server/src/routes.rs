//! Route handlers and their wire types.

use crate::{error::ApiError, AppState};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use trendseed_core::{expand, KeywordRecord, Provenance};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/suggestions
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub query: String,
    pub suggestions: Vec<String>,
    pub source: Provenance,
    pub count: usize,
}

/// Suggestions only — no metric synthesis. The `source` field reports
/// whether a live endpoint answered or the local catalogue filled in.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let query = require_query(params.q)?;
    tracing::debug!(query = %query, "fetching suggestions");

    let batch = state
        .suggestions
        .fetch(&query)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(Json(SuggestionsResponse {
        count: batch.suggestions.len(),
        source: batch.provenance,
        suggestions: batch.suggestions,
        query,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/search
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub main: KeywordRecord,
    pub related: Vec<KeywordRecord>,
    pub total_candidates: usize,
    pub source: Provenance,
    /// Monotonic request token; clients drop responses that are not the
    /// latest generation they issued.
    pub generation: u64,
    /// Instant search-box suggestions for the next query.
    pub suggestions: Vec<String>,
    pub search_time_ms: u64,
}

/// Full analysis: main keyword plus the ranked related list.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = require_query(params.q)?;
    tracing::info!(query = %query, "analysis requested");

    let started = Instant::now();
    let report = state.orchestrator.run(&query).await;
    let suggestions = expand::quick_suggestions(&query);

    Ok(Json(SearchResponse {
        main: report.main,
        related: report.related,
        total_candidates: report.total_candidates,
        source: report.provenance,
        generation: report.generation,
        suggestions,
        search_time_ms: started.elapsed().as_millis() as u64,
        query,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A present, non-blank `q` parameter, trimmed. Anything else is a 400.
fn require_query(q: Option<String>) -> Result<String, ApiError> {
    q.map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)
}
