//! Remote autocomplete suggestions with an offline fallback.
//!
//! Endpoints are tried strictly in order, each bounded by a short timeout;
//! the first well-formed response wins and remaining endpoints are skipped.
//! Exhausting every endpoint is not an error — it is the defined trigger for
//! local generation via the core expansion catalogue. The returned
//! [`Provenance`] tag is the only caller-visible trace of which path ran.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA};
use std::time::Duration;
use trendseed_core::config::SuggestConfig;
use trendseed_core::{expand, Provenance, SourceError, SuggestionBatch, SuggestionSource};

/// Autocomplete endpoints expect a browser, not a crawler.
const BROWSER_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct RemoteSuggestionFetcher {
    client: reqwest::Client,
    endpoints: Vec<String>,
    timeout: Duration,
    remote_cap: usize,
}

impl RemoteSuggestionFetcher {
    pub fn new(cfg: &SuggestConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .user_agent(BROWSER_UA)
            .default_headers(headers)
            .build()
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoints: cfg.endpoints.clone(),
            timeout: cfg.request_timeout(),
            remote_cap: cfg.remote_cap,
        })
    }

    async fn try_endpoint(&self, url: &str, keyword: &str) -> Result<Vec<String>, SourceError> {
        let response = self
            .client
            .get(url)
            .query(&[("q", keyword)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Transport(format!("status {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        parse_suggest_payload(&body, self.remote_cap).ok_or_else(|| {
            SourceError::Malformed("expected [query, [suggestion, ...], ...]".to_string())
        })
    }
}

#[async_trait]
impl SuggestionSource for RemoteSuggestionFetcher {
    async fn fetch(&self, keyword: &str) -> Result<SuggestionBatch, SourceError> {
        for url in &self.endpoints {
            match self.try_endpoint(url, keyword).await {
                Ok(suggestions) => {
                    tracing::debug!(
                        endpoint = %url,
                        count = suggestions.len(),
                        "live suggestions"
                    );
                    return Ok(SuggestionBatch { suggestions, provenance: Provenance::Live });
                }
                Err(err) => {
                    tracing::debug!(endpoint = %url, error = %err, "endpoint attempt failed");
                }
            }
        }

        tracing::warn!(keyword = %keyword, "all autocomplete endpoints failed, generating locally");
        Ok(SuggestionBatch {
            suggestions: expand::expand(keyword),
            provenance: Provenance::Fallback,
        })
    }
}

/// Parse the `[query, [suggestion, ...], ...]` autocomplete wire format.
///
/// Returns `None` unless element 1 is a non-empty array holding at least one
/// non-blank string. Blank entries are skipped, the rest are trimmed and
/// capped at `cap`.
fn parse_suggest_payload(body: &str, cap: usize) -> Option<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let suggestions = value.as_array()?.get(1)?.as_array()?;

    let out: Vec<String> = suggestions
        .iter()
        .filter_map(|entry| entry.as_str())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .take(cap)
        .collect();

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trendseed_core::expand::EXPANSION_CAP;

    #[test]
    fn payload_parses_the_two_element_shape() {
        let body = r#"["rust", ["rust tutorial", "rust book", "  ", "rust async"], {"meta": 1}]"#;
        let parsed = parse_suggest_payload(body, 20).unwrap();
        assert_eq!(parsed, ["rust tutorial", "rust book", "rust async"]);
    }

    #[test]
    fn payload_caps_suggestions() {
        let entries: Vec<String> = (0..40).map(|i| format!("\"rust {i}\"")).collect();
        let body = format!("[\"rust\", [{}]]", entries.join(","));
        let parsed = parse_suggest_payload(&body, 20).unwrap();
        assert_eq!(parsed.len(), 20);
    }

    #[test]
    fn payload_rejects_malformed_bodies() {
        assert!(parse_suggest_payload("not json", 20).is_none());
        assert!(parse_suggest_payload("{\"rust\": []}", 20).is_none());
        assert!(parse_suggest_payload("[\"rust\"]", 20).is_none());
        assert!(parse_suggest_payload("[\"rust\", []]", 20).is_none());
        assert!(parse_suggest_payload("[\"rust\", [\"  \"]]", 20).is_none());
        assert!(parse_suggest_payload("[\"rust\", [1, 2, 3]]", 20).is_none());
    }

    #[tokio::test]
    async fn exhausted_endpoints_fall_back_to_local_generation() {
        // No endpoints configured means the attempt loop is skipped entirely
        // and the fallback path runs without touching the network.
        let cfg = SuggestConfig { endpoints: Vec::new(), ..SuggestConfig::default() };
        let fetcher = RemoteSuggestionFetcher::new(&cfg).unwrap();

        let batch = fetcher.fetch("rust").await.unwrap();
        assert_eq!(batch.provenance, Provenance::Fallback);
        // The fallback is exactly the local catalogue, bounded by its cap.
        assert_eq!(batch.suggestions, expand::expand("rust"));
        assert!(batch.suggestions.len() <= EXPANSION_CAP);
        assert!(!batch.suggestions.iter().any(|s| s == "rust"));
    }
}
