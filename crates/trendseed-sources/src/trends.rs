//! Relative-interest time series and related queries.
//!
//! The collaborator answers JSON behind an XSSI guard prefix (`)]}',`).
//! Interest points live at `default.timelineData[].value[0]`; related
//! queries at `default.rankedList[0].rankedKeyword[].query`. A response that
//! parses but carries fewer than a week of points is treated as malformed
//! data and replaced by a fixed stand-in week — the length-7 invariant never
//! leaves this module broken. Transport and parse errors are returned to the
//! caller, which substitutes its own randomness.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use trendseed_core::config::TrendsConfig;
use trendseed_core::types::TREND_POINTS;
use trendseed_core::{SourceError, TrendSource, TrendWeek};

/// Served when the collaborator answers with an empty or short series.
const STAND_IN_WEEK: TrendWeek = [50, 55, 48, 62, 58, 65, 60];

/// Ranked related queries taken from a response, best first.
const RELATED_CAP: usize = 10;

pub struct TrendsClient {
    client: reqwest::Client,
    interest_endpoint: String,
    related_endpoint: String,
    geo: String,
    timeout: Duration,
}

impl TrendsClient {
    pub fn new(cfg: &TrendsConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            interest_endpoint: cfg.interest_endpoint.clone(),
            related_endpoint: cfg.related_endpoint.clone(),
            geo: cfg.geo.clone(),
            timeout: cfg.request_timeout(),
        })
    }

    async fn get(&self, endpoint: &str, keyword: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(endpoint)
            .query(&[("hl", "en-US"), ("geo", self.geo.as_str()), ("q", keyword)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Transport(format!("status {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))
    }
}

#[async_trait]
impl TrendSource for TrendsClient {
    async fn fetch_week(&self, keyword: &str) -> Result<TrendWeek, SourceError> {
        let body = self.get(&self.interest_endpoint, keyword).await?;
        let week = parse_week(&body)?;
        tracing::debug!(keyword = %keyword, ?week, "trend week fetched");
        Ok(week)
    }

    async fn related_queries(&self, keyword: &str) -> Result<Vec<String>, SourceError> {
        let body = self.get(&self.related_endpoint, keyword).await?;
        let queries = parse_related(&body)?;
        tracing::debug!(keyword = %keyword, count = queries.len(), "related queries fetched");
        Ok(queries)
    }
}

// ---------------------------------------------------------------------------
// Payload parsing
// ---------------------------------------------------------------------------

/// Strip the XSSI guard prefix the collaborator prepends to JSON bodies.
fn strip_xssi_prefix(body: &str) -> &str {
    let trimmed = body.trim_start();
    match trimmed.strip_prefix(")]}'") {
        Some(rest) => rest.trim_start_matches([',', '\n', '\r']),
        None => trimmed,
    }
}

/// Extract the last week of interest points. Negative values are clamped to
/// zero; a series shorter than a week yields the stand-in.
fn parse_week(body: &str) -> Result<TrendWeek, SourceError> {
    let value: Value = serde_json::from_str(strip_xssi_prefix(body))
        .map_err(|err| SourceError::Malformed(err.to_string()))?;

    let points: Vec<u32> = value
        .pointer("/default/timelineData")
        .and_then(Value::as_array)
        .map(|buckets| {
            buckets
                .iter()
                .filter_map(|bucket| bucket.pointer("/value/0"))
                .filter_map(Value::as_i64)
                .map(|point| point.max(0) as u32)
                .collect()
        })
        .unwrap_or_default();

    if points.len() < TREND_POINTS {
        return Ok(STAND_IN_WEEK);
    }

    let mut week: TrendWeek = [0; TREND_POINTS];
    week.copy_from_slice(&points[points.len() - TREND_POINTS..]);
    Ok(week)
}

/// Extract the top ranked related queries. A parseable body with no ranked
/// list yields an empty vec; callers treat empty as "use the default set".
fn parse_related(body: &str) -> Result<Vec<String>, SourceError> {
    let value: Value = serde_json::from_str(strip_xssi_prefix(body))
        .map_err(|err| SourceError::Malformed(err.to_string()))?;

    let queries = value
        .pointer("/default/rankedList/0/rankedKeyword")
        .and_then(Value::as_array)
        .map(|ranked| {
            ranked
                .iter()
                .filter_map(|entry| entry.pointer("/query"))
                .filter_map(Value::as_str)
                .filter(|query| !query.trim().is_empty())
                .map(String::from)
                .take(RELATED_CAP)
                .collect()
        })
        .unwrap_or_default();

    Ok(queries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn timeline_body(points: &[i64]) -> String {
        let buckets: Vec<String> = points
            .iter()
            .map(|p| format!("{{\"time\": \"1700000000\", \"value\": [{p}]}}"))
            .collect();
        format!(")]}}',\n{{\"default\": {{\"timelineData\": [{}]}}}}", buckets.join(","))
    }

    #[test]
    fn week_takes_the_last_seven_points() {
        let body = timeline_body(&[10, 20, 30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(parse_week(&body).unwrap(), [30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn week_clamps_negative_points() {
        let body = timeline_body(&[-5, 20, 30, 40, 50, 60, 70]);
        assert_eq!(parse_week(&body).unwrap(), [0, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn short_series_yields_the_stand_in_week() {
        let body = timeline_body(&[10, 20, 30]);
        assert_eq!(parse_week(&body).unwrap(), STAND_IN_WEEK);

        let empty = r#"{"default": {"timelineData": []}}"#;
        assert_eq!(parse_week(empty).unwrap(), STAND_IN_WEEK);

        let missing = r#"{"default": {}}"#;
        assert_eq!(parse_week(missing).unwrap(), STAND_IN_WEEK);
    }

    #[test]
    fn unparseable_body_is_an_error() {
        assert!(parse_week("<html>rate limited</html>").is_err());
    }

    #[test]
    fn related_extracts_ranked_queries() {
        let body = r#")]}',
        {"default": {"rankedList": [{"rankedKeyword": [
            {"query": "rust tutorial", "value": 100},
            {"query": "rust book", "value": 80},
            {"query": "   ", "value": 10}
        ]}]}}"#;
        assert_eq!(parse_related(body).unwrap(), ["rust tutorial", "rust book"]);
    }

    #[test]
    fn related_missing_list_is_empty_not_an_error() {
        assert_eq!(parse_related(r#"{"default": {}}"#).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn xssi_prefix_is_stripped() {
        assert_eq!(strip_xssi_prefix(")]}',\n{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_xssi_prefix("{\"a\": 1}"), "{\"a\": 1}");
    }
}
