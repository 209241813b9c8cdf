//! Configuration types for trendseed.
//!
//! [`Config::load`] reads `~/.config/trendseed/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:3000"

[suggest]
endpoints = [
    "https://suggestqueries.google.com/complete/search?client=chrome",
    "https://suggestqueries.google.com/complete/search?client=firefox",
    "https://www.google.com/complete/search?client=chrome",
]
request_timeout_ms = 3000
remote_cap = 20

[trends]
interest_endpoint = "https://trends.google.com/trends/api/widgetdata/multiline"
related_endpoint  = "https://trends.google.com/trends/api/widgetdata/relatedsearches"
geo = "US"
request_timeout_ms = 3000

[analysis]
max_related = 20
batch_size = 5
batch_delay_ms = 1000
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/trendseed/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub trends: TrendsConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[suggest]` section — remote autocomplete endpoints, tried in order.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Maximum suggestions taken from a live endpoint response.
    #[serde(default = "default_remote_cap")]
    pub remote_cap: usize,
}

fn default_endpoints() -> Vec<String> {
    vec![
        "https://suggestqueries.google.com/complete/search?client=chrome".to_string(),
        "https://suggestqueries.google.com/complete/search?client=firefox".to_string(),
        "https://www.google.com/complete/search?client=chrome".to_string(),
    ]
}
fn default_request_timeout_ms() -> u64 { 3000 }
fn default_remote_cap() -> usize { 20 }

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            request_timeout_ms: default_request_timeout_ms(),
            remote_cap: default_remote_cap(),
        }
    }
}

impl SuggestConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// `[trends]` section — the interest-over-time collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsConfig {
    #[serde(default = "default_interest_endpoint")]
    pub interest_endpoint: String,
    #[serde(default = "default_related_endpoint")]
    pub related_endpoint: String,
    #[serde(default = "default_geo")]
    pub geo: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_interest_endpoint() -> String {
    "https://trends.google.com/trends/api/widgetdata/multiline".to_string()
}
fn default_related_endpoint() -> String {
    "https://trends.google.com/trends/api/widgetdata/relatedsearches".to_string()
}
fn default_geo() -> String { "US".to_string() }

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            interest_endpoint: default_interest_endpoint(),
            related_endpoint: default_related_endpoint(),
            geo: default_geo(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl TrendsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// `[analysis]` section — orchestration caps and pacing.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// How many related keywords to synthesize metrics for.
    #[serde(default = "default_max_related")]
    pub max_related: usize,
    /// Concurrent synthesis calls per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause between batches — a self-imposed rate limit toward the trend
    /// collaborator, not a correctness requirement.
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

fn default_max_related() -> usize { 20 }
fn default_batch_size() -> usize { 5 }
fn default_batch_delay_ms() -> u64 { 1000 }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_related: default_max_related(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
        }
    }
}

impl AnalysisConfig {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/trendseed/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("trendseed")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.server.bind, "127.0.0.1:3000");
        assert_eq!(cfg.suggest.endpoints.len(), 3);
        assert_eq!(cfg.suggest.remote_cap, 20);
        assert_eq!(cfg.analysis.batch_size, 5);
        assert_eq!(cfg.analysis.batch_delay(), Duration::from_secs(1));
        assert_eq!(cfg.trends.geo, "US");
    }
}
