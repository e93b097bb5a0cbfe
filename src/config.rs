use std::env;
use std::time::Duration;

use anyhow::Result;

use crate::pipeline::similarity::DEFAULT_LINK_THRESHOLD;

/// Central configuration loaded from environment variables.
///
/// Everything has a default — the tool runs with no .env file at all.
/// When a .env file is present it is loaded automatically at startup
/// via dotenvy. CLI flags override these values per invocation.
pub struct Config {
    /// User agent sent with page fetches (GRAPHITE_USER_AGENT).
    pub user_agent: String,
    /// Per-request timeout for page fetches (GRAPHITE_FETCH_TIMEOUT_SECS).
    pub fetch_timeout: Duration,
    /// Similarity threshold above which a link is suggested
    /// (GRAPHITE_LINK_THRESHOLD).
    pub link_threshold: f64,
    /// How many top keywords to show per document (GRAPHITE_TOP_KEYWORDS).
    pub top_keywords: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let fetch_timeout_secs = env::var("GRAPHITE_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(20);

        let link_threshold = env::var("GRAPHITE_LINK_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(DEFAULT_LINK_THRESHOLD);

        let top_keywords = env::var("GRAPHITE_TOP_KEYWORDS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(10);

        Ok(Self {
            user_agent: env::var("GRAPHITE_USER_AGENT")
                .unwrap_or_else(|_| "graphite/0.1 (keyword-analysis)".to_string()),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            link_threshold,
            top_keywords,
        })
    }
}
