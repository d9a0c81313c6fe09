use crate::logging::LogFormat;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_FEED_PATH: &str = "/feed";
pub const DEFAULT_RETRY_MS: u64 = 3000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Top-level `feedwatch.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedwatchConfig {
    pub feed: FeedSection,
    pub transport: TransportSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedSection {
    /// Server origin, e.g. "http://localhost:9000"
    pub base_url: String,

    /// Path of the feed endpoint on that origin.
    pub path: String,

    /// Initial page query string that filter parameters are layered over.
    pub search: String,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_FEED_PATH.to_string(),
            search: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportSection {
    /// Reconnect delay used until the server sends its own `retry:`.
    pub retry_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for TransportSection {
    fn default() -> Self {
        Self {
            retry_ms: DEFAULT_RETRY_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub format: Option<LogFormat>,
}
