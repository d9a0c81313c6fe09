use crate::conf::{ConfigError, FeedwatchConfig, validate_base_url, validate_config};
use crate::feed::FeedEndpoint;
use crate::feed::sse::SseTransport;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "feedwatch.toml";

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<FeedwatchConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(path, &raw)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn parse_config(path: &Path, raw: &str) -> Result<FeedwatchConfig, ConfigError> {
    toml::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}

/// Resolve the config to run with.
///
/// An explicit path must exist. Without one, `feedwatch.toml` in `dir` is
/// used when present, otherwise built-in defaults.
pub fn resolve_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<(FeedwatchConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return Ok((load_config(path)?, Some(path.to_path_buf())));
    }

    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        let cfg = load_config(&candidate)?;
        return Ok((cfg, Some(candidate)));
    }

    Ok((FeedwatchConfig::default(), None))
}

impl FeedwatchConfig {
    pub fn endpoint(&self) -> Result<FeedEndpoint, ConfigError> {
        let origin = validate_base_url(&self.feed.base_url)?;
        Ok(FeedEndpoint::new(
            origin,
            self.feed.path.clone(),
            self.feed.search.clone(),
        ))
    }

    pub fn retry(&self) -> Duration {
        Duration::from_millis(self.transport.retry_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.transport.connect_timeout_ms)
    }

    pub fn transport(&self) -> Result<SseTransport, ConfigError> {
        SseTransport::with_connect_timeout(self.connect_timeout(), self.retry())
            .map_err(ConfigError::HttpClient)
    }
}
