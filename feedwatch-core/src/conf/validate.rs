use crate::conf::{ConfigError, FeedwatchConfig};
use url::Url;

/// Parse and check the feed origin.
pub fn validate_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid("feed.base_url", e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::invalid(
                "feed.base_url",
                format!("unsupported scheme '{other}'"),
            ));
        }
    }

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ConfigError::invalid("feed.base_url", "missing host"));
    }

    Ok(url)
}

pub fn validate_config(cfg: &FeedwatchConfig) -> Result<(), ConfigError> {
    validate_base_url(&cfg.feed.base_url)?;

    if !cfg.feed.path.starts_with('/') {
        return Err(ConfigError::invalid(
            "feed.path",
            format!("'{}' must start with '/'", cfg.feed.path),
        ));
    }

    if cfg.transport.retry_ms == 0 {
        return Err(ConfigError::invalid(
            "transport.retry_ms",
            "must be greater than zero",
        ));
    }

    if cfg.transport.connect_timeout_ms == 0 {
        return Err(ConfigError::invalid(
            "transport.connect_timeout_ms",
            "must be greater than zero",
        ));
    }

    Ok(())
}
