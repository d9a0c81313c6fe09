use serde::Deserialize;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Output format of the process log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One flattened JSON object per event.
    Json,
    /// Human-readable, colored when attached to a terminal.
    Pretty,
}

/// Initialize the logging system.
///
/// - Filtering comes from `RUST_LOG`, defaulting to "info"
/// - Output goes to stderr; stdout belongs to the rendered feed
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder
            .with_ansi(io::stderr().is_terminal())
            .with_target(false)
            .init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}
