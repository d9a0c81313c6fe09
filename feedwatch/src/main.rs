mod cli;
mod commands;
mod render;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use feedwatch_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "feedwatch",
    version,
    about = "Feedwatch: live operational event feed viewer"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow the feed and render events as they arrive (default)
    Watch(cli::watch::WatchArgs),

    /// Load and validate a config file
    CheckConfig {
        /// Path to the config file
        #[arg(long, default_value = "feedwatch.toml")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::CheckConfig { config }) => cli::check::check(&config),

        Some(Command::Watch(args)) => cli::watch::run(args),

        None => cli::watch::run(cli::watch::WatchArgs::default()),
    }
}

/// CLI flag first, then the config file, then the terminal check.
pub(crate) fn start_logging(flag: Option<LogFormat>, configured: Option<LogFormat>) {
    init_logging(flag.or(configured).unwrap_or_else(default_log_format));
}
