use feedwatch_core::conf::{ConfigError, load_config};
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ feed: {}{}", cfg.feed.base_url, cfg.feed.path);
            if !cfg.feed.search.is_empty() {
                println!("✔ initial query: {}", cfg.feed.search);
            }
            println!("✔ reconnect delay: {}ms", cfg.transport.retry_ms);
            println!("✔ connect timeout: {}ms", cfg.transport.connect_timeout_ms);
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{err}");
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidValue { field: "feed.base_url", .. } => Some(
            "The feed origin must be an absolute http or https URL.\n\
             \n\
             Example:\n\
             \n\
             [feed]\n\
             base_url = \"http://localhost:9000\"",
        ),

        ConfigError::InvalidValue { field: "feed.path", .. } => Some(
            "The feed path is resolved against the origin and must start with '/'.\n\
             \n\
             Example:\n\
             \n\
             [feed]\n\
             path = \"/feed\"",
        ),

        ConfigError::InvalidValue {
            field: "transport.retry_ms" | "transport.connect_timeout_ms",
            ..
        } => Some("Transport delays are in milliseconds and must be greater than zero."),

        _ => None,
    }
}
