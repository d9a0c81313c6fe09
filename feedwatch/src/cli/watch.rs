use crate::commands::{Command, HELP, apply_edit, parse_command, range_hint};
use crate::render::TerminalSink;
use clap::Args;
use feedwatch_core::conf::{FeedwatchConfig, resolve_config};
use feedwatch_core::feed::{FeedManager, FeedViewer, ViewerAction};
use feedwatch_core::logging::LogFormat;
use feedwatch_core::query::{FilterForm, SharedForm};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;

/// Stdin reads run on a blocking thread that cannot be interrupted.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

#[derive(Args, Debug, Default)]
pub struct WatchArgs {
    /// Path to the config file [default: ./feedwatch.toml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Feed server origin, overrides `feed.base_url`
    #[arg(long)]
    pub base_url: Option<String>,

    /// Initial service filter
    #[arg(long)]
    pub service: Option<String>,

    /// Initial version filter
    #[arg(long)]
    pub version: Option<String>,

    /// Start of the date range, "YYYY/MM/DD HH:MM" local time
    #[arg(long)]
    pub from: Option<String>,

    /// End of the date range, "YYYY/MM/DD HH:MM" local time
    #[arg(long)]
    pub to: Option<String>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl WatchArgs {
    fn initial_form(&self) -> FilterForm {
        FilterForm {
            service: self.service.clone().unwrap_or_default(),
            version: self.version.clone().unwrap_or_default(),
            start: self.from.clone().unwrap_or_default(),
            end: self.to.clone().unwrap_or_default(),
        }
    }
}

pub fn run(args: WatchArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (mut cfg, source) = resolve_config(args.config.as_deref(), &cwd)?;
    if let Some(base_url) = &args.base_url {
        cfg.feed.base_url = base_url.clone();
    }

    crate::start_logging(args.log_format, cfg.log.format);
    match &source {
        Some(path) => tracing::info!(config = %path.display(), "config loaded"),
        None => tracing::info!("no config file, using defaults"),
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(watch(cfg, args.initial_form()));
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    result
}

async fn watch(cfg: FeedwatchConfig, form: FilterForm) -> anyhow::Result<()> {
    let endpoint = cfg.endpoint()?;
    let transport = cfg.transport()?;
    let form = SharedForm::new(form);
    let sink = TerminalSink::stdout(std::io::stdout().is_terminal());

    tracing::info!(
        origin = %endpoint.origin,
        path = %endpoint.path,
        "starting feed viewer"
    );

    let mut viewer = FeedViewer::new(FeedManager::new(transport, endpoint), sink, form.clone());
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    let interrupt = tx.clone();
    ctrlc::set_handler(move || {
        tracing::info!("shutdown requested");
        let _ = interrupt.send(ViewerAction::Shutdown);
    })?;
    tokio::spawn(read_commands(form, tx));

    viewer.run(rx).await;
    tracing::info!("feed viewer stopped");
    Ok(())
}

/// Stdin command loop. EOF and `quit` both shut the viewer down.
async fn read_commands(form: SharedForm, tx: UnboundedSender<ViewerAction>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stdin");
                break;
            }
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e} (type 'help' for commands)");
                continue;
            }
        };

        let action = match command {
            Command::Search(edits) => {
                form.update(|f| edits.iter().for_each(|edit| apply_edit(f, edit)));
                ViewerAction::Search
            }
            Command::Set(edit) => {
                form.update(|f| apply_edit(f, &edit));
                if let Some(hint) = range_hint(&form.snapshot()) {
                    println!("{hint}");
                }
                continue;
            }
            Command::Expand(row) => ViewerAction::ToggleRow(row),
            Command::Filter { row, cell } => ViewerAction::ClickFilter { row, cell },
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        };

        if tx.send(action).is_err() {
            return;
        }
    }

    let _ = tx.send(ViewerAction::Shutdown);
}
