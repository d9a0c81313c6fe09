use crate::classify::{Classified, ControlSignal, RowId, classify};
use crate::event::{ParseOutcome, RawMessage, parse};
use crate::feed::{FeedError, FeedManager, PushTransport};
use crate::query::{FilterSource, build_query};
use crate::sink::{FilterCell, FilterTarget, RenderSink, RowHandlers};
use tokio::sync::mpsc;

/// User input routed into a running viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    /// Re-read the filter inputs and reconnect.
    Search,
    FilterBy(FilterTarget),
    /// A row's service or version cell was clicked.
    ClickFilter { row: RowId, cell: FilterCell },
    ToggleRow(RowId),
    Shutdown,
}

/// What a single inbound message turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    Skipped,
    Dropped,
    Rendered(RowId),
    Control(ControlSignal),
}

/// Wires filter inputs, the feed connection and a rendering sink together.
pub struct FeedViewer<T, S, F> {
    manager: FeedManager<T>,
    sink: S,
    form: F,
}

impl<T, S, F> FeedViewer<T, S, F>
where
    T: PushTransport,
    S: RenderSink,
    F: FilterSource,
{
    pub fn new(manager: FeedManager<T>, sink: S, form: F) -> Self {
        Self {
            manager,
            sink,
            form,
        }
    }

    pub fn manager(&self) -> &FeedManager<T> {
        &self.manager
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// First connection on startup; the list is left as is.
    pub fn init(&mut self) -> Result<(), FeedError> {
        self.read_feed()
    }

    /// Clear the list, show the loading indicator and reconnect with the
    /// current filter inputs.
    pub fn search(&mut self) -> Result<(), FeedError> {
        self.sink.clear();
        self.sink.set_loading(true);
        self.read_feed()
    }

    pub fn filter_by(&mut self, target: &FilterTarget) -> Result<(), FeedError> {
        self.form.set_service_text(&target.service);
        self.form
            .set_version_text(target.version.as_deref().unwrap_or_default());
        self.search()
    }

    fn read_feed(&mut self) -> Result<(), FeedError> {
        let query = build_query(&self.form);
        self.manager.read_feed(&query)
    }

    /// Parse, classify and render one message. Never fails: anything wrong
    /// with the message is logged and the message dropped.
    pub fn handle_message(&mut self, raw: &RawMessage) -> Handled {
        self.sink.set_loading(false);

        let event = match parse(raw) {
            Ok(event) => event,
            Err(ParseOutcome::Skip) => return Handled::Skipped,
            Err(ParseOutcome::Error(e)) => {
                tracing::warn!(error = %e, "dropping feed message");
                return Handled::Dropped;
            }
        };

        match classify(event) {
            Classified::Control(signal) => {
                if self.sink.is_empty() {
                    self.sink.show_placeholder();
                }
                if signal == ControlSignal::Close {
                    tracing::info!("server closed the feed");
                    self.manager.close();
                }
                Handled::Control(signal)
            }
            Classified::Display(row) => {
                let row_id = row.row_id.clone();
                let handlers = RowHandlers::for_row(&row);
                tracing::debug!(
                    row = %row_id,
                    service = %row.service,
                    kind = %row.formatted_type,
                    "rendering event"
                );
                self.sink.prepend(row);
                self.sink.attach_row_handlers(&row_id, handlers);
                Handled::Rendered(row_id)
            }
        }
    }

    /// Wait for the next message and handle it. `None` once the connection
    /// is closed.
    pub async fn pump(&mut self) -> Option<Handled> {
        let raw = self.manager.next_message().await?;
        Some(self.handle_message(&raw))
    }

    pub fn apply(&mut self, action: ViewerAction) -> Result<(), FeedError> {
        match action {
            ViewerAction::Search => self.search(),
            ViewerAction::FilterBy(target) => self.filter_by(&target),
            ViewerAction::ClickFilter { row, cell } => {
                match self.sink.filter_click(&row, cell) {
                    Some(target) => self.filter_by(&target),
                    None => {
                        tracing::debug!(row = %row, "filter click on unknown row");
                        Ok(())
                    }
                }
            }
            ViewerAction::ToggleRow(row) => {
                if self.sink.toggle_row(&row).is_none() {
                    tracing::debug!(row = %row, "row has no detail panel");
                }
                Ok(())
            }
            ViewerAction::Shutdown => {
                self.shutdown();
                Ok(())
            }
        }
    }

    /// Teardown: close the connection, open nothing new.
    pub fn shutdown(&mut self) {
        self.manager.close();
    }

    /// Connect, then process messages and actions one at a time until
    /// `Shutdown` or the action channel closes.
    pub async fn run(&mut self, mut actions: mpsc::UnboundedReceiver<ViewerAction>) {
        if let Err(e) = self.init() {
            tracing::error!(error = %e, "failed to open feed");
        }

        loop {
            tokio::select! {
                action = actions.recv() => match action {
                    None | Some(ViewerAction::Shutdown) => break,
                    Some(action) => {
                        if let Err(e) = self.apply(action) {
                            tracing::error!(error = %e, "feed action failed");
                        }
                    }
                },
                raw = self.manager.next_message(), if self.manager.is_active() => {
                    if let Some(raw) = raw {
                        self.handle_message(&raw);
                    }
                }
            }
        }

        self.shutdown();
    }
}
