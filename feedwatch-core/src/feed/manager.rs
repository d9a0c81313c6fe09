use crate::event::RawMessage;
use crate::feed::{
    ConnectionGuard, ConnectionHandle, ConnectionSlot, FeedError, PushTransport, TransportEvent,
};
use crate::query::{Query, build_url};
use std::sync::Arc;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Closed,
    Opening,
    Open,
}

/// Where the feed lives: server origin, feed path and the page's own query
/// string that filter parameters are layered over.
#[derive(Debug, Clone)]
pub struct FeedEndpoint {
    pub origin: Url,
    pub path: String,
    pub search: String,
}

impl FeedEndpoint {
    pub fn new(origin: Url, path: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            origin,
            path: path.into(),
            search: search.into(),
        }
    }

    pub fn url_for(&self, query: &Query) -> Result<Url, FeedError> {
        let relative = build_url(&self.path, &self.search, query);
        self.origin
            .join(&relative)
            .map_err(|source| FeedError::InvalidUrl {
                url: relative,
                source,
            })
    }
}

pub struct FeedManager<T> {
    transport: T,
    endpoint: FeedEndpoint,
    slot: Arc<ConnectionSlot>,
    active: Option<ConnectionHandle>,
    state: ConnectionState,
    opened: u64,
}

impl<T: PushTransport> FeedManager<T> {
    pub fn new(transport: T, endpoint: FeedEndpoint) -> Self {
        Self {
            transport,
            endpoint,
            slot: Arc::new(ConnectionSlot::new()),
            active: None,
            state: ConnectionState::Closed,
            opened: 0,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Open
    }

    /// A connection exists, whether or not the server accepted it yet.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_url(&self) -> Option<&Url> {
        self.active.as_ref().map(ConnectionHandle::url)
    }

    /// Live connections as counted by the slot.
    pub fn live_connections(&self) -> usize {
        self.slot.active()
    }

    /// Close whatever is open, then connect with `query`.
    pub fn read_feed(&mut self, query: &Query) -> Result<(), FeedError> {
        let url = self.endpoint.url_for(query)?;

        self.close();

        let guard = ConnectionGuard::acquire(&self.slot).ok_or(FeedError::SlotBusy)?;
        let stream = self.transport.open(url.clone())?;

        self.opened += 1;
        tracing::debug!(connection = self.opened, url = %url, "opening feed");

        self.active = Some(ConnectionHandle::new(self.opened, url, stream, guard));
        self.state = ConnectionState::Opening;
        Ok(())
    }

    /// Safe to call in any state, including with nothing open.
    pub fn close(&mut self) {
        if let Some(handle) = self.active.take() {
            tracing::info!(connection = handle.id(), url = %handle.url(), "closing source");
            handle.close();
        }
        self.state = ConnectionState::Closed;
    }

    /// Next message from the active connection.
    ///
    /// Open signals and transport errors are logged here and never returned.
    /// `None` when nothing is open or the stream ended for good.
    pub async fn next_message(&mut self) -> Option<RawMessage> {
        loop {
            let handle = self.active.as_mut()?;
            match handle.next_event().await {
                Some(TransportEvent::Open) => {
                    tracing::info!(connection = handle.id(), url = %handle.url(), "feed open");
                    self.state = ConnectionState::Open;
                }
                Some(TransportEvent::Message(raw)) => return Some(raw),
                Some(TransportEvent::Error(e)) => {
                    tracing::warn!(connection = handle.id(), error = %e, "feed transport error");
                }
                None => {
                    tracing::warn!(connection = handle.id(), "feed stream gave up");
                    self.close();
                    return None;
                }
            }
        }
    }
}
