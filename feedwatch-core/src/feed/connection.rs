use crate::feed::{ConnectionGuard, PushStream, TransportEvent};
use std::fmt;
use url::Url;

/// Exclusive owner of one live push connection.
pub struct ConnectionHandle {
    id: u64,
    url: Url,
    stream: Box<dyn PushStream>,
    _guard: ConnectionGuard,
}

impl ConnectionHandle {
    pub(crate) fn new(
        id: u64,
        url: Url,
        stream: Box<dyn PushStream>,
        guard: ConnectionGuard,
    ) -> Self {
        Self {
            id,
            url,
            stream,
            _guard: guard,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn next_event(&mut self) -> Option<TransportEvent> {
        self.stream.next_event().await
    }

    /// Closes the transport; the slot place is released as the handle drops.
    pub fn close(mut self) {
        self.stream.close();
    }
}

impl fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("id", &self.id)
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
