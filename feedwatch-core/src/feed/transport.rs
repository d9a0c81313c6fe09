use crate::event::RawMessage;
use crate::feed::TransportError;
use async_trait::async_trait;
use url::Url;

#[derive(Debug)]
pub enum TransportEvent {
    /// The connection (or a reconnection) was established.
    Open,
    Message(RawMessage),
    /// Logged by the manager; the stream keeps going unless it returns `None` next.
    Error(TransportError),
}

/// One live push connection.
#[async_trait]
pub trait PushStream: Send {
    /// Next event, or `None` once the stream is closed for good.
    ///
    /// Must be cancel-safe: dropping the future loses no delivered message.
    async fn next_event(&mut self) -> Option<TransportEvent>;

    /// Release the connection. Idempotent.
    fn close(&mut self);
}

pub trait PushTransport: Send + Sync {
    /// Start a connection to `url`. The stream reports [`TransportEvent::Open`]
    /// once the server accepts it.
    fn open(&self, url: Url) -> Result<Box<dyn PushStream>, TransportError>;
}
