use crate::event::RawMessage;
use crate::feed::sse::{DEFAULT_EVENT_TYPE, SseDecoder, SseFrame};
use crate::feed::{PushStream, PushTransport, TransportError, TransportEvent};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

pub const EVENT_STREAM_MIME: &str = "text/event-stream";
pub const LAST_EVENT_ID_HEADER: &str = "Last-Event-ID";
pub const DEFAULT_RETRY: Duration = Duration::from_millis(3000);

type Body = BoxStream<'static, reqwest::Result<Bytes>>;

/// Opens [`SseStream`]s with a shared HTTP client.
#[derive(Debug, Clone)]
pub struct SseTransport {
    client: reqwest::Client,
    retry: Duration,
}

impl SseTransport {
    pub fn new(client: reqwest::Client, retry: Duration) -> Self {
        Self { client, retry }
    }

    pub fn with_connect_timeout(
        connect_timeout: Duration,
        retry: Duration,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self::new(client, retry))
    }
}

impl Default for SseTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new(), DEFAULT_RETRY)
    }
}

impl PushTransport for SseTransport {
    fn open(&self, url: Url) -> Result<Box<dyn PushStream>, TransportError> {
        Ok(Box::new(SseStream::new(self.client.clone(), url, self.retry)))
    }
}

/// A self-reconnecting event stream.
///
/// Connection failures, read errors and a body that ends are reported as
/// errors and followed by a reconnect after the retry delay. A non-2xx
/// status or a wrong content type ends the stream.
pub struct SseStream {
    client: reqwest::Client,
    url: Url,
    retry: Duration,
    decoder: SseDecoder,
    body: Option<Body>,
    pending: VecDeque<TransportEvent>,
    /// Earliest moment of the next connect attempt. Survives a dropped
    /// `next_event` future so the wait is never restarted.
    reconnect_at: Option<Instant>,
    closed: bool,
}

impl SseStream {
    pub fn new(client: reqwest::Client, url: Url, retry: Duration) -> Self {
        Self {
            client,
            url,
            retry,
            decoder: SseDecoder::new(),
            body: None,
            pending: VecDeque::new(),
            reconnect_at: None,
            closed: false,
        }
    }

    fn accept(&mut self, chunk: &[u8]) {
        for frame in self.decoder.feed(chunk) {
            match frame {
                SseFrame::Retry(delay) => {
                    tracing::debug!(retry_ms = delay.as_millis() as u64, "server set retry delay");
                    self.retry = delay;
                }
                SseFrame::Event(event) if event.event_type == DEFAULT_EVENT_TYPE => {
                    self.pending
                        .push_back(TransportEvent::Message(RawMessage(event.data)));
                }
                SseFrame::Event(event) => {
                    tracing::debug!(event_type = %event.event_type, "ignoring named event");
                }
            }
        }
    }

    fn schedule_reconnect(&mut self) {
        self.reconnect_at = Some(Instant::now() + self.retry);
    }

    fn lose_body(&mut self, error: TransportError) -> TransportEvent {
        self.body = None;
        self.schedule_reconnect();
        TransportEvent::Error(error)
    }
}

#[async_trait]
impl PushStream for SseStream {
    async fn next_event(&mut self) -> Option<TransportEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.closed {
                return None;
            }

            let Some(body) = self.body.as_mut() else {
                if let Some(deadline) = self.reconnect_at {
                    tokio::time::sleep_until(deadline).await;
                }
                let last_event_id = self.decoder.last_event_id().map(str::to_string);
                match connect(self.client.clone(), self.url.clone(), last_event_id).await {
                    Ok(body) => {
                        self.decoder.reset();
                        self.body = Some(body);
                        self.reconnect_at = None;
                        return Some(TransportEvent::Open);
                    }
                    Err(e) if e.is_fatal() => {
                        self.closed = true;
                        return Some(TransportEvent::Error(e));
                    }
                    Err(e) => {
                        self.schedule_reconnect();
                        return Some(TransportEvent::Error(e));
                    }
                }
            };

            match body.next().await {
                Some(Ok(chunk)) => self.accept(&chunk),
                Some(Err(e)) => return Some(self.lose_body(TransportError::Read(e))),
                None => return Some(self.lose_body(TransportError::Eof)),
            }
        }
    }

    fn close(&mut self) {
        self.closed = true;
        self.body = None;
        self.reconnect_at = None;
        self.pending.clear();
    }
}

async fn connect(
    client: reqwest::Client,
    url: Url,
    last_event_id: Option<String>,
) -> Result<Body, TransportError> {
    let mut request = client
        .get(url.clone())
        .header(ACCEPT, EVENT_STREAM_MIME)
        .header(CACHE_CONTROL, "no-cache");
    if let Some(id) = last_event_id {
        request = request.header(LAST_EVENT_ID_HEADER, id);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(source) => return Err(TransportError::Connect { url, source }),
    };

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url,
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if mime != EVENT_STREAM_MIME {
        return Err(TransportError::ContentType { url, content_type });
    }

    Ok(response.bytes_stream().boxed())
}
