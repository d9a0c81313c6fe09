use crate::event::RawMessage;
use crate::feed::{FeedEndpoint, PushStream, PushTransport, TransportError, TransportEvent};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;
use url::Url;

pub fn endpoint() -> FeedEndpoint {
    FeedEndpoint::new(Url::parse("http://feed.test:9000").unwrap(), "/feed", "")
}

pub fn msg(raw: &str) -> TransportEvent {
    TransportEvent::Message(RawMessage::from(raw))
}

#[derive(Default)]
struct Script {
    opened: Vec<Url>,
    feeds: Vec<Option<mpsc::UnboundedSender<TransportEvent>>>,
    preload: VecDeque<Vec<TransportEvent>>,
    live: usize,
    max_live: usize,
}

/// In-memory transport: each opened connection is fed from the test.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    /// Events delivered as soon as the next not-yet-opened connection opens.
    pub fn preload(&self, events: Vec<TransportEvent>) {
        self.lock().preload.push_back(events);
    }

    pub fn opened(&self) -> Vec<Url> {
        self.lock().opened.clone()
    }

    pub fn live(&self) -> usize {
        self.lock().live
    }

    pub fn max_live(&self) -> usize {
        self.lock().max_live
    }

    /// Deliver to the most recently opened connection.
    pub fn send(&self, event: TransportEvent) {
        let script = self.lock();
        if let Some(Some(tx)) = script.feeds.last() {
            let _ = tx.send(event);
        }
    }

    pub fn send_error(&self) {
        self.send(TransportEvent::Error(TransportError::Eof));
    }

    /// End the most recent connection for good.
    pub fn end(&self) {
        if let Some(feed) = self.lock().feeds.last_mut() {
            feed.take();
        }
    }
}

impl PushTransport for ScriptedTransport {
    fn open(&self, url: Url) -> Result<Box<dyn PushStream>, TransportError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut script = self.lock();

        if let Some(events) = script.preload.pop_front() {
            for event in events {
                let _ = tx.send(event);
            }
        }

        script.opened.push(url);
        script.feeds.push(Some(tx));
        script.live += 1;
        script.max_live = script.max_live.max(script.live);

        Ok(Box::new(ScriptedStream {
            rx,
            script: Arc::clone(&self.script),
            released: false,
        }))
    }
}

struct ScriptedStream {
    rx: mpsc::UnboundedReceiver<TransportEvent>,
    script: Arc<Mutex<Script>>,
    released: bool,
}

impl ScriptedStream {
    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.script.lock().unwrap().live -= 1;
        }
    }
}

#[async_trait]
impl PushStream for ScriptedStream {
    async fn next_event(&mut self) -> Option<TransportEvent> {
        if self.released {
            return None;
        }
        self.rx.recv().await
    }

    fn close(&mut self) {
        self.release();
    }
}

impl Drop for ScriptedStream {
    fn drop(&mut self) {
        self.release();
    }
}
