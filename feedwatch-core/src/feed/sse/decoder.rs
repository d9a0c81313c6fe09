use std::time::Duration;

/// Event type the feed listens to; others are ignored.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// Ceiling on a single line and on one event's accumulated data.
pub const MAX_EVENT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event_type: String,
    pub data: String,
    /// Last event id seen on the stream at dispatch time.
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseFrame {
    Event(SseEvent),
    /// Server-requested reconnection delay.
    Retry(Duration),
}

/// Incremental `text/event-stream` line decoder.
///
/// Bytes may be split anywhere, including inside a `\r\n` pair or a UTF-8
/// sequence. An event still being assembled when the stream ends is dropped.
/// An event whose line or data outgrows the limit is discarded whole, up to
/// the blank line that ends it.
#[derive(Debug)]
pub struct SseDecoder {
    line: Vec<u8>,
    after_cr: bool,
    started: bool,
    data: String,
    event_type: String,
    last_event_id: Option<String>,
    limit: usize,
    line_overflow: bool,
    discarding: bool,
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self::with_limit(MAX_EVENT_BYTES)
    }
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            line: Vec::new(),
            after_cr: false,
            started: false,
            data: String::new(),
            event_type: String::new(),
            last_event_id: None,
            limit,
            line_overflow: false,
            discarding: false,
        }
    }

    /// Forget partial input for a new connection. The last event id survives.
    pub fn reset(&mut self) {
        self.line.clear();
        self.after_cr = false;
        self.started = false;
        self.data.clear();
        self.event_type.clear();
        self.line_overflow = false;
        self.discarding = false;
    }

    pub fn last_event_id(&self) -> Option<&str> {
        self.last_event_id.as_deref()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        let mut frames = Vec::new();

        for &byte in chunk {
            if self.after_cr {
                self.after_cr = false;
                if byte == b'\n' {
                    continue;
                }
            }

            match byte {
                b'\r' => {
                    self.after_cr = true;
                    self.end_line(&mut frames);
                }
                b'\n' => self.end_line(&mut frames),
                _ if self.line_overflow => {}
                other => {
                    self.line.push(other);
                    if self.line.len() > self.limit {
                        tracing::warn!(
                            limit = self.limit,
                            "event stream line too long, discarding event"
                        );
                        self.line.clear();
                        self.line_overflow = true;
                        self.discard_event();
                    }
                }
            }
        }

        frames
    }

    fn discard_event(&mut self) {
        self.discarding = true;
        self.data.clear();
        self.event_type.clear();
    }

    fn end_line(&mut self, frames: &mut Vec<SseFrame>) {
        if self.line_overflow {
            self.line_overflow = false;
            return;
        }
        let raw = std::mem::take(&mut self.line);
        let mut line = String::from_utf8_lossy(&raw).into_owned();

        if !self.started {
            self.started = true;
            if let Some(stripped) = line.strip_prefix('\u{feff}') {
                line = stripped.to_string();
            }
        }

        if line.is_empty() {
            if self.discarding {
                self.discarding = false;
                self.event_type.clear();
            } else {
                self.dispatch(frames);
            }
            return;
        }

        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line.as_str(), ""),
        };

        match field {
            "event" => self.event_type = value.to_string(),
            "data" if self.discarding => {}
            "data" => {
                if self.data.len() + value.len() + 1 > self.limit {
                    tracing::warn!(limit = self.limit, "event data too large, discarding event");
                    self.discard_event();
                    return;
                }
                self.data.push_str(value);
                self.data.push('\n');
            }
            "id" => {
                if !value.contains('\0') {
                    self.last_event_id = Some(value.to_string());
                }
            }
            "retry" => {
                if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(ms) = value.parse::<u64>() {
                        frames.push(SseFrame::Retry(Duration::from_millis(ms)));
                    }
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, frames: &mut Vec<SseFrame>) {
        let event_type = std::mem::take(&mut self.event_type);
        if self.data.is_empty() {
            return;
        }

        let mut data = std::mem::take(&mut self.data);
        if data.ends_with('\n') {
            data.pop();
        }

        frames.push(SseFrame::Event(SseEvent {
            event_type: if event_type.is_empty() {
                DEFAULT_EVENT_TYPE.to_string()
            } else {
                event_type
            },
            data,
            last_event_id: self.last_event_id.clone(),
        }));
    }
}
