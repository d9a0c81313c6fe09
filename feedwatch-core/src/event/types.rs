use serde_json::Value;

/// Text payload of a single push message, exactly as the transport delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage(pub String);

impl RawMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RawMessage {
    fn from(s: String) -> Self {
        RawMessage(s)
    }
}

impl From<&str> for RawMessage {
    fn from(s: &str) -> Self {
        RawMessage(s.to_owned())
    }
}

/// An inbound event with every optional field resolved.
///
/// Invariants:
/// - No field is ever absent: missing and `null` fields are empty strings.
/// - `structured_payload` is `Some` only when `data` decoded to an object or array.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub service: String,
    pub version: String,
    pub kind: String,
    pub timestamp_raw: String,
    pub data_payload: String,
    pub message: String,
    pub user: String,
    pub structured_payload: Option<Value>,
}

impl NormalizedEvent {
    pub fn is_structured_payload(&self) -> bool {
        self.structured_payload.is_some()
    }
}
