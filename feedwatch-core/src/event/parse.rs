use crate::event::{NormalizedEvent, RawMessage};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

/// Why a raw message did not produce an event.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Nothing to render (empty message, empty object, non-object JSON).
    Skip,
    Error(ParseError),
}

pub fn parse(raw: &RawMessage) -> Result<NormalizedEvent, ParseOutcome> {
    let text = raw.as_str();
    if text.trim().is_empty() {
        return Err(ParseOutcome::Skip);
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| ParseOutcome::Error(ParseError::MalformedPayload(e)))?;

    let Value::Object(obj) = value else {
        return Err(ParseOutcome::Skip);
    };
    if obj.is_empty() {
        return Err(ParseOutcome::Skip);
    }

    let structured_payload = match obj.get("data") {
        Some(v @ (Value::Object(_) | Value::Array(_))) => Some(v.clone()),
        _ => None,
    };

    Ok(NormalizedEvent {
        service: field(&obj, "service"),
        version: field(&obj, "version"),
        kind: field(&obj, "type"),
        timestamp_raw: field(&obj, "timestamp"),
        data_payload: field(&obj, "data"),
        message: field(&obj, "message"),
        user: field(&obj, "user"),
        structured_payload,
    })
}

/// Resolves one field on its own; a missing neighbour never affects it.
fn field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        // Numbers, booleans and nested structures keep their JSON text.
        Some(other) => other.to_string(),
    }
}
