use crate::classify::{
    Classified, ControlSignal, DisplayEvent, RowId, extract_color, format_event_type,
    format_timestamp,
};
use crate::event::NormalizedEvent;
use rand::Rng;

const DETAILS_PLACEHOLDER: &str = "details...";

pub fn classify(event: NormalizedEvent) -> Classified {
    classify_with(event, &mut rand::rng())
}

/// Same as [`classify`] with a caller-supplied source for the row id.
pub fn classify_with<R: Rng + ?Sized>(event: NormalizedEvent, rng: &mut R) -> Classified {
    if let Some(signal) = ControlSignal::from_kind(&event.kind) {
        return Classified::Control(signal);
    }

    let color_source = if event.message.is_empty() {
        &event.data_payload
    } else {
        &event.message
    };
    let color = extract_color(color_source);

    let detail_text = detail_text(&event);
    let detail_body = event.structured_payload.as_ref().map(|payload| {
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
    });

    Classified::Display(DisplayEvent {
        row_id: RowId::random_with(rng),
        formatted_type: format_event_type(&event.kind),
        formatted_timestamp: format_timestamp(&event.timestamp_raw),
        color,
        detail_text,
        is_expandable: event.is_structured_payload(),
        detail_body,
        service: event.service,
        version: event.version,
        user: event.user,
    })
}

fn detail_text(event: &NormalizedEvent) -> String {
    if !event.message.is_empty() {
        event.message.clone()
    } else if !event.data_payload.is_empty() {
        DETAILS_PLACEHOLDER.to_string()
    } else {
        String::new()
    }
}
