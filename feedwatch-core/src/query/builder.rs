use crate::query::{FilterSource, Query};
use chrono::{Local, NaiveDateTime, TimeZone};

/// Input format of the date-time pickers.
pub const PICKER_FORMAT: &str = "%Y/%m/%d %H:%M";

/// What an untouched masked picker reports.
pub const BLANK_MASK: &str = "____/__/__ __:__";

pub fn build_query(inputs: &impl FilterSource) -> Query {
    Query {
        service: read_identifier(&inputs.service_text()),
        version: read_identifier(&inputs.version_text()),
        from: read_timestamp(&inputs.start_text()),
        to: read_timestamp(&inputs.end_text()),
    }
}

/// Strips every whitespace character; nothing left means unconstrained.
pub fn read_identifier(text: &str) -> Option<String> {
    let clean: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.is_empty() { None } else { Some(clean) }
}

/// Picker text in local time to microseconds since epoch.
pub fn read_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() || text == BLANK_MASK {
        return None;
    }

    let naive = match NaiveDateTime::parse_from_str(text, PICKER_FORMAT) {
        Ok(naive) => naive,
        Err(e) => {
            tracing::debug!(input = text, error = %e, "unreadable timestamp filter");
            return None;
        }
    };

    // Local times skipped by a DST jump have no instant.
    let local = Local.from_local_datetime(&naive).earliest()?;
    local.timestamp_millis().checked_mul(1000)
}

/// Picker text re-rendered with `format`, used for the min/max date hints
/// between the start and end pickers.
pub fn date_hint(text: &str, format: &str) -> Option<String> {
    let micros = read_timestamp(text)?;
    let local = Local.timestamp_millis_opt(micros / 1000).single()?;
    Some(local.format(format).to_string())
}
