use chrono::{DateTime, Local};

/// Display format for event timestamps, e.g. `14:03:27 05/Mar/24`.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%H:%M:%S %d/%b/%y";

/// `DeploymentFailed` becomes `Deployment failed`.
///
/// Splits before every ASCII uppercase letter, lower-cases the whole
/// string and capitalizes only its first character.
pub fn format_event_type(kind: &str) -> String {
    let mut spaced = String::with_capacity(kind.len() + 4);
    for (i, ch) in kind.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.extend(ch.to_lowercase());
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a microsecond epoch string in local time.
///
/// Empty, non-numeric and out-of-range values are returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let Some(millis) = micros_to_millis(raw) else {
        return raw.to_string();
    };

    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format(TIMESTAMP_DISPLAY_FORMAT)
            .to_string(),
        None => raw.to_string(),
    }
}

fn micros_to_millis(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(micros) = trimmed.parse::<i64>() {
        return Some(micros.div_euclid(1000));
    }

    // Exponent or fractional forms, e.g. "1.7e15".
    let micros = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let millis = (micros / 1000.0).floor();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    Some(millis as i64)
}
