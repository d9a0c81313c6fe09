use crate::query::Query;
use url::form_urlencoded::byte_serialize;

/// Feed URL for `query`, layered over the page's own query string.
///
/// `current_search` is the query string the page was loaded with, with or
/// without its leading `?`.
pub fn build_url(base_url: &str, current_search: &str, query: &Query) -> String {
    let mut search = current_search.to_string();
    for (key, value) in query.params() {
        if let Some(value) = value {
            search = add_url_param(&search, key, &value);
        }
    }

    match search.trim().trim_start_matches('?') {
        "" => base_url.to_string(),
        body => format!("{base_url}?{body}"),
    }
}

/// Replaces the first `key` parameter in place, or appends one.
pub fn add_url_param(search: &str, key: &str, value: &str) -> String {
    let encoded: String = byte_serialize(value.as_bytes()).collect();
    let new_param = format!("{key}={encoded}");

    let body = search.strip_prefix('?').unwrap_or(search);
    if body.is_empty() {
        return format!("?{new_param}");
    }

    let mut replaced = false;
    let parts: Vec<&str> = body
        .split('&')
        .map(|part| {
            let name = part.split_once('=').map_or(part, |(k, _)| k);
            if !replaced && name == key {
                replaced = true;
                new_param.as_str()
            } else {
                part
            }
        })
        .collect();

    let mut out = format!("?{}", parts.join("&"));
    if !replaced {
        out.push('&');
        out.push_str(&new_param);
    }
    out
}
