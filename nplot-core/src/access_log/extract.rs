use crate::access_log::constants::{LINE_PATTERN, PROTOCOL_TOKEN, TIMESTAMP_FORMAT};
use crate::access_log::types::{ExtractError, ParsedRecord};
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINE_PATTERN).expect("access log pattern must compile"));

/// Reduces one raw access log line to its endpoint and timestamp.
///
/// Returns `NoMatch` when the line does not have the expected layout and
/// `BadTimestamp` when the bracketed date field cannot be parsed.
pub fn extract(line: &str) -> Result<ParsedRecord, ExtractError> {
    let caps = LINE.captures(line).ok_or(ExtractError::NoMatch)?;

    // Group 3 is the bracketed date, group 5 the request prefix.
    let (Some(date), Some(request)) = (caps.get(3), caps.get(5)) else {
        return Err(ExtractError::NoMatch);
    };

    let endpoint = normalize_endpoint(request.as_str()).ok_or(ExtractError::NoMatch)?;
    let timestamp = parse_timestamp(date.as_str())?;

    Ok(ParsedRecord {
        endpoint,
        timestamp,
    })
}

/// Strips the protocol token and keeps the first `/`-rooted token.
///
/// `"GET /widgets HTTP"` and `"get /widgets http"` both become `/widgets`; a
/// field without a method is kept as-is. A field with no path at all (a bare
/// `"GET "`) yields `None`.
pub(crate) fn normalize_endpoint(request: &str) -> Option<String> {
    request
        .replace(PROTOCOL_TOKEN, "")
        .split_whitespace()
        .find(|token| token.starts_with('/'))
        .map(str::to_string)
}

pub(crate) fn parse_timestamp(field: &str) -> Result<i64, ExtractError> {
    let raw = field.trim_start_matches('[').trim_end_matches(']');

    DateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|dt| dt.timestamp())
        .map_err(|_| ExtractError::BadTimestamp {
            raw: raw.to_string(),
        })
}
