//! Localized rendering of the creation timestamp

use super::{NaturalOptions, TimeZoneMode};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::{Display, Write};

/// en-US style, e.g. `1/1/2025, 12:00:00 AM`
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// ISO-8601 forms carrying an explicit offset, beyond strict RFC 3339 (`+0000`, minutes only).
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// ISO-8601 date-times without an offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Render an ISO-8601 timestamp for prose.
///
/// A timestamp that cannot be parsed is returned unchanged. An invalid pattern falls back to
/// [`DEFAULT_TIMESTAMP_PATTERN`].
pub fn localize_timestamp(raw: &str, options: &NaturalOptions) -> String {
    let Some(parsed) = parse_timestamp(raw, options.time_zone) else {
        tracing::warn!(timestamp = raw, "unparseable timestamp, rendering verbatim");
        return raw.to_string();
    };

    let pattern = if is_valid_pattern(&options.timestamp_pattern) {
        options.timestamp_pattern.as_str()
    } else {
        tracing::warn!(
            pattern = %options.timestamp_pattern,
            "invalid timestamp pattern, using default"
        );
        DEFAULT_TIMESTAMP_PATTERN
    };

    let rendered = match options.time_zone {
        TimeZoneMode::Utc => render(parsed.with_timezone(&Utc).format(pattern)),
        TimeZoneMode::Local => render(parsed.with_timezone(&Local).format(pattern)),
    };
    rendered.unwrap_or_else(|| raw.to_string())
}

/// Read an ISO-8601 timestamp.
///
/// Date-times without an offset are wall-clock times in the presentation zone. Date-only forms
/// are read as midnight UTC.
fn parse_timestamp(raw: &str, zone: TimeZoneMode) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    {
        return Some(dt);
    }
    if let Some(utc) = raw.strip_suffix(['Z', 'z']) {
        return parse_naive(utc).map(|naive| naive.and_utc().fixed_offset());
    }
    if let Some(naive) = parse_naive(raw) {
        return match zone {
            TimeZoneMode::Utc => Some(naive.and_utc().fixed_offset()),
            TimeZoneMode::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
        };
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn render(formatted: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}
