//! Serde adapter for zone-less ISO-8601 date-times.
//!
//! Use with `#[serde(with = "petchat_core::local_datetime")]` on a
//! `NaiveDateTime` field. Values are written as `2024-01-01T10:00:00`, with a
//! fractional part only when the sub-second component is non-zero. Input also
//! accepts the minute-precision form `2024-01-01T10:00`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Render a date-time in wire format.
pub fn format(value: &NaiveDateTime) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// Parse a wire date-time, returning `None` when no accepted layout matches.
pub fn parse(input: &str) -> Option<NaiveDateTime> {
    [WIRE_FORMAT, MINUTE_FORMAT]
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(WIRE_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    parse(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "Invalid local date-time: '{s}'. Expected 'YYYY-MM-DDTHH:MM:SS'"
        ))
    })
}
