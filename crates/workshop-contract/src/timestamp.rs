//! Timestamp formats used on the wire.
//!
//! The provider answers with an offset-aware timestamp at seconds precision
//! (`2024-01-01T10:00:00+10:00`). The `validDate` query parameter is a local
//! date-time without an offset.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Canonical offset format: seconds precision, full `±HH:MM` offset.
pub const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Accepted shapes for a local date-time: seconds with optional fraction, or
/// minutes only.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn format_offset(dt: &DateTime<FixedOffset>) -> String {
    dt.format(OFFSET_FORMAT).to_string()
}

pub fn parse_offset(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(value, OFFSET_FORMAT)
}

/// Parse an ISO-8601 local date-time. Inputs carrying an offset are rejected.
pub fn parse_local(value: &str) -> Option<NaiveDateTime> {
    if !has_local_shape(value) {
        return None;
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// `YYYY-MM-DDTHH:MM[:SS[.F]]` with two-digit fields, seconds 00-59 and a
/// fraction of 1 to 9 digits. chrono alone accepts single-digit fields,
/// leading whitespace, a signed year and leap seconds.
fn has_local_shape(value: &str) -> bool {
    let b = value.as_bytes();
    let digits = |range: std::ops::Range<usize>| b[range].iter().all(u8::is_ascii_digit);

    if b.len() < 16
        || !digits(0..4)
        || b[4] != b'-'
        || !digits(5..7)
        || b[7] != b'-'
        || !digits(8..10)
        || b[10] != b'T'
        || !digits(11..13)
        || b[13] != b':'
        || !digits(14..16)
    {
        return false;
    }
    match b.len() {
        16 => return true,
        17 | 18 => return false,
        _ => {}
    }
    if b[16] != b':' || !digits(17..19) || b[17] > b'5' {
        return false;
    }
    match &b[19..] {
        [] => true,
        [b'.', fraction @ ..] => {
            (1..=9).contains(&fraction.len()) && fraction.iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// Render a local date-time the way the consumer sends it.
pub fn format_local(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// `serde(with = ...)` adapter for the canonical offset format.
pub fn serialize<S>(dt: &DateTime<FixedOffset>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format_offset(dt))
}

pub fn deserialize<'de, D>(d: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    parse_offset(&raw).map_err(serde::de::Error::custom)
}
