//! Date fields sent either as `YYYY-MM-DD` or as a full RFC 3339 timestamp

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer};

/// Calendar date from `2024-05-02` or `2024-05-02T03:00:00.000Z`.
/// A timestamp keeps the date as written, in its own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// `deserialize_with` helper for optional date fields; pair it with `#[serde(default)]`
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date '{}'", raw))),
    }
}
