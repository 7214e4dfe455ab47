//! Timestamp encoding for ledger records.
//!
//! Timestamps are naive local times. On disk they are ISO-8601 text
//! (`2025-11-01T09:00:00`); on display they are shortened to minutes.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Result, TrackerError};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats accepted when reading, tried in order.
const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp.
///
/// Accepts `T` or space as the date/time separator, optional seconds and
/// fractional seconds, and bare dates (midnight). RFC 3339 input with an
/// offset keeps its wall-clock time and drops the offset.
pub fn parse(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();

    for format in ACCEPTED_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    Err(TrackerError::InvalidTimestamp(value.to_string()))
}

/// Format a timestamp as ISO-8601 for persistence.
pub fn to_iso(value: &NaiveDateTime) -> String {
    value.format(ISO_FORMAT).to_string()
}

/// Format a timestamp for reports and listings (`YYYY-MM-DD HH:MM`).
pub fn to_display(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

/// Serde adapter for a required timestamp field.
pub mod iso {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_iso(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for an optional timestamp field.
///
/// `null` and the empty string both read as `None`.
pub mod iso_option {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&super::to_iso(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse(&raw).map(Some).map_err(de::Error::custom),
        }
    }
}
