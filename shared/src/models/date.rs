//! Date values carried by movement lines and lot/serial records

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server datetime format used by the barcode backend (always UTC)
pub const SERVER_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Anything that can render itself as an ISO-8601 string
pub trait IsoDate {
    fn to_iso_string(&self) -> String;
}

/// Date-like value as received from the host UI
///
/// Strings coming from the host are kept verbatim; structured values are
/// built explicitly with [`DateValue::parse`] or the `From` impls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    /// Already formatted by the host, passed through unchanged
    Text(String),
}

impl DateValue {
    /// Parse a host string into a structured value.
    ///
    /// Tries RFC 3339, then `YYYY-MM-DD`, then the server datetime format
    /// (read as UTC). Anything else stays as [`DateValue::Text`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::DateTime(dt);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::Date(date);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, SERVER_DATETIME_FORMAT) {
            return Self::DateTime(naive.and_utc().fixed_offset());
        }
        Self::Text(raw.to_string())
    }

    /// Host text that carries no date (empty or whitespace only)
    pub fn is_blank(&self) -> bool {
        matches!(self, DateValue::Text(text) if text.trim().is_empty())
    }
}

impl IsoDate for DateValue {
    fn to_iso_string(&self) -> String {
        match self {
            DateValue::Date(date) => date.to_iso_string(),
            DateValue::DateTime(dt) => dt.to_iso_string(),
            DateValue::Text(text) => text.clone(),
        }
    }
}

impl IsoDate for NaiveDate {
    fn to_iso_string(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl IsoDate for DateTime<FixedOffset> {
    fn to_iso_string(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl IsoDate for DateTime<Utc> {
    fn to_iso_string(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for DateValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt.fixed_offset())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DateValue::Text)
    }
}
