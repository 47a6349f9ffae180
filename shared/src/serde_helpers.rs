//! Serde helpers for host records
//!
//! The barcode UI serializes empty relational and char fields as `false`
//! instead of `null`. These helpers fold that back into `Option::None`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::models::DateValue;

#[derive(Deserialize)]
#[serde(untagged)]
enum FalseOr<T> {
    Flag(bool),
    Value(T),
}

/// Deserialize `false`, `null` or a missing field as `None`.
///
/// Use together with `#[serde(default)]` so that absent fields are accepted.
pub fn false_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<FalseOr<T>>::deserialize(deserializer)? {
        None | Some(FalseOr::Flag(false)) => Ok(None),
        Some(FalseOr::Flag(true)) => Err(D::Error::custom("expected a value or false, found true")),
        Some(FalseOr::Value(value)) => Ok(Some(value)),
    }
}

/// Like [`false_as_none`], but also maps an empty or whitespace-only string to `None`.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(false_as_none::<D, String>(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Like [`false_as_none`] for dates; an empty or whitespace-only string is `None`.
pub fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<DateValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(false_as_none::<D, DateValue>(deserializer)?.filter(|date| !date.is_blank()))
}
