//! Product Model

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{blank_as_none, false_as_none};

/// How a product's units are identified
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// Untracked
    #[default]
    None,
    /// Batch tracked
    Lot,
    /// Every unit is unique
    Serial,
}

impl TrackingMode {
    /// Normalize a raw tracking value from the host.
    ///
    /// Case-insensitive; absent or unrecognized values fall back to `None`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("lot") => Self::Lot,
            Some("serial") => Self::Serial,
            _ => Self::None,
        }
    }

    /// Whether a lot/serial number is meaningful for this mode
    pub fn is_tracked(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Product as seen on a movement line
///
/// Field names follow the host record so it can be deserialized as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, deserialize_with = "false_as_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub display_name: Option<String>,
    /// Short name, used when no display name is present
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub barcode: Option<String>,
    /// Internal reference
    #[serde(default, deserialize_with = "blank_as_none")]
    pub default_code: Option<String>,
    /// Sales price (current field name)
    #[serde(default, deserialize_with = "false_as_none")]
    pub lst_price: Option<f64>,
    /// Sales price (legacy field name)
    #[serde(default, deserialize_with = "false_as_none")]
    pub list_price: Option<f64>,
    /// Raw tracking value (`none` | `lot` | `serial`), see [`Product::tracking_mode`]
    #[serde(default, deserialize_with = "false_as_none")]
    pub tracking: Option<String>,
}

impl Product {
    pub fn tracking_mode(&self) -> TrackingMode {
        TrackingMode::from_raw(self.tracking.as_deref())
    }
}
