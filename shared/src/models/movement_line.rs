//! Movement Line Model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::date::DateValue;
use super::product::Product;
use crate::serde_helpers::{blank_as_none, blank_date_as_none, false_as_none};

/// Identifier of a movement line in the host UI
///
/// Saved lines carry a numeric database id; lines created in the scanner
/// before saving carry a virtual string id. Both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for LineId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for LineId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(id) => Self::from(id),
            RawId::Text(id) => Self(id),
        })
    }
}

/// Lot or serial number record linked to a line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LotSerial {
    #[serde(default, deserialize_with = "false_as_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub expiration_date: Option<DateValue>,
    /// Best-before / use-by date
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub use_date: Option<DateValue>,
}

/// One row of a warehouse operation (pick, pack, receipt)
///
/// Owned by the host UI; the label printer only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovementLine {
    pub id: LineId,
    #[serde(rename = "product_id")]
    pub product: Product,
    /// Linked lot/serial record, if any
    #[serde(rename = "lot_id", default, deserialize_with = "false_as_none")]
    pub lot: Option<LotSerial>,
    /// Raw lot name typed on the line when no record is linked yet
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lot_name: Option<String>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub expiration_date: Option<DateValue>,
    #[serde(default)]
    pub quantity_done: f64,
    #[serde(default)]
    pub quantity_remaining: f64,
}

impl MovementLine {
    pub fn new(id: impl Into<LineId>, product: Product) -> Self {
        Self {
            id: id.into(),
            product,
            lot: None,
            lot_name: None,
            expiration_date: None,
            quantity_done: 0.0,
            quantity_remaining: 0.0,
        }
    }

    pub fn with_lot(mut self, lot: LotSerial) -> Self {
        self.lot = Some(lot);
        self
    }

    pub fn with_lot_name(mut self, name: impl Into<String>) -> Self {
        self.lot_name = Some(name.into());
        self
    }

    pub fn with_expiration_date(mut self, date: impl Into<DateValue>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    pub fn with_quantities(mut self, done: f64, remaining: f64) -> Self {
        self.quantity_done = done;
        self.quantity_remaining = remaining;
        self
    }
}
