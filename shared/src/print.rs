//! Print request/response wire types
//!
//! Shape of the JSON exchanged with the label print route.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::false_as_none;

/// Route of the label print endpoint on the backend
pub const PRINT_ROUTE: &str = "/barcode_label_print/print";

/// Normalized product description for one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,
    pub barcode: String,
    pub internal_reference: String,
    pub price: f64,
    /// Always serialized, `null` when the product is untracked
    pub lot_serial_number: Option<String>,
    /// ISO-8601 string or `null`
    pub expiration_date: Option<String>,
}

/// Printer configuration sent with the request
///
/// Always empty: the backend resolves the physical printer on its own.
/// Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {}

/// Body of a print request. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintPayload {
    pub product_data: ProductData,
    pub printer_config: PrinterConfig,
    pub quantity: NonZeroU32,
}

/// Backend answer to a print request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default, deserialize_with = "false_as_none")]
    pub message: Option<String>,
    /// Whatever the downstream print service returned, if forwarded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

impl PrintResponse {
    pub fn accepted() -> Self {
        Self {
            ok: Some(true),
            ..Default::default()
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: Some(false),
            message: Some(message.into()),
            result: None,
        }
    }

    /// Only an explicit `ok: true` counts as acceptance
    pub fn is_ok(&self) -> bool {
        self.ok == Some(true)
    }
}
