//! Shared types for barcode label printing
//!
//! Movement-line models read from the barcode UI, the print payload sent
//! to the backend, and the response/envelope types that come back.
//! No I/O lives here.

pub mod models;
pub mod print;
pub mod rpc;
pub mod serde_helpers;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{DateValue, IsoDate, LineId, LotSerial, MovementLine, Product, TrackingMode};
pub use print::{PRINT_ROUTE, PrintPayload, PrintResponse, PrinterConfig, ProductData};
