//! Data models
//!
//! Records the barcode UI hands to the label printer: the movement line,
//! its product and its lot/serial record.

pub mod date;
pub mod movement_line;
pub mod product;

// Re-exports
pub use date::*;
pub use movement_line::*;
pub use product::*;
