//! # label-print
//!
//! Label print request orchestration for the barcode scanning UI.
//!
//! ## Scope
//!
//! This crate decides WHAT to print and reports how it went:
//! - How many labels (operator override, else the line's quantities)
//! - The normalized product/lot/expiration payload
//! - Sending it to the backend and notifying the operator
//!
//! Label layout, printer selection and the physical job stay on the backend.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use label_client::ClientConfig;
//! use label_print::PrintRequestOrchestrator;
//!
//! let transport = Arc::new(ClientConfig::from_env().build_http_client()?);
//! let orchestrator = PrintRequestOrchestrator::new(lines, prompt, notifier, transport);
//!
//! orchestrator.set_label_quantity();      // operator types "3"
//! orchestrator.print_label().await;       // sends quantity 3
//! ```

mod dispatcher;
mod error;
mod host;
pub mod logger;
mod messages;
mod orchestrator;
mod payload;
mod quantity;

// Re-exports
pub use dispatcher::{DispatchState, PrintDispatcher};
pub use error::{LabelPrintError, LabelPrintResult};
pub use host::{LineAccessor, Notifier, QuantityPrompt, Severity};
pub use messages::LabelMessages;
pub use orchestrator::{PrintOutcome, PrintRequestOrchestrator, QuantityOutcome};
pub use payload::PayloadBuilder;
pub use quantity::{OverrideStore, QuantityResolver, parse_quantity_input};
