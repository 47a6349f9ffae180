//! Label Client - HTTP client for the label print backend
//!
//! Posts print payloads to the backend print route and decodes the
//! `{ok, message}` answer, either bare or inside a JSON-RPC envelope.

pub mod config;
pub mod error;
pub mod http;

pub use config::{ClientConfig, Envelope};
pub use error::{ClientError, ClientResult};
pub use http::{NetworkHttpClient, PrintTransport};

// Re-export shared wire types for convenience
pub use shared::{PrintPayload, PrintResponse};
