//! Client configuration

use std::str::FromStr;

use shared::PRINT_ROUTE;

use crate::error::ClientError;

/// How the print payload travels on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Envelope {
    /// Payload is the request body, `{ok, message}` is the response body
    #[default]
    Plain,
    /// Payload goes in `params` of a JSON-RPC call, answer comes back in `result`
    JsonRpc,
}

impl FromStr for Envelope {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "json" => Ok(Self::Plain),
            "jsonrpc" | "json-rpc" => Ok(Self::JsonRpc),
            other => Err(ClientError::Config(format!("Unknown envelope: {}", other))),
        }
    }
}

/// Client configuration for connecting to the print backend
///
/// # Environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | LABEL_PRINT_BASE_URL | http://localhost:8069 |
/// | LABEL_PRINT_TIMEOUT | 30 (seconds) |
/// | LABEL_PRINT_SESSION_ID | - |
/// | LABEL_PRINT_TOKEN | - |
/// | LABEL_PRINT_ENVELOPE | plain |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8069")
    pub base_url: String,

    /// Route of the print endpoint
    pub print_path: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Web session id, sent as the `session_id` cookie
    pub session_id: Option<String>,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Wire envelope
    pub envelope: Envelope,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            print_path: PRINT_ROUTE.to_string(),
            timeout: 30,
            session_id: None,
            token: None,
            envelope: Envelope::Plain,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("LABEL_PRINT_BASE_URL").unwrap_or_else(|_| "http://localhost:8069".into()),
        );
        config.timeout = std::env::var("LABEL_PRINT_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);
        config.session_id = std::env::var("LABEL_PRINT_SESSION_ID").ok().filter(|s| !s.is_empty());
        config.token = std::env::var("LABEL_PRINT_TOKEN").ok().filter(|s| !s.is_empty());
        config.envelope = std::env::var("LABEL_PRINT_ENVELOPE")
            .ok()
            .and_then(|e| e.parse().ok())
            .unwrap_or_default();
        config
    }

    /// Set the print route
    pub fn with_print_path(mut self, path: impl Into<String>) -> Self {
        self.print_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the web session id
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the wire envelope
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Full URL of the print endpoint
    pub fn print_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.print_path.trim_start_matches('/')
        )
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> Result<super::NetworkHttpClient, ClientError> {
        super::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8069")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_url_joins_without_double_slash() {
        let config = ClientConfig::new("http://erp.local:8069/");
        assert_eq!(config.print_url(), "http://erp.local:8069/barcode_label_print/print");

        let config = ClientConfig::new("http://erp.local").with_print_path("labels/print");
        assert_eq!(config.print_url(), "http://erp.local/labels/print");
    }

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::default()
            .with_timeout(5)
            .with_session("abc")
            .with_envelope(Envelope::JsonRpc);
        assert_eq!(config.timeout, 5);
        assert_eq!(config.session_id.as_deref(), Some("abc"));
        assert!(config.token.is_none());
        assert_eq!(config.envelope, Envelope::JsonRpc);
    }

    #[test]
    fn test_envelope_from_str() {
        assert_eq!("plain".parse::<Envelope>().unwrap(), Envelope::Plain);
        assert_eq!("JSONRPC".parse::<Envelope>().unwrap(), Envelope::JsonRpc);
        assert!("xml".parse::<Envelope>().is_err());
    }
}
