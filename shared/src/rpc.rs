//! JSON-RPC envelope used by the backend's "json" routes
//!
//! Request: `{"jsonrpc": "2.0", "method": "call", "id": n, "params": {...}}`
//! Response: `{"jsonrpc": "2.0", "id": n, "result": ...}` or `{"error": {...}}`

use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing JSON-RPC call wrapping a request body
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub id: u64,
    pub params: &'a P,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn call(id: u64, params: &'a P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: "call",
            id,
            params,
        }
    }
}

/// Incoming JSON-RPC reply
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// Server-side exception reported through the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<JsonRpcErrorData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcErrorData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub debug: Option<String>,
}

impl JsonRpcError {
    /// Most specific human-readable reason: `data.message`, else `message`
    pub fn reason(&self) -> String {
        self.data
            .as_ref()
            .and_then(|d| d.message.as_deref())
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.message)
            .to_string()
    }
}
