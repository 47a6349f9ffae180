// label-client/src/http.rs
// HTTP client - network transport to the print backend

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION, COOKIE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::rpc::{JsonRpcRequest, JsonRpcResponse};
use shared::{PrintPayload, PrintResponse};
use tracing::{debug, instrument};

use crate::{ClientConfig, ClientError, ClientResult, Envelope};

/// Anything able to deliver one print payload and return the backend's answer
///
/// Transport problems (network, HTTP status, undecodable body) are errors.
/// A decoded `{ok: false}` answer is *not* an error at this level.
#[async_trait]
pub trait PrintTransport: Send + Sync {
    async fn print(&self, payload: &PrintPayload) -> ClientResult<PrintResponse>;
}

/// HTTP client for the label print backend
#[derive(Debug)]
pub struct NetworkHttpClient {
    client: Client,
    print_url: String,
    session_id: Option<String>,
    token: Option<String>,
    envelope: Envelope,
    next_id: AtomicU64,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is empty".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            print_url: config.print_url(),
            session_id: config.session_id.clone(),
            token: config.token.clone(),
            envelope: config.envelope,
            next_id: AtomicU64::new(1),
        })
    }

    /// Full URL print requests are posted to
    pub fn print_url(&self) -> &str {
        &self.print_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn cookie_header(&self) -> Option<String> {
        self.session_id.as_ref().map(|s| format!("session_id={}", s))
    }

    /// POST a JSON body to `url` and decode the JSON answer
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut req = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(AUTHORIZATION, auth);
        }
        if let Some(cookie) = self.cookie_header() {
            req = req.header(COOKIE, cookie);
        }
        let response = req.send().await.map_err(ClientError::from_transport)?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await.map_err(ClientError::from_transport)?;

        if !status.is_success() {
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(text)),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Status {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }

        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    async fn print_jsonrpc(&self, payload: &PrintPayload) -> ClientResult<PrintResponse> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope: JsonRpcResponse<PrintResponse> = self
            .post(&self.print_url, &JsonRpcRequest::call(id, payload))
            .await?;

        if let Some(error) = envelope.error {
            return Err(ClientError::Rpc(error.reason()));
        }
        envelope
            .result
            .ok_or_else(|| ClientError::InvalidResponse("Missing result in JSON-RPC reply".into()))
    }
}

#[async_trait]
impl PrintTransport for NetworkHttpClient {
    #[instrument(skip(self, payload), fields(url = %self.print_url, quantity = payload.quantity.get()))]
    async fn print(&self, payload: &PrintPayload) -> ClientResult<PrintResponse> {
        debug!(envelope = ?self.envelope, "Posting print request");
        match self.envelope {
            Envelope::Plain => self.post(&self.print_url, payload).await,
            Envelope::JsonRpc => self.print_jsonrpc(payload).await,
        }
    }
}
