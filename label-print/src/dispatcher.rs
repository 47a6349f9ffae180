//! Print dispatch
//!
//! Sends one payload to the backend, interprets the answer and tells the
//! operator how it went. One round trip, no retry, no queue.

use std::fmt;
use std::sync::Arc;

use label_client::PrintTransport;
use shared::{PrintPayload, PrintResponse};
use tracing::{Span, error, info, instrument};

use crate::error::{LabelPrintError, LabelPrintResult};
use crate::host::{Notifier, Severity};
use crate::messages::LabelMessages;

/// Lifecycle of a single dispatch
///
/// `Idle -> Sending -> Succeeded | Failed`. Each dispatch owns its state;
/// concurrent dispatches never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl DispatchState {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchState::Idle => "idle",
            DispatchState::Sending => "sending",
            DispatchState::Succeeded => "succeeded",
            DispatchState::Failed => "failed",
        }
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends payloads and reports the outcome to the operator
pub struct PrintDispatcher {
    transport: Arc<dyn PrintTransport>,
    notifier: Arc<dyn Notifier>,
    messages: Arc<LabelMessages>,
}

impl PrintDispatcher {
    pub fn new(
        transport: Arc<dyn PrintTransport>,
        notifier: Arc<dyn Notifier>,
        messages: Arc<LabelMessages>,
    ) -> Self {
        Self {
            transport,
            notifier,
            messages,
        }
    }

    /// Send `payload` and report the outcome
    ///
    /// The payload is consumed: it serves exactly one request. Failures are
    /// already notified and logged when this returns.
    #[instrument(skip(self, payload), fields(quantity = payload.quantity.get(), state = DispatchState::Idle.as_str()))]
    pub async fn dispatch(&self, payload: PrintPayload) -> LabelPrintResult<PrintResponse> {
        let span = Span::current();
        span.record("state", DispatchState::Sending.as_str());

        let result = match self.transport.print(&payload).await {
            Ok(response) if response.is_ok() => Ok(response),
            Ok(response) => Err(LabelPrintError::BackendRejected(
                response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| self.messages.unknown_error.clone()),
            )),
            Err(e) => Err(LabelPrintError::TransportFailure(e)),
        };

        match &result {
            Ok(_) => {
                span.record("state", DispatchState::Succeeded.as_str());
                info!("Label sent to print");
                self.notifier
                    .notify(&self.messages.sent_to_print, Severity::Success);
            }
            Err(e) => {
                span.record("state", DispatchState::Failed.as_str());
                error!(error = %e, "Label print failed");
                self.notifier
                    .notify(&self.messages.print_failed(&e.to_string()), Severity::Danger);
            }
        }

        result
    }
}

impl fmt::Debug for PrintDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintDispatcher").finish_non_exhaustive()
    }
}
