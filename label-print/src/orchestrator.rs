//! Print request orchestration
//!
//! Wires the host UI seams to quantity resolution, payload building and
//! dispatch. Every error is settled here: the operator gets a notification
//! (or nothing, on cancel) and the caller gets an outcome value.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use label_client::PrintTransport;
use shared::{LineId, PrintResponse};
use tracing::{debug, info, instrument, warn};

use crate::dispatcher::PrintDispatcher;
use crate::error::LabelPrintError;
use crate::host::{LineAccessor, Notifier, QuantityPrompt, Severity};
use crate::messages::LabelMessages;
use crate::payload::PayloadBuilder;
use crate::quantity::QuantityResolver;

/// Result of a print action
#[derive(Debug)]
pub enum PrintOutcome {
    /// Backend accepted the request
    Sent {
        quantity: NonZeroU32,
        response: PrintResponse,
    },
    /// Nothing was sent (no line selected)
    Skipped(LabelPrintError),
    /// Request went out and failed (rejected or transport error)
    Failed(LabelPrintError),
}

impl PrintOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, PrintOutcome::Sent { .. })
    }
}

/// Result of a set-quantity action
#[derive(Debug)]
pub enum QuantityOutcome {
    /// Override stored for the line
    Set(NonZeroU32),
    /// Prompt dismissed
    Cancelled,
    /// Input refused; previous override kept
    Rejected(LabelPrintError),
    /// No line selected
    NoLine,
}

/// Label print request orchestrator
///
/// One instance serves the whole barcode screen. Actions on different lines
/// may run concurrently; the only shared state is the per-line override store.
pub struct PrintRequestOrchestrator {
    lines: Arc<dyn LineAccessor>,
    prompt: Arc<dyn QuantityPrompt>,
    notifier: Arc<dyn Notifier>,
    transport: Arc<dyn PrintTransport>,
    messages: Arc<LabelMessages>,
    resolver: QuantityResolver,
    builder: PayloadBuilder,
    dispatcher: PrintDispatcher,
}

impl PrintRequestOrchestrator {
    pub fn new(
        lines: Arc<dyn LineAccessor>,
        prompt: Arc<dyn QuantityPrompt>,
        notifier: Arc<dyn Notifier>,
        transport: Arc<dyn PrintTransport>,
    ) -> Self {
        let messages = Arc::new(LabelMessages::default());
        let dispatcher = PrintDispatcher::new(transport.clone(), notifier.clone(), messages.clone());
        Self {
            lines,
            prompt,
            notifier,
            transport,
            messages,
            resolver: QuantityResolver::new(),
            builder: PayloadBuilder::new(),
            dispatcher,
        }
    }

    /// Replace the operator-facing texts (e.g. with translations)
    pub fn with_messages(mut self, messages: LabelMessages) -> Self {
        self.messages = Arc::new(messages);
        self.dispatcher = PrintDispatcher::new(
            self.transport.clone(),
            self.notifier.clone(),
            self.messages.clone(),
        );
        self
    }

    pub fn messages(&self) -> &LabelMessages {
        &self.messages
    }

    /// Override currently stored for a line
    pub fn quantity_override(&self, line_id: &LineId) -> Option<NonZeroU32> {
        self.resolver.overrides().get(line_id)
    }

    /// Ask the operator how many labels to print for the current line
    ///
    /// The answer is kept and reused by every later print of that line.
    #[instrument(skip(self))]
    pub fn set_label_quantity(&self) -> QuantityOutcome {
        let Some(line) = self.lines.current_line() else {
            debug!("Set quantity requested with no line selected");
            return QuantityOutcome::NoLine;
        };

        let default = self.resolver.prompt_default(&line.id);
        let input = self
            .prompt
            .ask(&self.messages.quantity_prompt_title, &default);

        match self.resolver.apply_input(&line.id, input.as_deref()) {
            Ok(quantity) => {
                info!(line_id = %line.id, quantity = quantity.get(), "Label quantity set");
                self.notifier.request_rerender();
                QuantityOutcome::Set(quantity)
            }
            Err(LabelPrintError::UserCancelled) => {
                debug!(line_id = %line.id, "Quantity prompt cancelled");
                QuantityOutcome::Cancelled
            }
            Err(e) => {
                warn!(line_id = %line.id, error = %e, "Rejected label quantity");
                self.notifier
                    .notify(&self.messages.invalid_quantity, Severity::Warning);
                QuantityOutcome::Rejected(e)
            }
        }
    }

    /// Print labels for the current line
    #[instrument(skip(self))]
    pub async fn print_label(&self) -> PrintOutcome {
        let Some(line) = self.lines.current_line() else {
            warn!("Print requested with no line selected");
            self.notifier
                .notify(&self.messages.no_line_selected, Severity::Warning);
            return PrintOutcome::Skipped(LabelPrintError::NoLineSelected);
        };

        let quantity = self.resolver.resolve(
            &line,
            self.lines.done_quantity(&line),
            self.lines.remaining_quantity(&line),
        );
        let payload = self.builder.build(&line, quantity);
        let quantity = payload.quantity;
        debug!(line_id = %line.id, quantity = quantity.get(), "Dispatching label print");

        match self.dispatcher.dispatch(payload).await {
            Ok(response) => PrintOutcome::Sent { quantity, response },
            Err(e) => PrintOutcome::Failed(e),
        }
    }
}

impl fmt::Debug for PrintRequestOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintRequestOrchestrator")
            .field("overrides", &self.resolver.overrides().len())
            .finish_non_exhaustive()
    }
}
