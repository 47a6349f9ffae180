//! Error types for label print actions

use label_client::ClientError;
use thiserror::Error;

/// Everything that can stop a label print action
///
/// None of these leave the orchestrator: each one is turned into an
/// operator notification (or silence, for a cancel) and an outcome value.
#[derive(Debug, Error)]
pub enum LabelPrintError {
    /// Operator dismissed the quantity prompt
    #[error("Cancelled by operator")]
    UserCancelled,

    /// Prompt input is not a positive integer
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantityInput(String),

    /// Print requested with no active line
    #[error("No line selected")]
    NoLineSelected,

    /// Backend answered with a non-ok result
    #[error("{0}")]
    BackendRejected(String),

    /// Network, HTTP or decoding failure
    #[error(transparent)]
    TransportFailure(#[from] ClientError),
}

/// Result type for label print operations
pub type LabelPrintResult<T> = Result<T, LabelPrintError>;
