//! Operator-facing texts
//!
//! English defaults; hosts pass translated texts through
//! [`crate::PrintRequestOrchestrator::with_messages`].

/// Every string the label printer shows to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMessages {
    /// Title of the quantity prompt
    pub quantity_prompt_title: String,
    /// Warning for non-numeric or non-positive input
    pub invalid_quantity: String,
    /// Warning when printing with no line selected
    pub no_line_selected: String,
    /// Success notification
    pub sent_to_print: String,
    /// Prefix of failure notifications, followed by the reason
    pub print_failed_prefix: String,
    /// Reason used when the backend rejects without a message
    pub unknown_error: String,
}

impl LabelMessages {
    /// Failure notification text for `reason`
    pub fn print_failed(&self, reason: &str) -> String {
        format!("{}{}", self.print_failed_prefix, reason)
    }
}

impl Default for LabelMessages {
    fn default() -> Self {
        Self {
            quantity_prompt_title: "Number of labels to print".into(),
            invalid_quantity: "Enter a valid number greater than 0".into(),
            no_line_selected: "Select a line before printing".into(),
            sent_to_print: "Label sent to print".into(),
            print_failed_prefix: "Could not print: ".into(),
            unknown_error: "unknown error".into(),
        }
    }
}
