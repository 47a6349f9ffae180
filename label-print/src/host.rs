//! Host UI seams
//!
//! The barcode UI is injected through these traits: which line is
//! selected, how to ask the operator for a number, and how to show a
//! notification.

use std::fmt;

use shared::MovementLine;

/// Notification level shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Success,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access to the line the operator is working on
pub trait LineAccessor: Send + Sync {
    /// Currently selected line, if any
    fn current_line(&self) -> Option<MovementLine>;

    /// Quantity already processed on the line
    fn done_quantity(&self, line: &MovementLine) -> f64 {
        line.quantity_done
    }

    /// Quantity still to process on the line
    fn remaining_quantity(&self, line: &MovementLine) -> f64 {
        line.quantity_remaining
    }
}

/// Synchronous operator prompt
pub trait QuantityPrompt: Send + Sync {
    /// Ask for a value. `None` means the operator dismissed the prompt.
    fn ask(&self, title: &str, default: &str) -> Option<String>;
}

/// Operator-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);

    /// Ask the host to redraw the line (e.g. to show a new override)
    fn request_rerender(&self) {}
}
