//! Label quantity resolution
//!
//! Policy: explicit set, then reuse. The operator sets an override for a
//! line through a separate prompt action; every later print of that line
//! reuses it until it is set again. Without an override the quantity comes
//! from the line (done, else remaining, else 1). Serial-tracked lines always
//! print exactly one label.

use std::num::NonZeroU32;

use dashmap::DashMap;
use shared::{LineId, MovementLine, TrackingMode};
use tracing::debug;

use crate::error::{LabelPrintError, LabelPrintResult};

/// Parse operator input into a label count
///
/// Leading/trailing whitespace is ignored and the leading base-10 integer is
/// taken, so `"  7 "` is 7 and `"3.9"` is 3. Empty, non-numeric, zero,
/// negative or overflowing input is rejected.
pub fn parse_quantity_input(raw: &str) -> LabelPrintResult<NonZeroU32> {
    let invalid = || LabelPrintError::InvalidQuantityInput(raw.to_string());
    let trimmed = raw.trim();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_len = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    if negative || digits_len == 0 {
        return Err(invalid());
    }

    unsigned[..digits_len]
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(invalid)
}

/// Per-line quantity overrides, keyed by line id
///
/// Lives only in memory for the orchestrator's lifetime. An entry is
/// replaced by the next successful set and never removed otherwise.
#[derive(Debug, Default)]
pub struct OverrideStore {
    entries: DashMap<LineId, NonZeroU32>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, line_id: &LineId) -> Option<NonZeroU32> {
        self.entries.get(line_id).map(|entry| *entry.value())
    }

    /// Store an override, returning the previous one
    pub fn set(&self, line_id: LineId, quantity: NonZeroU32) -> Option<NonZeroU32> {
        self.entries.insert(line_id, quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decides how many labels to print for a line
#[derive(Debug, Default)]
pub struct QuantityResolver {
    overrides: OverrideStore,
}

impl QuantityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// Quantity used when the operator has not set one
    ///
    /// First positive of `done` and `remaining`, else 1. Fractions are
    /// truncated to whole labels, never below 1.
    pub fn default_quantity(done: f64, remaining: f64) -> NonZeroU32 {
        let quantity = [done, remaining]
            .into_iter()
            .find(|q| q.is_finite() && *q > 0.0)
            .unwrap_or(1.0);
        NonZeroU32::new(quantity.trunc().min(u32::MAX as f64) as u32).unwrap_or(NonZeroU32::MIN)
    }

    /// Effective quantity for `line`
    pub fn resolve(&self, line: &MovementLine, done: f64, remaining: f64) -> NonZeroU32 {
        if line.product.tracking_mode() == TrackingMode::Serial {
            return NonZeroU32::MIN;
        }
        match self.overrides.get(&line.id) {
            Some(quantity) => quantity,
            None => Self::default_quantity(done, remaining),
        }
    }

    /// Text to pre-fill the prompt with: the current override, or empty
    pub fn prompt_default(&self, line_id: &LineId) -> String {
        self.overrides
            .get(line_id)
            .map(|q| q.to_string())
            .unwrap_or_default()
    }

    /// Validate prompt input and store it as the line's override
    ///
    /// `None` input means the prompt was dismissed. The store is only
    /// touched when the input is valid.
    pub fn apply_input(&self, line_id: &LineId, input: Option<&str>) -> LabelPrintResult<NonZeroU32> {
        let raw = input.ok_or(LabelPrintError::UserCancelled)?;
        let quantity = parse_quantity_input(raw)?;
        let previous = self.overrides.set(line_id.clone(), quantity);
        debug!(line_id = %line_id, quantity = quantity.get(), previous = ?previous, "Label quantity override set");
        Ok(quantity)
    }
}
