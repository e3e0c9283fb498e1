//! Work item (backlog entry) model.
//!
//! Effort is measured in the same units as team capacity (e.g.
//! person-months). Remaining effort is exogenous: normally
//! `size × (1 − progress/100)`, computed by [`WorkItem::with_progress`].

use serde::{Deserialize, Serialize};

/// A backlog entry to be forecast against team capacity.
///
/// Items are scheduled in ascending `order_key`; ties keep input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkItem {
    /// Unique item identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Nominal size, ignoring progress.
    pub size: f64,
    /// Effort still to be done. `<= 0` means the item is finished.
    pub remaining_effort: f64,
    /// Scheduling order (lower = scheduled first).
    #[serde(default)]
    pub order_key: f64,
}

impl WorkItem {
    /// Creates an unstarted item: remaining effort equals `size`.
    pub fn new(id: impl Into<String>, size: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            size,
            remaining_effort: size,
            order_key: 0.0,
        }
    }

    /// Sets the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Derives remaining effort from a completion percentage (0..=100).
    pub fn with_progress(mut self, percent: f64) -> Self {
        self.remaining_effort = self.size * (1.0 - percent / 100.0);
        self
    }

    /// Sets remaining effort directly.
    pub fn with_remaining_effort(mut self, remaining_effort: f64) -> Self {
        self.remaining_effort = remaining_effort;
        self
    }

    /// Sets the scheduling order key.
    pub fn with_order_key(mut self, order_key: f64) -> Self {
        self.order_key = order_key;
        self
    }

    /// Whether nothing remains to be done.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining_effort <= 0.0
    }
}
