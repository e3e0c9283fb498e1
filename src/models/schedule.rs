//! Team schedule (forecast output) model.
//!
//! A team schedule is the ordered, finish-to-start sequence of work
//! items the team's capacity can absorb, each with day-precise start
//! and end dates. Items that could not be absorbed within the month
//! cap are listed separately.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WorkItem;

/// A work item placed on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledItem {
    /// The scheduled item.
    pub item: WorkItem,
    /// Day work on the item begins (the previous item's end date).
    pub start_date: NaiveDate,
    /// Day the item's remaining effort is fully consumed.
    pub end_date: NaiveDate,
}

impl ScheduledItem {
    /// Creates a scheduled item.
    pub fn new(item: WorkItem, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            item,
            start_date,
            end_date,
        }
    }

    /// Calendar days between start and end.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Schedule of one team's backlog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamSchedule {
    /// Scheduled items, in scheduling order.
    pub items: Vec<ScheduledItem>,
    /// IDs of items the team cannot finish within the month cap.
    pub unscheduled: Vec<String>,
}

impl TeamSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scheduled item.
    pub fn push(&mut self, scheduled: ScheduledItem) {
        self.items.push(scheduled);
    }

    /// Records an item that could not be scheduled.
    pub fn mark_unscheduled(&mut self, item_id: impl Into<String>) {
        self.unscheduled.push(item_id.into());
    }

    /// Whether every item with remaining effort was scheduled.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Finds the scheduled entry for an item.
    pub fn item(&self, item_id: &str) -> Option<&ScheduledItem> {
        self.items.iter().find(|s| s.item.id == item_id)
    }

    /// End date of the last scheduled item.
    ///
    /// `None` when nothing was scheduled or the backlog never finishes.
    pub fn completion_date(&self) -> Option<NaiveDate> {
        if !self.is_complete() {
            return None;
        }
        self.items.last().map(|s| s.end_date)
    }

    /// Number of scheduled items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item was scheduled.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
