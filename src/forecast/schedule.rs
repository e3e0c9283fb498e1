//! Finish-to-start team schedule builder.
//!
//! # Algorithm
//!
//! 1. Sort items by `order_key` ascending (stable: ties keep input order).
//! 2. Create one [`CapacityCursor`] at the start date.
//! 3. For each item with remaining effort, record the cursor date as its
//!    start, consume its effort, and record the cursor date as its end.
//! 4. Items the cursor cannot absorb before its month cap are listed as
//!    unscheduled.
//!
//! Each item starts on the day the previous one ends, so items of one
//! team never overlap.
//!
//! # Complexity
//! O(n log n + n + m) where n = items and m = months walked.

use chrono::NaiveDate;
use log::{debug, warn};

use super::cursor::CapacityCursor;
use crate::config::ForecastConfig;
use crate::models::{CapacityProfile, ScheduledItem, TeamSchedule, WorkItem};

/// Builds day-precise schedules for one team's backlog.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    config: ForecastConfig,
}

impl ScheduleBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cursor settings.
    pub fn with_config(mut self, config: ForecastConfig) -> Self {
        self.config = config;
        self
    }

    /// Schedules `items` back to back against `profile` from `start_date`.
    pub fn build(
        &self,
        profile: &CapacityProfile,
        items: &[WorkItem],
        start_date: NaiveDate,
    ) -> TeamSchedule {
        let mut schedule = TeamSchedule::new();
        let mut cursor = CapacityCursor::with_config(profile, start_date, &self.config);

        debug!(
            "scheduling {} items from {} (cap {} months)",
            items.len(),
            start_date,
            self.config.max_months
        );

        for idx in Self::sort_items(items) {
            let item = &items[idx];
            if item.is_done() {
                continue;
            }

            let start = cursor.to_date();
            let consumption = cursor.consume_work(item.remaining_effort);

            if consumption.consumed >= item.remaining_effort - self.config.epsilon {
                schedule.push(ScheduledItem::new(
                    item.clone(),
                    start,
                    consumption.end_date,
                ));
            } else {
                warn!(
                    "item '{}' cannot be scheduled within {} months ({:.3} of {:.3} absorbed)",
                    item.id, self.config.max_months, consumption.consumed, item.remaining_effort
                );
                schedule.mark_unscheduled(item.id.clone());
            }
        }

        schedule
    }

    /// Item indices in scheduling order.
    fn sort_items(items: &[WorkItem]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| items[a].order_key.total_cmp(&items[b].order_key));
        indices
    }
}

/// Schedules a team's backlog with default settings.
pub fn compute_schedule(
    profile: &CapacityProfile,
    items: &[WorkItem],
    start_date: NaiveDate,
) -> TeamSchedule {
    ScheduleBuilder::new().build(profile, items, start_date)
}
