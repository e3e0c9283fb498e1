//! Backlog metrics.
//!
//! Aggregate forecast of one team's backlog against its capacity.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total effort | Sum of nominal item sizes |
//! | Remaining effort | Sum of remaining effort |
//! | Months to complete | Working months to absorb remaining effort (∞ if never) |
//! | Completion date | Day the remaining effort is absorbed |

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::cursor::{CapacityCursor, MonthsEstimate};
use crate::config::ForecastConfig;
use crate::models::{CapacityProfile, WorkItem};

/// Backlog forecast indicators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BacklogMetrics {
    /// Sum of item sizes, ignoring progress.
    pub total_effort: f64,
    /// Sum of remaining effort.
    pub remaining_effort: f64,
    /// Working months needed. `f64::INFINITY` when the team never finishes
    /// (serialized as `null`).
    #[serde(with = "months_serde")]
    pub months_to_complete: f64,
    /// Completion day. `None` when nothing remains or the team never finishes.
    pub completion_date: Option<NaiveDate>,
}

impl BacklogMetrics {
    /// Metrics of an empty backlog.
    pub fn empty() -> Self {
        Self {
            total_effort: 0.0,
            remaining_effort: 0.0,
            months_to_complete: 0.0,
            completion_date: None,
        }
    }

    /// Computes metrics with default settings.
    pub fn calculate(
        profile: &CapacityProfile,
        items: &[WorkItem],
        start_date: NaiveDate,
    ) -> Self {
        Self::calculate_with_config(profile, items, start_date, &ForecastConfig::default())
    }

    /// Computes metrics.
    ///
    /// # Arguments
    /// * `profile` - The team's capacity.
    /// * `items` - The team's backlog (order does not matter here).
    /// * `start_date` - Day forecasting starts.
    /// * `config` - Cursor settings.
    pub fn calculate_with_config(
        profile: &CapacityProfile,
        items: &[WorkItem],
        start_date: NaiveDate,
        config: &ForecastConfig,
    ) -> Self {
        let total_effort: f64 = items.iter().map(|i| i.size).sum();
        let remaining_effort: f64 = items.iter().map(|i| i.remaining_effort).sum();

        debug!(
            "computing backlog metrics: {} items, remaining {:.3} from {}",
            items.len(),
            remaining_effort,
            start_date
        );

        if remaining_effort <= 0.0 {
            return Self {
                total_effort,
                remaining_effort,
                ..Self::empty()
            };
        }

        let estimate = if profile.is_always_idle() {
            MonthsEstimate::never()
        } else {
            CapacityCursor::with_config(profile, start_date, config)
                .count_months_for_work(remaining_effort)
        };
        if estimate.completion_date.is_none() {
            warn!(
                "backlog of {:.3} cannot complete within {} months",
                remaining_effort, config.max_months
            );
        }

        Self {
            total_effort,
            remaining_effort,
            months_to_complete: estimate.months,
            completion_date: estimate.completion_date,
        }
    }

    /// Whether the backlog finishes within the month cap.
    pub fn completes(&self) -> bool {
        self.months_to_complete.is_finite()
    }

    /// Fraction of total effort already done (1.0 for an empty backlog).
    pub fn progress_ratio(&self) -> f64 {
        if self.total_effort <= 0.0 {
            1.0
        } else {
            (1.0 - self.remaining_effort / self.total_effort).clamp(0.0, 1.0)
        }
    }
}

/// `f64::INFINITY` ↔ `null`, since JSON has no infinity.
mod months_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(months: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if months.is_finite() {
            serializer.serialize_some(months)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Computes backlog metrics with default settings.
pub fn compute_backlog_metrics(
    profile: &CapacityProfile,
    items: &[WorkItem],
    start_date: NaiveDate,
) -> BacklogMetrics {
    BacklogMetrics::calculate(profile, items, start_date)
}
