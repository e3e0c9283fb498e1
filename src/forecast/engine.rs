//! Forecasting entry points.
//!
//! [`Forecaster`] runs both computations (metrics and schedule) for one
//! or more teams. Every computation gets its own fresh cursor, so teams
//! share no state and results do not depend on evaluation order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::metrics::BacklogMetrics;
use super::schedule::ScheduleBuilder;
use crate::config::ForecastConfig;
use crate::error::Result;
use crate::models::{CapacityProfile, TeamSchedule, WorkItem};

/// Input container for one team's forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Team capacity.
    pub profile: CapacityProfile,
    /// Team backlog.
    pub items: Vec<WorkItem>,
    /// Day forecasting starts (callers typically pass "today").
    pub start_date: NaiveDate,
}

impl ForecastRequest {
    /// Creates a new forecast request.
    pub fn new(profile: CapacityProfile, items: Vec<WorkItem>, start_date: NaiveDate) -> Self {
        Self {
            profile,
            items,
            start_date,
        }
    }

    /// Adds a backlog item.
    pub fn with_item(mut self, item: WorkItem) -> Self {
        self.items.push(item);
        self
    }
}

/// Forecast for one team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamForecast {
    /// Aggregate backlog metrics.
    pub metrics: BacklogMetrics,
    /// Per-item schedule.
    pub schedule: TeamSchedule,
}

/// Capacity-based backlog forecaster.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_forecast::forecast::{Forecaster, ForecastRequest};
/// use u_forecast::models::{CapacityProfile, WorkItem};
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let request = ForecastRequest::new(CapacityProfile::new(1.0), vec![], start)
///     .with_item(WorkItem::new("W1", 2.0).with_order_key(1.0))
///     .with_item(WorkItem::new("W2", 1.0).with_order_key(2.0));
///
/// let forecast = Forecaster::new().forecast(&request);
/// assert_eq!(forecast.metrics.months_to_complete, 3.0);
/// assert_eq!(forecast.schedule.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    /// Creates a forecaster with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a forecaster with validated settings.
    pub fn with_config(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Current settings.
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Aggregate metrics for one team's backlog.
    pub fn metrics(
        &self,
        profile: &CapacityProfile,
        items: &[WorkItem],
        start_date: NaiveDate,
    ) -> BacklogMetrics {
        BacklogMetrics::calculate_with_config(profile, items, start_date, &self.config)
    }

    /// Finish-to-start schedule for one team's backlog.
    pub fn schedule(
        &self,
        profile: &CapacityProfile,
        items: &[WorkItem],
        start_date: NaiveDate,
    ) -> TeamSchedule {
        ScheduleBuilder::new()
            .with_config(self.config)
            .build(profile, items, start_date)
    }

    /// Metrics and schedule for one team.
    pub fn forecast(&self, request: &ForecastRequest) -> TeamForecast {
        TeamForecast {
            metrics: self.metrics(&request.profile, &request.items, request.start_date),
            schedule: self.schedule(&request.profile, &request.items, request.start_date),
        }
    }

    /// Forecasts several teams independently, in request order.
    pub fn forecast_teams(&self, requests: &[ForecastRequest]) -> Vec<TeamForecast> {
        requests.iter().map(|r| self.forecast(r)).collect()
    }
}
