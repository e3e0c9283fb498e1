//! Capacity forecasting engine.
//!
//! Walks a team's monthly capacity with a [`CapacityCursor`] to answer
//! two questions about its backlog:
//!
//! - **Metrics**: how many working months until the remaining effort is
//!   done, and on which day ([`BacklogMetrics`]).
//! - **Schedule**: the day-precise start and end of every item when
//!   items are worked one after another ([`TeamSchedule`](crate::models::TeamSchedule)).
//!
//! # Determinism
//! The start date is always an explicit argument; nothing here reads
//! the clock. Cursors are created per call and never shared.

mod cursor;
mod engine;
mod metrics;
mod schedule;

pub use cursor::{CapacityCursor, Consumption, CursorState, MonthsEstimate};
pub use engine::{ForecastRequest, Forecaster, TeamForecast};
pub use metrics::{compute_backlog_metrics, BacklogMetrics};
pub use schedule::{compute_schedule, ScheduleBuilder};
