//! Capacity-based backlog forecasting.
//!
//! Given a team's monthly capacity (with per-month overrides) and an
//! ordered backlog of partially done work items, computes how long the
//! backlog takes, when it completes, and a finish-to-start schedule
//! with day-precise dates for every item.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CalendarMonth`, `CapacityProfile`,
//!   `WorkItem`, `ScheduledItem`, `TeamSchedule`
//! - **`forecast`**: The engine — `CapacityCursor`, `BacklogMetrics`,
//!   `ScheduleBuilder`, `Forecaster`
//! - **`config`**: Engine tunables (month cap, epsilon), TOML-loadable
//! - **`error`**: `ForecastError` and the crate `Result`
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_forecast::forecast::{compute_backlog_metrics, compute_schedule};
//! use u_forecast::models::{CalendarMonth, CapacityProfile, WorkItem};
//!
//! let profile = CapacityProfile::new(2.0)
//!     .with_override(CalendarMonth::parse("2025-02").unwrap(), 0.0);
//! let items = vec![WorkItem::new("W1", 3.0)];
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! let metrics = compute_backlog_metrics(&profile, &items, start);
//! assert_eq!(metrics.months_to_complete, 1.5);
//!
//! let schedule = compute_schedule(&profile, &items, start);
//! assert_eq!(schedule.completion_date(), metrics.completion_date);
//! ```

pub mod config;
pub mod error;
pub mod forecast;
pub mod models;

pub use config::ForecastConfig;
pub use error::{ForecastError, Result};
