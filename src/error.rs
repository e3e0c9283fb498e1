//! Error types for u-forecast.
//!
//! Only construction and configuration can fail. The forecasting engine
//! itself is infallible: "nothing left to do" and "never completes" are
//! reported as values in [`BacklogMetrics`](crate::forecast::BacklogMetrics)
//! and [`TeamSchedule`](crate::models::TeamSchedule).

use thiserror::Error;

/// Result type for u-forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors raised when building engine inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Month string is not of the form `YYYY-MM`.
    #[error("invalid month format '{0}': expected YYYY-MM")]
    InvalidMonthFormat(String),

    /// Month number outside 1..=12.
    #[error("month {month} out of range for year {year}: expected 1-12")]
    MonthOutOfRange { year: i32, month: u32 },

    /// Year outside the representable four-digit range.
    #[error("year {0} out of range: expected 0-9999")]
    YearOutOfRange(i32),

    /// Configuration could not be read, parsed or accepted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
