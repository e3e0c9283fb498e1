//! Capacity cursor: the scheduling primitive.
//!
//! A cursor is a position in time (a month plus the fraction of that
//! month's capacity already used) walking forward over a team's
//! [`CapacityProfile`]. Work is poured into the current month until its
//! capacity is used up, then the cursor moves on.
//!
//! # Operations
//!
//! - [`CapacityCursor::consume_work`] advances the cursor (used to lay
//!   items end to end).
//! - [`CapacityCursor::count_months_for_work`] simulates on a copy and
//!   leaves the cursor untouched (used for duration estimates).
//!
//! Both run the same single-month step, so a duration and the date it
//! reports always describe the same endpoint.
//!
//! # Termination
//! Zero-capacity months are skipped, not waited on. A hard cap on
//! month advances ([`ForecastConfig::max_months`]) stops a team with no
//! capacity from being walked forever.

use chrono::NaiveDate;
use log::trace;

use crate::config::ForecastConfig;
use crate::models::{CalendarMonth, CapacityProfile};

/// Observable phase of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Current month has no capacity left; the next step advances.
    AwaitingCapacity,
    /// Current month still has capacity to absorb work.
    Consuming,
    /// Month cap reached; no further work can be absorbed.
    Exhausted,
}

/// Result of [`CapacityCursor::consume_work`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consumption {
    /// Work actually absorbed (`<= amount`).
    pub consumed: f64,
    /// Cursor date after consuming.
    pub end_date: NaiveDate,
}

/// Result of [`CapacityCursor::count_months_for_work`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthsEstimate {
    /// Working months needed (fractional). `f64::INFINITY` if never.
    pub months: f64,
    /// Day the work completes. `None` if nothing to do or never.
    pub completion_date: Option<NaiveDate>,
}

impl MonthsEstimate {
    fn nothing_to_do() -> Self {
        Self {
            months: 0.0,
            completion_date: None,
        }
    }

    pub(crate) fn never() -> Self {
        Self {
            months: f64::INFINITY,
            completion_date: None,
        }
    }
}

/// Outcome of one single-month step.
enum Step {
    /// Month had no capacity left; the cursor moved to the next month.
    Advanced,
    /// `work` units were absorbed by a month of `capacity`.
    Worked { work: f64, capacity: f64 },
}

/// Simulation cursor over a team's monthly capacity.
///
/// Cheap to copy; it borrows the profile. Create one per team per
/// computation and never share it.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_forecast::forecast::CapacityCursor;
/// use u_forecast::models::CapacityProfile;
///
/// let profile = CapacityProfile::new(2.0);
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let mut cursor = CapacityCursor::new(&profile, start);
///
/// let estimate = cursor.count_months_for_work(4.0);
/// assert_eq!(estimate.months, 2.0);
///
/// let done = cursor.consume_work(4.0);
/// assert_eq!(done.end_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CapacityCursor<'a> {
    profile: &'a CapacityProfile,
    start_date: NaiveDate,
    current_month: CalendarMonth,
    fraction_consumed: f64,
    months_advanced: u32,
    max_months: u32,
    epsilon: f64,
}

impl<'a> CapacityCursor<'a> {
    /// Creates a cursor positioned at `start_date` with default settings.
    ///
    /// The part of the start month before `start_date` counts as used.
    pub fn new(profile: &'a CapacityProfile, start_date: NaiveDate) -> Self {
        Self::with_config(profile, start_date, &ForecastConfig::default())
    }

    /// Creates a cursor with explicit settings.
    pub fn with_config(
        profile: &'a CapacityProfile,
        start_date: NaiveDate,
        config: &ForecastConfig,
    ) -> Self {
        Self {
            profile,
            start_date,
            current_month: CalendarMonth::from_date(start_date),
            fraction_consumed: CalendarMonth::fraction_of(start_date),
            months_advanced: 0,
            max_months: config.max_months,
            epsilon: config.epsilon,
        }
    }

    /// Sets the month cap.
    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.max_months = max_months;
        self
    }

    /// Sets the month-consumed tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Month the cursor is in.
    #[inline]
    pub fn current_month(&self) -> CalendarMonth {
        self.current_month
    }

    /// Fraction of the current month's capacity already used.
    #[inline]
    pub fn fraction_consumed(&self) -> f64 {
        self.fraction_consumed
    }

    /// Months advanced since creation.
    #[inline]
    pub fn months_advanced(&self) -> u32 {
        self.months_advanced
    }

    /// Whether the month cap has been reached.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.months_advanced >= self.max_months
    }

    /// Capacity still available in the current month.
    pub fn available_capacity(&self) -> f64 {
        (self.capacity() * (1.0 - self.fraction_consumed)).max(0.0)
    }

    /// Current position as a calendar day, never before the start date.
    pub fn to_date(&self) -> NaiveDate {
        self.current_month
            .date_at_fraction(self.fraction_consumed)
            .max(self.start_date)
    }

    /// Current phase.
    pub fn state(&self) -> CursorState {
        if self.is_exhausted() {
            CursorState::Exhausted
        } else if self.capacity() <= 0.0 || self.fraction_consumed >= 1.0 - self.epsilon {
            CursorState::AwaitingCapacity
        } else {
            CursorState::Consuming
        }
    }

    /// Consumes up to `amount` units of work, advancing the cursor.
    ///
    /// Calls chain: each continues where the previous one stopped.
    /// `consumed < amount` only when the month cap is hit first.
    pub fn consume_work(&mut self, amount: f64) -> Consumption {
        let mut remaining = amount;
        while remaining > 0.0 && !self.is_exhausted() {
            if let Step::Worked { work, .. } = self.step(remaining) {
                remaining -= work;
            }
        }

        Consumption {
            consumed: amount - remaining,
            end_date: self.to_date(),
        }
    }

    /// Working months needed to absorb `amount`, without moving the cursor.
    ///
    /// Only months with capacity count, each by the fraction of it the
    /// work occupies. The completion date is read at the exact point the
    /// work runs out, never after a further month advance.
    pub fn count_months_for_work(&self, amount: f64) -> MonthsEstimate {
        if amount <= 0.0 {
            return MonthsEstimate::nothing_to_do();
        }

        let mut shadow = *self;
        let mut remaining = amount;
        let mut months = 0.0;

        while remaining > 0.0 {
            if shadow.is_exhausted() {
                return MonthsEstimate::never();
            }
            if let Step::Worked { work, capacity } = shadow.step(remaining) {
                remaining -= work;
                months += work / capacity;
            }
        }

        MonthsEstimate {
            months,
            completion_date: Some(shadow.to_date()),
        }
    }

    fn capacity(&self) -> f64 {
        self.profile.capacity_for(&self.current_month)
    }

    /// Pours at most `remaining` units into the current month.
    ///
    /// Advances only when the month has nothing left, or when it fills
    /// up with work still pending. A month that fills exactly as the work
    /// runs out is left in place so its date can be read. A leftover
    /// within `epsilon` of a month's capacity is absorbed here rather
    /// than spilled into the next month.
    fn step(&mut self, remaining: f64) -> Step {
        let capacity = self.capacity();
        if capacity <= 0.0 {
            self.advance();
            return Step::Advanced;
        }

        let available = capacity * (1.0 - self.fraction_consumed);
        if available <= 0.0 {
            self.advance();
            return Step::Advanced;
        }

        let mut work = remaining.min(available);
        if remaining - work <= self.epsilon * capacity {
            work = remaining;
        }
        self.fraction_consumed += work / capacity;
        if self.fraction_consumed >= 1.0 - self.epsilon && work < remaining {
            self.advance();
        }

        Step::Worked { work, capacity }
    }

    fn advance(&mut self) {
        self.current_month = self.current_month.next();
        self.fraction_consumed = 0.0;
        self.months_advanced += 1;
        trace!(
            "cursor advanced to {} ({} of {} months)",
            self.current_month,
            self.months_advanced,
            self.max_months
        );
    }
}
