//! Team capacity profile.
//!
//! A profile is a default monthly capacity plus sparse per-month
//! overrides. It is read-only input to the engine.
//!
//! # Precedence
//! An override for a month always wins over the default, including an
//! override of zero (e.g. a team shutdown month).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CalendarMonth;

/// Monthly work capacity of one team, in effort units per month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CapacityProfile {
    /// Capacity for any month without an override.
    pub default_monthly_capacity: f64,
    /// Per-month capacity overrides, keyed by month.
    #[serde(default)]
    pub overrides: HashMap<CalendarMonth, f64>,
}

impl CapacityProfile {
    /// Creates a profile with the given default and no overrides.
    pub fn new(default_monthly_capacity: f64) -> Self {
        Self {
            default_monthly_capacity,
            overrides: HashMap::new(),
        }
    }

    /// Adds (or replaces) an override for `month`.
    pub fn with_override(mut self, month: CalendarMonth, capacity: f64) -> Self {
        self.set_override(month, capacity);
        self
    }

    /// Sets an override, returning the previous one for that month.
    pub fn set_override(&mut self, month: CalendarMonth, capacity: f64) -> Option<f64> {
        self.overrides.insert(month, capacity)
    }

    /// Removes the override for `month`.
    pub fn remove_override(&mut self, month: &CalendarMonth) -> Option<f64> {
        self.overrides.remove(month)
    }

    /// The override for `month`, if any.
    pub fn override_for(&self, month: &CalendarMonth) -> Option<f64> {
        self.overrides.get(month).copied()
    }

    /// Capacity available in `month`.
    #[inline]
    pub fn capacity_for(&self, month: &CalendarMonth) -> f64 {
        capacity_for(self, month)
    }

    /// Whether every month of this profile has zero (or negative) capacity.
    pub fn is_always_idle(&self) -> bool {
        self.default_monthly_capacity <= 0.0 && self.overrides.values().all(|&c| c <= 0.0)
    }
}

/// Capacity of `profile` in `month`: the override if present, else the default.
pub fn capacity_for(profile: &CapacityProfile, month: &CalendarMonth) -> f64 {
    profile
        .override_for(month)
        .unwrap_or(profile.default_monthly_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> CalendarMonth {
        CalendarMonth::parse(s).unwrap()
    }

    #[test]
    fn test_default_capacity() {
        let profile = CapacityProfile::new(2.5);
        assert_eq!(capacity_for(&profile, &month("2025-01")), 2.5);
        assert_eq!(profile.capacity_for(&month("2031-09")), 2.5);
    }

    #[test]
    fn test_override_wins() {
        let profile = CapacityProfile::new(2.0)
            .with_override(month("2025-01"), 1.0)
            .with_override(month("2025-02"), 0.0);

        assert_eq!(profile.capacity_for(&month("2025-01")), 1.0);
        assert_eq!(profile.capacity_for(&month("2025-02")), 0.0); // zero override still wins
        assert_eq!(profile.capacity_for(&month("2025-03")), 2.0);
    }

    #[test]
    fn test_set_and_remove_override() {
        let mut profile = CapacityProfile::new(3.0);
        assert_eq!(profile.set_override(month("2025-05"), 1.0), None);
        assert_eq!(profile.set_override(month("2025-05"), 1.5), Some(1.0));
        assert_eq!(profile.override_for(&month("2025-05")), Some(1.5));
        assert_eq!(profile.remove_override(&month("2025-05")), Some(1.5));
        assert_eq!(profile.capacity_for(&month("2025-05")), 3.0);
    }

    #[test]
    fn test_always_idle() {
        assert!(CapacityProfile::new(0.0).is_always_idle());
        assert!(!CapacityProfile::new(0.0)
            .with_override(month("2025-01"), 1.0)
            .is_always_idle());
        assert!(!CapacityProfile::new(1.0).is_always_idle());
    }

    #[test]
    fn test_serde_overrides_keyed_by_month() {
        let profile = CapacityProfile::new(2.0).with_override(month("2025-02"), 0.0);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["overrides"]["2025-02"], 0.0);

        let back: CapacityProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);

        let bad = serde_json::json!({
            "default_monthly_capacity": 1.0,
            "overrides": { "2025-13": 1.0 }
        });
        assert!(serde_json::from_value::<CapacityProfile>(bad).is_err());
    }

    #[test]
    fn test_serde_overrides_optional() {
        let profile: CapacityProfile =
            serde_json::from_str(r#"{"default_monthly_capacity": 4.0}"#).unwrap();
        assert_eq!(profile, CapacityProfile::new(4.0));
    }
}
