//! Employee (roster member) model.

use serde::{Deserialize, Serialize};

use super::shift::EmployeeId;

/// Broad time-of-day bands an employee can prefer to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Opening through mid-afternoon.
    Morning,
    /// Late afternoon through close of the standard evening.
    Evening,
    /// Late blocks crossing into the early morning.
    Night,
}

/// A roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Contractual target hours per week.
    pub weekly_hours: f64,
    /// Preferred time-of-day bands. Empty = no preference (matches any).
    pub preferred_times: Vec<TimeOfDay>,
}

impl Employee {
    /// Creates an employee with no stated preferences.
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weekly_hours: 0.0,
            preferred_times: Vec::new(),
        }
    }

    /// Sets the contractual weekly hours.
    pub fn with_weekly_hours(mut self, hours: f64) -> Self {
        self.weekly_hours = hours;
        self
    }

    /// Adds a time-of-day preference (no-op if already present).
    pub fn with_preference(mut self, period: TimeOfDay) -> Self {
        if !self.preferred_times.contains(&period) {
            self.preferred_times.push(period);
        }
        self
    }

    /// Whether this employee is compatible with a block in the given band.
    ///
    /// Employees with no stated preference match any band.
    pub fn matches_period(&self, period: TimeOfDay) -> bool {
        self.preferred_times.is_empty() || self.preferred_times.contains(&period)
    }
}
