//! Scheduling rules (process-wide configuration).
//!
//! Supplied by the caller and never mutated by the core. The defaults carry
//! the house rules this crate was built around: an operating day that opens
//! at 11:00 and runs past midnight, closing at 02:00 on standard days and
//! 07:00 on the three extended weekdays (Thursday, Friday, Saturday).

use serde::{Deserialize, Serialize};

use crate::time::{contains, ClockTime};

/// Days in the weekly cycle (0 = Monday .. 6 = Sunday).
pub const DAYS_PER_WEEK: u8 = 7;

/// Staffing and hour constraints for the whole schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRules {
    /// Minimum distinct employees per time slot.
    pub min_employees_per_slot: usize,
    /// Maximum distinct employees per time slot before a slot is flagged
    /// as overstaffed.
    pub max_employees_per_slot: usize,
    /// Minimum distinct employees per evening slot (18:00 through close).
    pub min_employees_after_18h: usize,
    /// Maximum distinct employees scheduled on a single day.
    pub max_employees_per_day: usize,
    /// Minimum total scheduled employee-hours for a day to count as staffed.
    pub min_hours_per_day: f64,
    /// Hard weekly hour cap per employee.
    pub max_weekly_hours_per_employee: f64,
    /// Maximum length of a single shift in hours.
    pub max_shift_hours: f64,
    /// Weekdays with the late closing time.
    pub extended_days: Vec<u8>,
    /// Daily opening time.
    pub opening_time: ClockTime,
    /// Closing time on standard days (past midnight).
    pub standard_closing_time: ClockTime,
    /// Closing time on extended days (past midnight).
    pub extended_closing_time: ClockTime,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            min_employees_per_slot: 2,
            max_employees_per_slot: 4,
            min_employees_after_18h: 2,
            max_employees_per_day: 10,
            min_hours_per_day: 4.0,
            max_weekly_hours_per_employee: 40.0,
            max_shift_hours: 12.0,
            extended_days: vec![3, 4, 5], // Thu, Fri, Sat
            opening_time: ClockTime::from_hm(11, 0).unwrap_or(ClockTime::MIDNIGHT),
            standard_closing_time: ClockTime::from_hm(2, 0).unwrap_or(ClockTime::MIDNIGHT),
            extended_closing_time: ClockTime::from_hm(7, 0).unwrap_or(ClockTime::MIDNIGHT),
        }
    }
}

impl ScheduleRules {
    /// Whether the given weekday has the late closing time.
    pub fn is_extended_day(&self, day: u8) -> bool {
        self.extended_days.contains(&day)
    }

    /// Closing time for the given weekday.
    pub fn closing_time(&self, day: u8) -> ClockTime {
        if self.is_extended_day(day) {
            self.extended_closing_time
        } else {
            self.standard_closing_time
        }
    }

    /// Whether a wall-clock instant falls inside the day's operating window.
    ///
    /// The window crosses midnight, so the membership test is wrap-aware.
    pub fn is_within_operating_hours(&self, time: ClockTime, day: u8) -> bool {
        contains(self.opening_time, self.closing_time(day), time)
    }

    /// Hourly time-slot starts for the day's operating window, in order
    /// from opening to close.
    ///
    /// Standard days enumerate 11:00 .. 01:00 (15 slots); extended days
    /// run on to 06:00 (20 slots).
    pub fn time_slots(&self, day: u8) -> Vec<ClockTime> {
        let closing = self.closing_time(day);
        let mut slots = Vec::new();
        let mut slot = self.opening_time;
        // Hourly granularity; the window never spans a full 24h.
        for _ in 0..24 {
            if !contains(self.opening_time, closing, slot) {
                break;
            }
            slots.push(slot);
            slot = slot.add_hours(1.0);
        }
        slots
    }
}
