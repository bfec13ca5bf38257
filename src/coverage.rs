//! Day-level coverage analysis.
//!
//! Walks the day's operating window slot by slot and computes how many
//! distinct employees cover each slot, then derives the day's staffing
//! status and fill percentage. Coverage gaps are reportable conditions,
//! never errors.
//!
//! # Status derivation
//! 1. `incomplete` — any slot (evening included) has zero coverage;
//! 2. `critical` — a rush-hour slot (lunch 12:00–14:00, dinner 19:00–21:00)
//!    is below the per-slot minimum;
//! 3. `warning` — evening slots are below the after-18:00 minimum, or any
//!    slot is below the per-slot minimum;
//! 4. `good` — otherwise.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{EmployeeId, ScheduleRules, Shift};
use crate::time::ClockTime;

/// Rush-hour slot starts: the lunch and dinner peaks.
const RUSH_HOURS: [u32; 4] = [12, 13, 19, 20];

/// Day staffing status, worst condition first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// All slots meet their minimums.
    Good,
    /// Understaffed somewhere, but nothing empty.
    Warning,
    /// A rush-hour slot is understaffed.
    Critical,
    /// At least one slot has nobody covering it.
    Incomplete,
}

/// Distinct employees covering one time slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotCoverage {
    /// Slot start (hourly granularity).
    pub slot: ClockTime,
    /// Distinct covering employees, ascending.
    pub employee_ids: Vec<EmployeeId>,
}

impl SlotCoverage {
    /// Number of distinct employees covering the slot.
    #[inline]
    pub fn count(&self) -> usize {
        self.employee_ids.len()
    }
}

/// Full coverage report for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCoverage {
    /// Analyzed weekday.
    pub day: u8,
    /// Per-slot coverage across the whole operating window.
    pub slot_coverage: Vec<SlotCoverage>,
    /// Slots with zero covering employees.
    pub empty_slots: Vec<ClockTime>,
    /// Slots exceeding `max_employees_per_slot`.
    pub excessive_slots: Vec<ClockTime>,
    /// Fewest distinct employees across the evening slots (18:00 through
    /// the early-morning close). Zero when an evening slot is empty.
    pub evening_coverage: usize,
    /// Derived staffing status.
    pub status: DayStatus,
    /// Total employee-slot coverage over the day's requirement, capped at
    /// 100. Extended days enumerate more slots and so require more.
    pub filling_percentage: f64,
}

/// Analyzes staffing coverage for one day.
pub fn analyze_day(shifts: &[Shift], day: u8, rules: &ScheduleRules) -> DayCoverage {
    let slots = rules.time_slots(day);

    let day_shifts: Vec<&Shift> = shifts
        .iter()
        .filter(|s| s.is_active() && s.day == day)
        .collect();

    let mut slot_coverage = Vec::with_capacity(slots.len());
    for &slot in &slots {
        let covering: BTreeSet<EmployeeId> = day_shifts
            .iter()
            .filter(|s| s.covers(slot))
            .flat_map(|s| s.employee_ids.iter().copied())
            .collect();
        slot_coverage.push(SlotCoverage {
            slot,
            employee_ids: covering.into_iter().collect(),
        });
    }

    let empty_slots: Vec<ClockTime> = slot_coverage
        .iter()
        .filter(|c| c.count() == 0)
        .map(|c| c.slot)
        .collect();
    let excessive_slots: Vec<ClockTime> = slot_coverage
        .iter()
        .filter(|c| c.count() > rules.max_employees_per_slot)
        .map(|c| c.slot)
        .collect();

    let evening: Vec<&SlotCoverage> = slot_coverage
        .iter()
        .filter(|c| is_evening_slot(c.slot, rules))
        .collect();
    let evening_coverage = evening.iter().map(|c| c.count()).min().unwrap_or(0);
    let evening_understaffed = evening
        .iter()
        .any(|c| c.count() < rules.min_employees_after_18h);

    let general_understaffed = slot_coverage
        .iter()
        .any(|c| c.count() < rules.min_employees_per_slot);
    let rush_understaffed = slot_coverage
        .iter()
        .filter(|c| RUSH_HOURS.contains(&c.slot.hour()))
        .any(|c| c.count() < rules.min_employees_per_slot);

    let status = if !empty_slots.is_empty() {
        DayStatus::Incomplete
    } else if rush_understaffed {
        DayStatus::Critical
    } else if evening_understaffed || general_understaffed {
        DayStatus::Warning
    } else {
        DayStatus::Good
    };

    let total: usize = slot_coverage.iter().map(|c| c.count()).sum();
    let required = slots.len() * rules.min_employees_per_slot;
    let filling_percentage = if required == 0 {
        100.0
    } else {
        (total as f64 / required as f64 * 100.0).min(100.0)
    };

    DayCoverage {
        day,
        slot_coverage,
        empty_slots,
        excessive_slots,
        evening_coverage,
        status,
        filling_percentage,
    }
}

/// Evening slots run from 18:00 through the post-midnight close. Slots
/// before the opening hour are the wrapped early-morning portion.
fn is_evening_slot(slot: ClockTime, rules: &ScheduleRules) -> bool {
    slot.hour() >= 18 || slot < rules.opening_time
}
