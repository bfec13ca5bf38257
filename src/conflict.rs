//! Double-booking detection.
//!
//! Finds all pairs of distinct shifts assigned to the same employee that
//! overlap in time, grouped into one record per employee per day. Conflicts
//! are first-class reportable data, never errors.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{Employee, EmployeeId, Shift, DAYS_PER_WEEK};

/// The set of an employee's shifts on one day found to mutually overlap.
///
/// Never contains fewer than two shifts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictRecord {
    /// The double-booked employee.
    pub employee_id: EmployeeId,
    /// Day the conflicting shifts start on.
    pub day: u8,
    /// Every shift found in conflict with any other, deduplicated, in
    /// input order.
    pub shifts: Vec<Shift>,
}

/// Detects conflicts for a single day.
///
/// For each roster employee, the employee's active shifts on `day` are
/// swept pairwise with the wrap-aware overlap test; any overlapping pair
/// contributes both shifts to that employee's record. An employee yields
/// at most one record per day.
///
/// A single shift listing the same employee once in its employee set is
/// one assignment, not two — it can never conflict with itself.
pub fn detect_conflicts(shifts: &[Shift], employees: &[Employee], day: u8) -> Vec<ConflictRecord> {
    let mut records = Vec::new();

    for employee in employees {
        let own: Vec<&Shift> = shifts
            .iter()
            .filter(|s| s.is_active() && s.day == day && s.has_employee(employee.id))
            .collect();
        if own.len() < 2 {
            continue;
        }

        let mut conflicted: BTreeSet<u32> = BTreeSet::new();
        for i in 0..own.len() {
            for j in (i + 1)..own.len() {
                if own[i].overlaps_range(own[j].start, own[j].end) {
                    conflicted.insert(own[i].id);
                    conflicted.insert(own[j].id);
                }
            }
        }

        if !conflicted.is_empty() {
            records.push(ConflictRecord {
                employee_id: employee.id,
                day,
                shifts: own
                    .into_iter()
                    .filter(|s| conflicted.contains(&s.id))
                    .cloned()
                    .collect(),
            });
        }
    }

    records
}

/// Detects conflicts across the whole week: the per-day sweep repeated for
/// day 0..=6 and concatenated.
pub fn detect_week_conflicts(shifts: &[Shift], employees: &[Employee]) -> Vec<ConflictRecord> {
    (0..DAYS_PER_WEEK)
        .flat_map(|day| detect_conflicts(shifts, employees, day))
        .collect()
}
