//! Weekly hour aggregation.
//!
//! Sums each employee's scheduled hours across the whole week with the
//! wrap-aware duration. Feeds both reporting and the generator's hard
//! weekly-hour cap.

use std::collections::HashMap;

use crate::models::{Employee, EmployeeId, ScheduleRules, Shift};

/// Total scheduled hours for one employee across all active shifts in the
/// week, full precision.
pub fn weekly_hours(shifts: &[Shift], employee_id: EmployeeId) -> f64 {
    shifts
        .iter()
        .filter(|s| s.is_active() && s.has_employee(employee_id))
        .map(Shift::duration_hours)
        .sum()
}

/// Weekly hours for every roster employee.
pub fn weekly_hours_by_employee(
    shifts: &[Shift],
    employees: &[Employee],
) -> HashMap<EmployeeId, f64> {
    employees
        .iter()
        .map(|e| (e.id, weekly_hours(shifts, e.id)))
        .collect()
}

/// Employees whose scheduled total exceeds the weekly cap, with their
/// totals, in roster order.
pub fn over_weekly_cap(
    shifts: &[Shift],
    employees: &[Employee],
    rules: &ScheduleRules,
) -> Vec<(EmployeeId, f64)> {
    employees
        .iter()
        .filter_map(|e| {
            let total = weekly_hours(shifts, e.id);
            (total > rules.max_weekly_hours_per_employee).then_some((e.id, total))
        })
        .collect()
}
