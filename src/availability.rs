//! Employee availability queries.
//!
//! Answers "can this employee take a shift in this time range on this day",
//! by scanning the employee's existing shifts for wrap-aware overlaps. Used
//! by the UI after every mutation and by the generator while proposing
//! shifts.

use crate::models::{EmployeeId, Shift, ShiftId};
use crate::time::ClockTime;

/// Whether an employee is free for the candidate range `[start, end)` on
/// `day`.
///
/// Scans the employee's active shifts on that day and reports `false` on
/// the first wrap-aware overlap. Pass `exclude_shift_id` when editing an
/// existing shift so it does not collide with itself.
pub fn is_available(
    shifts: &[Shift],
    employee_id: EmployeeId,
    day: u8,
    start: ClockTime,
    end: ClockTime,
    exclude_shift_id: Option<ShiftId>,
) -> bool {
    !shifts.iter().any(|s| {
        s.is_active()
            && s.day == day
            && s.has_employee(employee_id)
            && exclude_shift_id != Some(s.id)
            && s.overlaps_range(start, end)
    })
}
