//! Shift model.
//!
//! A shift is a scheduled block of work time on one weekday, assigned to a
//! set of employees. The shift's `day` always identifies the day it starts
//! on; a shift whose end time is numerically before its start time continues
//! past midnight into the following calendar day.

use serde::{Deserialize, Serialize};

use crate::time::{contains, duration_hours, ranges_overlap, wraps_midnight, ClockTime};

/// Unique shift identifier, assigned monotonically by the caller.
pub type ShiftId = u32;

/// Unique employee identifier.
pub type EmployeeId = u32;

/// Shift lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    /// Accepted into the schedule.
    Confirmed,
    /// Awaiting confirmation.
    Pending,
    /// Flagged as conflicting with another shift.
    Conflict,
    /// Cancelled; occupies nobody's time.
    Cancelled,
}

/// A scheduled work block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier.
    pub id: ShiftId,
    /// Assigned employees. Order is irrelevant; duplicates are removed on
    /// every write path.
    pub employee_ids: Vec<EmployeeId>,
    /// Weekday the shift starts on (0 = Monday .. 6 = Sunday).
    pub day: u8,
    /// Wall-clock start.
    pub start: ClockTime,
    /// Wall-clock end (exclusive). Numerically before `start` means the
    /// shift crosses midnight.
    pub end: ClockTime,
    /// Lifecycle status.
    pub status: ShiftStatus,
}

impl Shift {
    /// Creates a confirmed shift with no employees assigned yet.
    pub fn new(id: ShiftId, day: u8, start: ClockTime, end: ClockTime) -> Self {
        Self {
            id,
            employee_ids: Vec::new(),
            day,
            start,
            end,
            status: ShiftStatus::Confirmed,
        }
    }

    /// Assigns an employee (no-op if already assigned).
    pub fn with_employee(mut self, employee_id: EmployeeId) -> Self {
        self.assign_employee(employee_id);
        self
    }

    /// Assigns several employees, de-duplicating.
    pub fn with_employees(mut self, employee_ids: impl IntoIterator<Item = EmployeeId>) -> Self {
        for id in employee_ids {
            self.assign_employee(id);
        }
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ShiftStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds an employee to the assignment set (no-op if already present).
    pub fn assign_employee(&mut self, employee_id: EmployeeId) {
        if !self.employee_ids.contains(&employee_id) {
            self.employee_ids.push(employee_id);
        }
    }

    /// Removes an employee from the assignment set.
    pub fn unassign_employee(&mut self, employee_id: EmployeeId) {
        self.employee_ids.retain(|&id| id != employee_id);
    }

    /// Whether the employee is assigned to this shift.
    #[inline]
    pub fn has_employee(&self, employee_id: EmployeeId) -> bool {
        self.employee_ids.contains(&employee_id)
    }

    /// Whether this shift continues past midnight.
    #[inline]
    pub fn crosses_midnight(&self) -> bool {
        wraps_midnight(self.start, self.end)
    }

    /// Shift length in hours, wrap-aware, full precision.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.start, self.end)
    }

    /// Whether the shift participates in scheduling queries.
    ///
    /// Cancelled shifts are inert: they occupy nobody's time and are
    /// excluded from availability, conflict, coverage, and hour sums.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status != ShiftStatus::Cancelled
    }

    /// Whether the shift spans the given instant.
    #[inline]
    pub fn covers(&self, t: ClockTime) -> bool {
        contains(self.start, self.end, t)
    }

    /// Whether the shift's time range overlaps `[start, end)`.
    #[inline]
    pub fn overlaps_range(&self, start: ClockTime, end: ClockTime) -> bool {
        ranges_overlap(self.start, self.end, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_builder() {
        let s = Shift::new(1, 2, t("11:00"), t("15:00"))
            .with_employee(7)
            .with_employee(9)
            .with_status(ShiftStatus::Pending);

        assert_eq!(s.id, 1);
        assert_eq!(s.day, 2);
        assert_eq!(s.employee_ids, vec![7, 9]);
        assert_eq!(s.status, ShiftStatus::Pending);
        assert!(s.has_employee(7));
        assert!(!s.has_employee(8));
    }

    #[test]
    fn test_employee_set_deduplicates() {
        let mut s = Shift::new(1, 0, t("09:00"), t("17:00"))
            .with_employees([3, 3, 5]);
        assert_eq!(s.employee_ids, vec![3, 5]);

        s.assign_employee(5);
        assert_eq!(s.employee_ids, vec![3, 5]);

        s.unassign_employee(3);
        assert_eq!(s.employee_ids, vec![5]);
    }

    #[test]
    fn test_midnight_crossing() {
        let night = Shift::new(1, 4, t("22:00"), t("02:00"));
        assert!(night.crosses_midnight());
        assert!((night.duration_hours() - 4.0).abs() < 1e-10);

        let day = Shift::new(2, 4, t("11:00"), t("19:00"));
        assert!(!day.crosses_midnight());
        assert!((day.duration_hours() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_covers() {
        let night = Shift::new(1, 4, t("22:00"), t("02:00"));
        assert!(night.covers(t("23:00")));
        assert!(night.covers(t("01:00")));
        assert!(!night.covers(t("02:00")));
        assert!(!night.covers(t("12:00")));
    }

    #[test]
    fn test_cancelled_is_inert() {
        let s = Shift::new(1, 0, t("11:00"), t("15:00")).with_status(ShiftStatus::Cancelled);
        assert!(!s.is_active());
        assert!(Shift::new(2, 0, t("11:00"), t("15:00")).is_active());
    }

    #[test]
    fn test_status_wire_format() {
        let s = Shift::new(1, 0, t("11:00"), t("15:00")).with_employee(4);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["start"], "11:00");
        assert_eq!(json["end"], "15:00");

        let back: Shift = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
