//! Week-at-a-glance reporting.
//!
//! Condenses each day's staffing into a small read-only summary for the
//! caller's overview views. Derived entirely from the coverage analysis and
//! the day's scheduled employee-hours.

use serde::Serialize;

use crate::coverage::{analyze_day, DayStatus};
use crate::models::{EmployeeId, ScheduleRules, Shift, DAYS_PER_WEEK};

/// Read-only staffing summary for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    /// Weekday (0 = Monday .. 6 = Sunday).
    pub day: u8,
    /// Distinct employees scheduled on the day.
    pub employee_count: usize,
    /// Total scheduled employee-hours (shift duration times assignees).
    pub total_hours: f64,
    /// Fill percentage from the coverage analysis.
    pub filling_percentage: f64,
    /// Coverage status, escalated to `incomplete` when the day's total
    /// hours fall below `min_hours_per_day`.
    pub status: DayStatus,
}

/// Summarizes one day.
pub fn day_summary(shifts: &[Shift], day: u8, rules: &ScheduleRules) -> DaySummary {
    let coverage = analyze_day(shifts, day, rules);

    let day_shifts: Vec<&Shift> = shifts
        .iter()
        .filter(|s| s.is_active() && s.day == day)
        .collect();

    let mut seen: Vec<EmployeeId> = day_shifts
        .iter()
        .flat_map(|s| s.employee_ids.iter().copied())
        .collect();
    seen.sort_unstable();
    seen.dedup();

    let total_hours: f64 = day_shifts
        .iter()
        .map(|s| s.duration_hours() * s.employee_ids.len() as f64)
        .sum();

    let status = if total_hours < rules.min_hours_per_day {
        DayStatus::Incomplete
    } else {
        coverage.status
    };

    DaySummary {
        day,
        employee_count: seen.len(),
        total_hours,
        filling_percentage: coverage.filling_percentage,
        status,
    }
}

/// Summarizes the whole week, day 0 through 6.
pub fn week_summary(shifts: &[Shift], rules: &ScheduleRules) -> Vec<DaySummary> {
    (0..DAYS_PER_WEEK)
        .map(|day| day_summary(shifts, day, rules))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ClockTime;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn staffed_day(day: u8) -> Vec<Shift> {
        vec![
            Shift::new(1, day, t("11:00"), t("19:00")).with_employees([1, 2]),
            Shift::new(2, day, t("19:00"), t("02:00")).with_employees([3, 4]),
        ]
    }

    #[test]
    fn test_staffed_day_summary() {
        let s = day_summary(&staffed_day(0), 0, &ScheduleRules::default());
        assert_eq!(s.day, 0);
        assert_eq!(s.employee_count, 4);
        // 8h * 2 + 7h * 2
        assert!((s.total_hours - 30.0).abs() < 1e-10);
        assert_eq!(s.status, DayStatus::Good);
        assert!((s.filling_percentage - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_employees_counted_once_across_shifts() {
        let shifts = vec![
            Shift::new(1, 0, t("11:00"), t("15:00")).with_employee(1),
            Shift::new(2, 0, t("15:00"), t("19:00")).with_employee(1),
        ];
        let s = day_summary(&shifts, 0, &ScheduleRules::default());
        assert_eq!(s.employee_count, 1);
        assert!((s.total_hours - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_thin_day_escalates_to_incomplete() {
        let mut rules = ScheduleRules::default();
        rules.min_hours_per_day = 40.0;
        let s = day_summary(&staffed_day(0), 0, &rules);
        assert_eq!(s.status, DayStatus::Incomplete);
    }

    #[test]
    fn test_week_summary_covers_all_days() {
        let shifts = staffed_day(2);
        let week = week_summary(&shifts, &ScheduleRules::default());
        assert_eq!(week.len(), 7);
        assert_eq!(week[2].status, DayStatus::Good);
        assert!(week
            .iter()
            .enumerate()
            .all(|(i, s)| s.day == i as u8));
        assert_eq!(week[0].status, DayStatus::Incomplete);
    }
}
