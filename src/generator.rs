//! Automatic schedule generation.
//!
//! Proposes a non-conflicting set of shifts covering a day's priority time
//! blocks. The pass is deterministic and greedy — a best-effort fill, not a
//! solver: no backtracking, no optimality guarantee. The caller decides
//! whether to accept the proposal and commit it.
//!
//! # Algorithm
//!
//! 1. Drop the day's existing shifts from consideration (the caller decides
//!    whether to actually delete them).
//! 2. Walk the day's priority blocks in order.
//! 3. For each block, scan employees sorted by ascending accumulated weekly
//!    hours (ties keep roster order) and accept the first N who are
//!    available, under the weekly cap, under the per-day headcount cap, and
//!    whose time-of-day preference matches the block.
//! 4. Emit one confirmed shift per block that found at least one employee;
//!    blocks with none are skipped, so the returned list can be shorter
//!    than the block list.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::availability::is_available;
use crate::hours::weekly_hours;
use crate::models::{Employee, EmployeeId, ScheduleRules, Shift, ShiftId, TimeOfDay};
use crate::time::{duration_hours, ClockTime};

/// A staffing target: a time range with a required headcount and the
/// time-of-day band it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBlock {
    /// Human-readable block name.
    pub label: String,
    /// Block start.
    pub start: ClockTime,
    /// Block end (exclusive; before `start` means it crosses midnight).
    pub end: ClockTime,
    /// Employees the block should be staffed with.
    pub required: usize,
    /// Band used to match employee preferences.
    pub period: TimeOfDay,
}

impl TimeBlock {
    /// Creates a block.
    pub fn new(
        label: impl Into<String>,
        start: ClockTime,
        end: ClockTime,
        required: usize,
        period: TimeOfDay,
    ) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            required,
            period,
        }
    }

    /// Block length in hours.
    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.start, self.end)
    }
}

/// The ordered priority blocks for a day.
///
/// Lunch and dinner peaks come first; headcounts scale up on extended and
/// weekend days. Extended days split the late block so the long tail to the
/// 07:00 close is staffed separately.
pub fn priority_blocks(day: u8, rules: &ScheduleRules) -> Vec<TimeBlock> {
    let busy = rules.is_extended_day(day) || day >= 5;
    let staff = |quiet: usize| if busy { quiet + 1 } else { quiet };

    let t = |h, m| ClockTime::from_hm(h, m).unwrap_or(ClockTime::MIDNIGHT);
    let mut blocks = vec![
        TimeBlock::new("lunch", t(11, 0), t(15, 0), staff(2), TimeOfDay::Morning),
        TimeBlock::new("dinner", t(18, 0), t(22, 0), staff(2), TimeOfDay::Evening),
        TimeBlock::new("afternoon", t(15, 0), t(18, 0), staff(1), TimeOfDay::Morning),
    ];
    if rules.is_extended_day(day) {
        blocks.push(TimeBlock::new(
            "late",
            t(22, 0),
            t(3, 0),
            staff(1),
            TimeOfDay::Night,
        ));
        blocks.push(TimeBlock::new(
            "closing",
            t(3, 0),
            rules.extended_closing_time,
            1,
            TimeOfDay::Night,
        ));
    } else {
        blocks.push(TimeBlock::new(
            "late",
            t(22, 0),
            rules.standard_closing_time,
            staff(1),
            TimeOfDay::Night,
        ));
    }
    blocks
}

/// Proposes shifts for a day using its standard priority blocks.
///
/// `shifts` is the full current shift set; the day's own shifts are removed
/// from consideration and the rest constrain weekly hours. IDs for the
/// proposed shifts count up from `next_id`.
pub fn generate(
    shifts: &[Shift],
    employees: &[Employee],
    day: u8,
    rules: &ScheduleRules,
    next_id: ShiftId,
) -> Vec<Shift> {
    let other_days: Vec<Shift> = shifts.iter().filter(|s| s.day != day).cloned().collect();
    fill_blocks(
        &other_days,
        employees,
        day,
        rules,
        &priority_blocks(day, rules),
        next_id,
    )
}

/// Fills an explicit block list against a fixed background shift set.
///
/// The inner pass behind [`generate`], exposed so callers can fill a custom
/// block list. `background` must not contain shifts on `day` that the
/// proposal is meant to replace.
pub fn fill_blocks(
    background: &[Shift],
    employees: &[Employee],
    day: u8,
    rules: &ScheduleRules,
    blocks: &[TimeBlock],
    next_id: ShiftId,
) -> Vec<Shift> {
    let mut proposed: Vec<Shift> = Vec::new();
    let mut next = next_id;

    for block in blocks {
        let block_hours = block.duration_hours();
        let mut day_headcount: BTreeSet<EmployeeId> = proposed
            .iter()
            .flat_map(|s| s.employee_ids.iter().copied())
            .collect();

        // Least-loaded first; stable sort keeps roster order on ties.
        let accumulated: Vec<f64> = employees
            .iter()
            .map(|e| weekly_hours(background, e.id) + weekly_hours(&proposed, e.id))
            .collect();
        let mut order: Vec<usize> = (0..employees.len()).collect();
        order.sort_by(|&a, &b| accumulated[a].total_cmp(&accumulated[b]));

        let mut accepted: Vec<EmployeeId> = Vec::new();
        for idx in order {
            if accepted.len() == block.required {
                break;
            }
            let employee = &employees[idx];
            if !employee.matches_period(block.period) {
                continue;
            }
            if accumulated[idx] + block_hours > rules.max_weekly_hours_per_employee + 1e-9 {
                continue;
            }
            if !day_headcount.contains(&employee.id)
                && day_headcount.len() >= rules.max_employees_per_day
            {
                continue;
            }
            if !is_available(background, employee.id, day, block.start, block.end, None)
                || !is_available(&proposed, employee.id, day, block.start, block.end, None)
            {
                continue;
            }
            day_headcount.insert(employee.id);
            accepted.push(employee.id);
        }

        if accepted.is_empty() {
            tracing::debug!(block = %block.label, day, "no eligible employee, block skipped");
            continue;
        }
        tracing::debug!(
            block = %block.label,
            day,
            assigned = accepted.len(),
            required = block.required,
            "block staffed"
        );
        proposed.push(
            Shift::new(next, day, block.start, block.end).with_employees(accepted),
        );
        next += 1;
    }

    proposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::detect_conflicts;
    use crate::models::ShiftStatus;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn roster(n: u32) -> Vec<Employee> {
        (1..=n).map(|id| Employee::new(id, format!("E{id}"))).collect()
    }

    fn lunch_and_dinner() -> Vec<TimeBlock> {
        vec![
            TimeBlock::new("lunch", t("11:00"), t("15:00"), 1, TimeOfDay::Morning),
            TimeBlock::new("dinner", t("18:00"), t("22:00"), 1, TimeOfDay::Evening),
        ]
    }

    #[test]
    fn test_priority_blocks_scale_with_day_type() {
        let rules = ScheduleRules::default();

        let monday = priority_blocks(0, &rules);
        assert_eq!(monday.len(), 4);
        assert_eq!(monday[0].label, "lunch");
        assert_eq!(monday[0].required, 2);
        assert_eq!(monday.last().map(|b| b.end), Some(t("02:00")));

        let thursday = priority_blocks(3, &rules);
        assert_eq!(thursday.len(), 5);
        assert_eq!(thursday[0].required, 3);
        assert_eq!(thursday.last().map(|b| b.end), Some(t("07:00")));
    }

    #[test]
    fn test_preferences_route_employees_to_blocks() {
        // Spec scenario: Thursday, no existing shifts, one morning person
        // and one evening person; lunch takes the morning one, dinner the
        // evening one, with sequential IDs.
        let employees = vec![
            Employee::new(1, "Morning")
                .with_weekly_hours(40.0)
                .with_preference(TimeOfDay::Morning),
            Employee::new(2, "Evening")
                .with_weekly_hours(40.0)
                .with_preference(TimeOfDay::Evening),
        ];
        let rules = ScheduleRules::default();

        let out = fill_blocks(&[], &employees, 3, &rules, &lunch_and_dinner(), 100);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 100);
        assert_eq!(out[0].employee_ids, vec![1]);
        assert_eq!(out[1].id, 101);
        assert_eq!(out[1].employee_ids, vec![2]);
        assert!(out.iter().all(|s| s.status == ShiftStatus::Confirmed));
    }

    #[test]
    fn test_least_loaded_employee_preferred() {
        // Employee 1 already has 8h on Monday; employee 2 has none.
        let existing = vec![Shift::new(1, 0, t("11:00"), t("19:00")).with_employee(1)];
        let blocks = vec![TimeBlock::new(
            "lunch",
            t("11:00"),
            t("15:00"),
            1,
            TimeOfDay::Morning,
        )];

        let out = fill_blocks(&existing, &roster(2), 2, &ScheduleRules::default(), &blocks, 10);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_ids, vec![2]);
    }

    #[test]
    fn test_ties_resolve_by_roster_order() {
        let blocks = vec![TimeBlock::new(
            "lunch",
            t("11:00"),
            t("15:00"),
            1,
            TimeOfDay::Morning,
        )];
        let out = fill_blocks(&[], &roster(3), 0, &ScheduleRules::default(), &blocks, 1);
        assert_eq!(out[0].employee_ids, vec![1]);
    }

    #[test]
    fn test_weekly_cap_never_violated() {
        // Employee 1 already has 38h; a 4h block would push past 40.
        let existing: Vec<Shift> = (0..5)
            .map(|d| Shift::new(d as u32 + 1, d, t("11:00"), t("18:36")).with_employee(1))
            .collect();
        let blocks = vec![TimeBlock::new(
            "lunch",
            t("11:00"),
            t("15:00"),
            1,
            TimeOfDay::Morning,
        )];
        let rules = ScheduleRules::default();

        let out = fill_blocks(&existing, &roster(2), 5, &rules, &blocks, 10);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_ids, vec![2]);

        // And with nobody else left the block goes unstaffed.
        let alone = fill_blocks(&existing, &roster(1), 5, &rules, &blocks, 10);
        assert!(alone.is_empty());
    }

    #[test]
    fn test_cap_counts_shifts_proposed_in_same_pass() {
        // Cap of 7h: one 4h block fits, a second 4h block would exceed it.
        let mut rules = ScheduleRules::default();
        rules.max_weekly_hours_per_employee = 7.0;
        let blocks = vec![
            TimeBlock::new("lunch", t("11:00"), t("15:00"), 1, TimeOfDay::Morning),
            TimeBlock::new("afternoon", t("15:00"), t("19:00"), 1, TimeOfDay::Morning),
        ];

        let out = fill_blocks(&[], &roster(1), 0, &rules, &blocks, 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, t("11:00"));
    }

    #[test]
    fn test_unsatisfiable_block_shortens_output() {
        // Only a morning-preferring employee: the dinner block is skipped
        // and the output is shorter than the block list.
        let employees = vec![Employee::new(1, "M").with_preference(TimeOfDay::Morning)];
        let out = fill_blocks(
            &[],
            &employees,
            0,
            &ScheduleRules::default(),
            &lunch_and_dinner(),
            1,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, t("11:00"));
    }

    #[test]
    fn test_overlapping_blocks_do_not_double_book() {
        let blocks = vec![
            TimeBlock::new("a", t("11:00"), t("15:00"), 1, TimeOfDay::Morning),
            TimeBlock::new("b", t("14:00"), t("18:00"), 1, TimeOfDay::Morning),
        ];
        let out = fill_blocks(&[], &roster(1), 0, &ScheduleRules::default(), &blocks, 1);
        // The single employee is busy over 14:00-15:00, so block b is
        // skipped instead of double-booking.
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_generated_day_has_no_conflicts() {
        let employees = roster(8);
        let rules = ScheduleRules::default();
        let out = generate(&[], &employees, 4, &rules, 1);

        assert!(!out.is_empty());
        assert!(detect_conflicts(&out, &employees, 4).is_empty());
    }

    #[test]
    fn test_generate_replaces_day_and_ignores_existing_day_shifts() {
        // An existing Monday shift for employee 1 is dropped from
        // consideration, so employee 1 stays eligible for Monday blocks.
        let existing = vec![Shift::new(1, 0, t("11:00"), t("19:00")).with_employee(1)];
        let out = generate(&existing, &roster(1), 0, &ScheduleRules::default(), 50);
        assert!(out.iter().any(|s| s.has_employee(1)));
    }

    #[test]
    fn test_per_day_headcount_cap() {
        let mut rules = ScheduleRules::default();
        rules.max_employees_per_day = 2;
        let out = generate(&[], &roster(10), 0, &rules, 1);

        let distinct: BTreeSet<EmployeeId> = out
            .iter()
            .flat_map(|s| s.employee_ids.iter().copied())
            .collect();
        assert!(distinct.len() <= 2);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let employees = roster(6);
        let rules = ScheduleRules::default();
        let a = generate(&[], &employees, 5, &rules, 1);
        let b = generate(&[], &employees, 5, &rules, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_are_sequential_from_next_id() {
        let out = generate(&[], &roster(8), 2, &ScheduleRules::default(), 42);
        for (i, s) in out.iter().enumerate() {
            assert_eq!(s.id, 42 + i as u32);
        }
    }
}
