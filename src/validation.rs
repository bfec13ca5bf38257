//! Input validation for schedule snapshots.
//!
//! Checks structural integrity of the shift and employee records before
//! the scheduling queries run. Detects:
//! - Duplicate shift or employee IDs
//! - Shifts with nobody assigned
//! - References to employees missing from the roster
//! - Day indices outside the weekly cycle
//! - Zero-length shifts and shifts over the single-shift hour limit
//! - Employees scheduled past the weekly hour cap
//!
//! Problems are accumulated and returned together; the caller decides which
//! are blocking and which are warnings to surface.

use std::collections::HashSet;

use crate::hours::over_weekly_cap;
use crate::models::{Employee, ScheduleRules, Shift, DAYS_PER_WEEK};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two shifts share the same ID.
    DuplicateShiftId,
    /// Two roster entries share the same ID.
    DuplicateEmployeeId,
    /// A shift has an empty employee set.
    EmptyAssignment,
    /// A shift references an employee missing from the roster.
    UnknownEmployee,
    /// A shift's day index is outside 0..=6.
    DayOutOfRange,
    /// A shift's time range has zero duration.
    NonPositiveDuration,
    /// A shift is longer than the configured single-shift maximum.
    ExcessiveDuration,
    /// An employee's scheduled total exceeds the weekly hour cap.
    WeeklyCapExceeded,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule snapshot.
///
/// An empty employee set is reported rather than silently substituted with
/// a default employee; committing such a shift is a caller policy decision.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(
    shifts: &[Shift],
    employees: &[Employee],
    rules: &ScheduleRules,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    for e in employees {
        if !employee_ids.insert(e.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmployeeId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
    }

    let mut shift_ids = HashSet::new();
    for s in shifts {
        if !shift_ids.insert(s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateShiftId,
                format!("Duplicate shift ID: {}", s.id),
            ));
        }

        if s.employee_ids.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyAssignment,
                format!("Shift {} has no employees assigned", s.id),
            ));
        }

        for &id in &s.employee_ids {
            if !employee_ids.contains(&id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownEmployee,
                    format!("Shift {} references unknown employee {}", s.id, id),
                ));
            }
        }

        if s.day >= DAYS_PER_WEEK {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOutOfRange,
                format!("Shift {} has day index {} (expected 0..=6)", s.id, s.day),
            ));
        }

        let hours = s.duration_hours();
        if hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Shift {} has zero duration ({} to {})", s.id, s.start, s.end),
            ));
        } else if hours > rules.max_shift_hours {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExcessiveDuration,
                format!(
                    "Shift {} runs {:.1}h, over the {:.1}h limit",
                    s.id, hours, rules.max_shift_hours
                ),
            ));
        }
    }

    for (id, total) in over_weekly_cap(shifts, employees, rules) {
        errors.push(ValidationError::new(
            ValidationErrorKind::WeeklyCapExceeded,
            format!(
                "Employee {} is scheduled {:.1}h, over the {:.1}h weekly cap",
                id, total, rules.max_weekly_hours_per_employee
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "schedule snapshot failed validation");
        Err(errors)
    }
}
