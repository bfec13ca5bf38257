//! Scheduling domain models.
//!
//! The record types the core consumes and produces: work shifts, roster
//! members, and the process-wide scheduling rules. All state is owned by
//! the caller; the core reads immutable snapshots of these types and never
//! holds a reference across calls.

mod employee;
mod rules;
mod shift;

pub use employee::{Employee, TimeOfDay};
pub use rules::{ScheduleRules, DAYS_PER_WEEK};
pub use shift::{EmployeeId, Shift, ShiftId, ShiftStatus};
