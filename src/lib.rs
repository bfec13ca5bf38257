//! Shift scheduling core.
//!
//! The rules that decide whether a set of work shifts is internally
//! consistent (no employee double-booked), whether a day's staffing meets
//! operating requirements, and how to fill empty time slots with employees
//! on demand. Everything here is a pure query over an immutable snapshot
//! the caller passes in: the core performs no I/O, owns no state, and
//! never creates or destroys a shift on its own — the generator only
//! *proposes* shifts for the caller to accept.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Shift`, `Employee`, `ScheduleRules`
//! - **`time`**: `"HH:MM"` arithmetic with uniform past-midnight wrapping
//! - **`availability`**: "is this employee free for this range" queries
//! - **`conflict`**: double-booking detection, per day or per week
//! - **`coverage`**: per-slot staffing analysis and day status
//! - **`hours`**: weekly hour aggregation and cap alerting
//! - **`generator`**: deterministic greedy fill of priority time blocks
//! - **`summary`**: week-at-a-glance day summaries
//! - **`validation`**: snapshot integrity checks
//!
//! # Error model
//!
//! Malformed `"HH:MM"` strings are rejected when parsed into
//! [`time::ClockTime`]; past that boundary every operation is infallible.
//! Conflicts, coverage gaps, and unsatisfiable generation targets are not
//! errors — they are the structured results this crate exists to report.

pub mod availability;
pub mod conflict;
pub mod coverage;
pub mod generator;
pub mod hours;
pub mod models;
pub mod summary;
pub mod time;
pub mod validation;
