//! Counting logic for the Worktime Engine.
//!
//! This module contains the time-off day counter used for leave statistics:
//! one shared classification rule with three entry points, covering a flat
//! sequence of entries, a date-keyed calendar of display records, and a
//! per-user map used for organization-wide totals.

mod time_off_days;

pub use time_off_days::{count_across_users, count_from_display_records, count_from_entries};
