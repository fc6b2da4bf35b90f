//! Display record model for calendar rendering.
//!
//! This module defines [`WorkTimeDisplayRecord`], the per-date wrapper the
//! presentation layer renders: one possibly-absent raw entry plus the flags
//! derived for it when the calendar was assembled.

use serde::{Deserialize, Serialize};

use crate::models::WorkTimeEntry;

/// A per-date display record combining a raw entry with presentation flags.
///
/// Calendars render one record per date, including dates with no underlying
/// entry (weekends, future days). The `has_entry` and `is_time_off` flags are
/// derived once when the record is assembled and stored, so consumers gate on
/// the flags rather than re-inspecting the wrapped entry.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{WorkTimeDisplayRecord, WorkTimeEntry};
/// use chrono::NaiveDate;
///
/// let entry = WorkTimeEntry::new(
///     "amaier",
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     None,
///     None,
///     0,
///     Some("SN".to_string()),
/// )
/// .unwrap();
///
/// let record = WorkTimeDisplayRecord::from_entry(entry, "Thu 01.01.");
/// assert!(record.has_entry);
/// assert!(record.is_time_off);
///
/// let weekend = WorkTimeDisplayRecord::empty("Sat 03.01.");
/// assert!(!weekend.has_entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeDisplayRecord {
    /// The wrapped raw entry, absent for placeholder dates.
    #[serde(default)]
    pub entry: Option<WorkTimeEntry>,
    /// Whether a raw entry is present for this date.
    pub has_entry: bool,
    /// Whether the record represents time off rather than worked time.
    pub is_time_off: bool,
    /// Preformatted date label for the calendar row.
    pub label: String,
}

impl WorkTimeDisplayRecord {
    /// Creates a display record wrapping an entry, deriving the flags.
    pub fn from_entry(entry: WorkTimeEntry, label: impl Into<String>) -> Self {
        let is_time_off = entry.time_off_kind().is_some();
        Self {
            entry: Some(entry),
            has_entry: true,
            is_time_off,
            label: label.into(),
        }
    }

    /// Creates a placeholder record for a date with no entry.
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            entry: None,
            has_entry: false,
            is_time_off: false,
            label: label.into(),
        }
    }
}
