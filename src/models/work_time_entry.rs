//! Work-time entry model.
//!
//! This module defines the [`WorkTimeEntry`] struct representing one user's
//! work-time record for one date, as produced by the tracking service.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::TimeOffKind;

/// Represents a work-time record for one user on one date.
///
/// Times may be absent for days without clock events (e.g. full-day leave
/// entries). The time-off classification is stored as the raw code; use
/// [`WorkTimeEntry::time_off_kind`] to interpret it.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{TimeOffKind, WorkTimeEntry};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let entry = WorkTimeEntry::new(
///     "amaier",
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
///     Some(NaiveTime::from_hms_opt(17, 30, 0).unwrap()),
///     30,
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(entry.worked_minutes(), Some(480));
/// assert_eq!(entry.time_off_kind(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeEntry {
    /// The login name of the user the entry belongs to.
    pub username: String,
    /// The date the entry is recorded for.
    pub date: NaiveDate,
    /// Clock-in time, if the user clocked in on this date.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time, if the user clocked out on this date.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Unpaid pause in minutes.
    #[serde(default)]
    pub pause_minutes: u32,
    /// Time-off classification code (e.g. "SN", "CO"), if the entry
    /// represents leave rather than worked time.
    #[serde(default)]
    pub time_off_code: Option<String>,
}

impl WorkTimeEntry {
    /// Creates a validated work-time entry.
    ///
    /// # Arguments
    ///
    /// * `username` - The login name of the user; must not be empty
    /// * `date` - The date the entry is recorded for
    /// * `start_time` - Optional clock-in time
    /// * `end_time` - Optional clock-out time; must be after `start_time`
    ///   when both are present
    /// * `pause_minutes` - Unpaid pause in minutes
    /// * `time_off_code` - Optional time-off classification code
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if the username is empty or the
    /// times are inconsistent.
    pub fn new(
        username: impl Into<String>,
        date: NaiveDate,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        pause_minutes: u32,
        time_off_code: Option<String>,
    ) -> EngineResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(EngineError::InvalidEntry {
                field: "username".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if let (Some(start), Some(end)) = (start_time, end_time) {
            if end <= start {
                return Err(EngineError::InvalidEntry {
                    field: "end_time".to_string(),
                    message: format!("must be after start time {start}"),
                });
            }
        }

        Ok(Self {
            username,
            date,
            start_time,
            end_time,
            pause_minutes,
            time_off_code,
        })
    }

    /// Interprets the stored classification code.
    ///
    /// Returns `None` when the entry carries no code or the code is not one
    /// of the recognized classifications; unrecognized codes are tolerated,
    /// not rejected.
    pub fn time_off_kind(&self) -> Option<TimeOffKind> {
        self.time_off_code
            .as_deref()
            .and_then(TimeOffKind::from_code)
    }

    /// Returns the worked minutes for this entry, net of the pause.
    ///
    /// Returns `None` when either clock time is absent.
    pub fn worked_minutes(&self) -> Option<i64> {
        let (start, end) = (self.start_time?, self.end_time?);
        Some((end - start).num_minutes() - i64::from(self.pause_minutes))
    }
}
