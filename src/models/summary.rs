//! Worktime summary model.
//!
//! This module defines [`WorktimeSummary`], the per-user reporting DTO that
//! aggregates one period's worked time against its target and embeds the
//! period's time-off day counts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::TimeOffDayCounts;

/// Per-user worktime totals for one reporting period.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{TimeOffDayCounts, WorktimeSummary};
/// use chrono::NaiveDate;
///
/// let summary = WorktimeSummary::new(
///     "amaier",
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     9600,
///     9750,
///     TimeOffDayCounts::new(1, 2, 0),
/// )
/// .unwrap();
///
/// assert_eq!(summary.surplus_minutes(), 150);
/// assert_eq!(summary.surplus_formatted(), "+02:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorktimeSummary {
    /// The login name of the user the summary belongs to.
    pub username: String,
    /// First date of the reporting period (inclusive).
    pub period_start: NaiveDate,
    /// Last date of the reporting period (inclusive).
    pub period_end: NaiveDate,
    /// Contracted target minutes for the period.
    pub target_minutes: i64,
    /// Minutes actually worked in the period.
    pub worked_minutes: i64,
    /// Leave days counted within the period.
    #[serde(default)]
    pub time_off: TimeOffDayCounts,
}

impl WorktimeSummary {
    /// Creates a validated summary.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if the username is empty, the
    /// period is inverted, or either minute total is negative.
    pub fn new(
        username: impl Into<String>,
        period_start: NaiveDate,
        period_end: NaiveDate,
        target_minutes: i64,
        worked_minutes: i64,
        time_off: TimeOffDayCounts,
    ) -> EngineResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(EngineError::InvalidEntry {
                field: "username".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if period_end < period_start {
            return Err(EngineError::InvalidEntry {
                field: "period_end".to_string(),
                message: format!("must not precede period start {period_start}"),
            });
        }
        if target_minutes < 0 {
            return Err(EngineError::InvalidEntry {
                field: "target_minutes".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if worked_minutes < 0 {
            return Err(EngineError::InvalidEntry {
                field: "worked_minutes".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(Self {
            username,
            period_start,
            period_end,
            target_minutes,
            worked_minutes,
            time_off,
        })
    }

    /// Returns worked minutes minus target minutes; negative when the user
    /// is under target.
    pub fn surplus_minutes(&self) -> i64 {
        self.worked_minutes - self.target_minutes
    }

    /// Formats the surplus as a signed `HH:MM` string (e.g. `+02:30`,
    /// `-00:45`).
    pub fn surplus_formatted(&self) -> String {
        let surplus = self.surplus_minutes();
        let sign = if surplus < 0 { '-' } else { '+' };
        let abs = surplus.abs();
        format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}
