//! Session entities.
//!
//! This module defines the persistence-shaped records for user sessions:
//! [`UserSessionStatus`] mirrors the session-status table, and
//! [`ContinuationPoint`] marks work sessions left open across midnight or
//! pending overtime review. Both are plain records; translation to and from
//! storage rows lives in [`crate::storage`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Login state of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSessionStatus {
    /// Storage identity of this record.
    pub id: Uuid,
    /// The login name of the user.
    pub username: String,
    /// Whether the user currently has an active session.
    pub signed_in: bool,
    /// Timestamp of the user's last recorded action.
    pub last_seen: NaiveDateTime,
}

impl UserSessionStatus {
    /// Creates a validated session status record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if the username is empty.
    pub fn new(
        id: Uuid,
        username: impl Into<String>,
        signed_in: bool,
        last_seen: NaiveDateTime,
    ) -> EngineResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(EngineError::InvalidEntry {
                field: "username".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(Self {
            id,
            username,
            signed_in,
            last_seen,
        })
    }
}

/// Why a work session was left unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContinuationReason {
    /// The session ran past midnight and must be split across dates.
    MidnightRollover,
    /// The session exceeded the daily target and awaits overtime review.
    OvertimeReview,
}

impl std::fmt::Display for ContinuationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContinuationReason::MidnightRollover => write!(f, "midnight rollover"),
            ContinuationReason::OvertimeReview => write!(f, "overtime review"),
        }
    }
}

/// A work session awaiting later resolution.
///
/// Resolution itself happens in the session service; this crate only carries
/// the record between that service and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuationPoint {
    /// Storage identity of this record.
    pub id: Uuid,
    /// The login name of the user whose session is unresolved.
    pub username: String,
    /// The work date the session was opened for.
    pub work_date: NaiveDate,
    /// When the unresolved session was opened.
    pub opened_at: NaiveDateTime,
    /// Why the session needs resolution.
    pub reason: ContinuationReason,
}

impl ContinuationPoint {
    /// Creates a validated continuation point.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if the username is empty or the
    /// opening timestamp predates the work date.
    pub fn new(
        id: Uuid,
        username: impl Into<String>,
        work_date: NaiveDate,
        opened_at: NaiveDateTime,
        reason: ContinuationReason,
    ) -> EngineResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(EngineError::InvalidEntry {
                field: "username".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if opened_at.date() < work_date {
            return Err(EngineError::InvalidEntry {
                field: "opened_at".to_string(),
                message: format!("must not predate work date {work_date}"),
            });
        }
        Ok(Self {
            id,
            username,
            work_date,
            opened_at,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_session_status_rejects_empty_username() {
        let result = UserSessionStatus::new(
            Uuid::new_v4(),
            "",
            true,
            make_datetime("2026-01-15 09:00:00"),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidEntry { ref field, .. }) if field == "username"
        ));
    }

    #[test]
    fn test_session_status_round_trips_through_json() {
        let status = UserSessionStatus::new(
            Uuid::new_v4(),
            "amaier",
            true,
            make_datetime("2026-01-15 09:00:00"),
        )
        .unwrap();

        let json = serde_json::to_string(&status).unwrap();
        let deserialized: UserSessionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }

    #[test]
    fn test_continuation_point_rejects_opening_before_work_date() {
        let result = ContinuationPoint::new(
            Uuid::new_v4(),
            "amaier",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            make_datetime("2026-01-14 23:50:00"),
            ContinuationReason::MidnightRollover,
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidEntry { ref field, .. }) if field == "opened_at"
        ));
    }

    #[test]
    fn test_continuation_point_allows_opening_after_midnight() {
        // A session opened on the work date and resolved the next day is the
        // normal midnight rollover shape.
        let point = ContinuationPoint::new(
            Uuid::new_v4(),
            "amaier",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            make_datetime("2026-01-15 22:00:00"),
            ContinuationReason::MidnightRollover,
        )
        .unwrap();
        assert_eq!(point.reason, ContinuationReason::MidnightRollover);
    }

    #[test]
    fn test_continuation_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&ContinuationReason::MidnightRollover).unwrap(),
            "\"midnight_rollover\""
        );
        assert_eq!(
            serde_json::to_string(&ContinuationReason::OvertimeReview).unwrap(),
            "\"overtime_review\""
        );
    }

    #[test]
    fn test_continuation_reason_display() {
        assert_eq!(
            format!("{}", ContinuationReason::MidnightRollover),
            "midnight rollover"
        );
        assert_eq!(
            format!("{}", ContinuationReason::OvertimeReview),
            "overtime review"
        );
    }
}
