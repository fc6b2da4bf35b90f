//! Time-off classification and day-count models.
//!
//! This module defines the [`TimeOffKind`] enum for the recognized leave
//! classifications and the [`TimeOffDayCounts`] value object returned by the
//! counting operations in [`crate::counting`].

use serde::{Deserialize, Serialize};

/// Represents the recognized time-off classifications.
///
/// Classification codes arrive as opaque strings on work-time entries and are
/// parsed tolerantly with [`TimeOffKind::from_code`]: unrecognized codes yield
/// `None` rather than an error, since entry data is validated upstream.
///
/// # Example
///
/// ```
/// use worktime_engine::models::TimeOffKind;
///
/// assert_eq!(TimeOffKind::from_code("SN"), Some(TimeOffKind::NationalHoliday));
/// assert_eq!(TimeOffKind::from_code("sick?"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffKind {
    /// National holiday, code "SN".
    NationalHoliday,
    /// Vacation / paid leave, code "CO".
    Vacation,
    /// Medical (sick) leave, code "CM".
    MedicalLeave,
    /// Special-event leave, code "CE". Counted in the vacation bucket
    /// for summary totals.
    SpecialEvent,
}

impl TimeOffKind {
    /// Parses a classification code into a [`TimeOffKind`].
    ///
    /// Codes are matched case-insensitively after trimming surrounding
    /// whitespace. Any value outside the four recognized codes returns
    /// `None`.
    ///
    /// # Arguments
    ///
    /// * `code` - The classification code as stored on an entry
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::models::TimeOffKind;
    ///
    /// assert_eq!(TimeOffKind::from_code("co"), Some(TimeOffKind::Vacation));
    /// assert_eq!(TimeOffKind::from_code(" CM "), Some(TimeOffKind::MedicalLeave));
    /// assert_eq!(TimeOffKind::from_code(""), None);
    /// ```
    pub fn from_code(code: &str) -> Option<TimeOffKind> {
        let code = code.trim();
        if code.eq_ignore_ascii_case("SN") {
            Some(TimeOffKind::NationalHoliday)
        } else if code.eq_ignore_ascii_case("CO") {
            Some(TimeOffKind::Vacation)
        } else if code.eq_ignore_ascii_case("CM") {
            Some(TimeOffKind::MedicalLeave)
        } else if code.eq_ignore_ascii_case("CE") {
            Some(TimeOffKind::SpecialEvent)
        } else {
            None
        }
    }

    /// Returns the canonical storage code for this classification.
    pub fn code(&self) -> &'static str {
        match self {
            TimeOffKind::NationalHoliday => "SN",
            TimeOffKind::Vacation => "CO",
            TimeOffKind::MedicalLeave => "CM",
            TimeOffKind::SpecialEvent => "CE",
        }
    }
}

impl std::fmt::Display for TimeOffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOffKind::NationalHoliday => write!(f, "National holiday"),
            TimeOffKind::Vacation => write!(f, "Vacation"),
            TimeOffKind::MedicalLeave => write!(f, "Medical leave"),
            TimeOffKind::SpecialEvent => write!(f, "Special event"),
        }
    }
}

/// Tally of leave days by category.
///
/// Produced fresh by each counting operation; the counts have no identity
/// beyond their values. `total_days` always equals the sum of the three
/// buckets.
///
/// # Example
///
/// ```
/// use worktime_engine::models::TimeOffDayCounts;
///
/// let counts = TimeOffDayCounts::new(1, 2, 0);
/// assert_eq!(counts.total_days(), 3);
/// assert!(counts.has_any_days());
/// assert!(!TimeOffDayCounts::default().has_any_days());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeOffDayCounts {
    /// Number of national-holiday days.
    pub sn_days: u32,
    /// Number of vacation days (including special-event days).
    pub co_days: u32,
    /// Number of medical-leave days.
    pub cm_days: u32,
}

impl TimeOffDayCounts {
    /// Creates counts from the three bucket values.
    pub fn new(sn_days: u32, co_days: u32, cm_days: u32) -> Self {
        Self {
            sn_days,
            co_days,
            cm_days,
        }
    }

    /// Returns the total number of counted leave days.
    pub fn total_days(&self) -> u32 {
        self.sn_days + self.co_days + self.cm_days
    }

    /// Returns true if any bucket is non-zero.
    pub fn has_any_days(&self) -> bool {
        self.total_days() > 0
    }

    /// Increments the bucket for the given classification.
    ///
    /// Special-event days are folded into the vacation bucket; the two are
    /// accounting-equivalent for summary purposes.
    pub(crate) fn record(&mut self, kind: TimeOffKind) {
        match kind {
            TimeOffKind::NationalHoliday => self.sn_days += 1,
            TimeOffKind::Vacation | TimeOffKind::SpecialEvent => self.co_days += 1,
            TimeOffKind::MedicalLeave => self.cm_days += 1,
        }
    }
}

impl std::ops::Add for TimeOffDayCounts {
    type Output = TimeOffDayCounts;

    fn add(self, other: TimeOffDayCounts) -> TimeOffDayCounts {
        TimeOffDayCounts {
            sn_days: self.sn_days + other.sn_days,
            co_days: self.co_days + other.co_days,
            cm_days: self.cm_days + other.cm_days,
        }
    }
}
