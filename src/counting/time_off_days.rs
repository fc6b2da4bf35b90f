//! Time-off day counting.
//!
//! This module provides the counting operations that tally leave days into
//! [`TimeOffDayCounts`] buckets. All three operations are pure: they never
//! fail, treat `None` and empty inputs as the zero result, and are invariant
//! to iteration order.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{TimeOffDayCounts, WorkTimeDisplayRecord, WorkTimeEntry};

/// Counts time-off days from a flat sequence of entries.
///
/// Each entry with a recognized classification code increments exactly one
/// bucket: national holidays count as `sn_days`, vacation and special-event
/// days as `co_days`, medical leave as `cm_days`. Entries without a code, or
/// with an unrecognized code, are skipped.
///
/// # Arguments
///
/// * `entries` - The entries to count, possibly absent
///
/// # Returns
///
/// The tallied [`TimeOffDayCounts`]; zero counts for `None` or empty input.
///
/// # Example
///
/// ```
/// use worktime_engine::counting::count_from_entries;
/// use worktime_engine::models::WorkTimeEntry;
/// use chrono::NaiveDate;
///
/// let entries: Vec<WorkTimeEntry> = ["SN", "CO", "CO"]
///     .iter()
///     .enumerate()
///     .map(|(i, code)| {
///         WorkTimeEntry::new(
///             "amaier",
///             NaiveDate::from_ymd_opt(2026, 1, 5 + i as u32).unwrap(),
///             None,
///             None,
///             0,
///             Some(code.to_string()),
///         )
///         .unwrap()
///     })
///     .collect();
///
/// let counts = count_from_entries(Some(&entries));
/// assert_eq!(counts.sn_days, 1);
/// assert_eq!(counts.co_days, 2);
/// assert_eq!(counts.total_days(), 3);
///
/// assert!(!count_from_entries(None).has_any_days());
/// ```
pub fn count_from_entries(entries: Option<&[WorkTimeEntry]>) -> TimeOffDayCounts {
    tally(entries.into_iter().flatten())
}

/// Counts time-off days from a date-keyed calendar of display records.
///
/// A record only contributes when it both marks an entry as present and is
/// flagged as time off; calendars include placeholder records for weekends
/// and ordinary work days, and neither may increment a bucket. Qualifying
/// records are then counted by their wrapped entry's classification, with the
/// same skip rules as [`count_from_entries`].
///
/// # Arguments
///
/// * `records` - The calendar records to count, possibly absent
///
/// # Returns
///
/// The tallied [`TimeOffDayCounts`]; zero counts for `None` or empty input.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use worktime_engine::counting::count_from_display_records;
/// use worktime_engine::models::{WorkTimeDisplayRecord, WorkTimeEntry};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let entry =
///     WorkTimeEntry::new("amaier", date, None, None, 0, Some("SN".to_string())).unwrap();
///
/// let mut records = BTreeMap::new();
/// records.insert(date, WorkTimeDisplayRecord::from_entry(entry, "Thu 01.01."));
/// records.insert(
///     NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
///     WorkTimeDisplayRecord::empty("Sat 03.01."),
/// );
///
/// let counts = count_from_display_records(Some(&records));
/// assert_eq!(counts.sn_days, 1);
/// assert_eq!(counts.total_days(), 1);
/// ```
pub fn count_from_display_records(
    records: Option<&BTreeMap<NaiveDate, WorkTimeDisplayRecord>>,
) -> TimeOffDayCounts {
    tally(
        records
            .into_iter()
            .flat_map(|map| map.values())
            .filter(|record| record.has_entry && record.is_time_off)
            .filter_map(|record| record.entry.as_ref()),
    )
}

/// Counts time-off days across all users.
///
/// Flattens the per-user, date-keyed entries into one sequence, discarding
/// the user and date keys, and tallies the whole population. Used for
/// organization-wide statistics rather than per-user summaries.
///
/// # Arguments
///
/// * `by_user` - Entries keyed by username and date, possibly absent
///
/// # Returns
///
/// The aggregate [`TimeOffDayCounts`]; zero counts for `None` or empty input.
///
/// # Example
///
/// ```
/// use std::collections::{BTreeMap, HashMap};
/// use worktime_engine::counting::count_across_users;
/// use worktime_engine::models::WorkTimeEntry;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let mut by_user: HashMap<String, BTreeMap<NaiveDate, WorkTimeEntry>> = HashMap::new();
/// by_user.entry("amaier".to_string()).or_default().insert(
///     date,
///     WorkTimeEntry::new("amaier", date, None, None, 0, Some("CM".to_string())).unwrap(),
/// );
///
/// let counts = count_across_users(Some(&by_user));
/// assert_eq!(counts.cm_days, 1);
/// ```
pub fn count_across_users(
    by_user: Option<&HashMap<String, BTreeMap<NaiveDate, WorkTimeEntry>>>,
) -> TimeOffDayCounts {
    tally(
        by_user
            .into_iter()
            .flat_map(|map| map.values())
            .flat_map(|per_date| per_date.values()),
    )
}

/// Shared tally over entries: one bucket increment per recognized
/// classification, everything else skipped.
fn tally<'a>(entries: impl IntoIterator<Item = &'a WorkTimeEntry>) -> TimeOffDayCounts {
    let mut counts = TimeOffDayCounts::default();
    for entry in entries {
        if let Some(kind) = entry.time_off_kind() {
            counts.record(kind);
        }
    }
    counts
}
