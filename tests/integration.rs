//! Integration tests for the Worktime Engine.
//!
//! This suite exercises the crate the way the surrounding services use it:
//! - counting a user's month through all three entry points
//! - assembling a worktime summary and dashboard cards from the counts
//! - round-tripping session entities through the storage mapping layer
//!   using the shipped configuration

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use worktime_engine::config::ConfigLoader;
use worktime_engine::counting::{
    count_across_users, count_from_display_records, count_from_entries,
};
use worktime_engine::models::{
    ContinuationPoint, ContinuationReason, DashboardCard, TimeOffDayCounts, UserSessionStatus,
    WorkTimeDisplayRecord, WorkTimeEntry, WorktimeSummary,
};
use worktime_engine::storage::{ContinuationPointMapper, SessionStatusMapper};

// =============================================================================
// Test Helpers
// =============================================================================

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn leave_entry(username: &str, date_str: &str, code: &str) -> WorkTimeEntry {
    WorkTimeEntry::new(username, date(date_str), None, None, 0, Some(code.to_string())).unwrap()
}

fn work_entry(username: &str, date_str: &str) -> WorkTimeEntry {
    WorkTimeEntry::new(
        username,
        date(date_str),
        NaiveTime::from_hms_opt(9, 0, 0),
        NaiveTime::from_hms_opt(17, 30, 0),
        30,
        None,
    )
    .unwrap()
}

/// One user's January: three work days, a holiday, two vacation days, and a
/// special-event day.
fn january_entries(username: &str) -> Vec<WorkTimeEntry> {
    vec![
        leave_entry(username, "2026-01-01", "SN"),
        work_entry(username, "2026-01-02"),
        leave_entry(username, "2026-01-05", "CO"),
        leave_entry(username, "2026-01-06", "CO"),
        work_entry(username, "2026-01-07"),
        leave_entry(username, "2026-01-08", "CE"),
        work_entry(username, "2026-01-09"),
    ]
}

// =============================================================================
// Counting across entry points
// =============================================================================

#[test]
fn test_flat_count_over_a_month_of_entries() {
    let entries = january_entries("amaier");
    let counts = count_from_entries(Some(&entries));

    // SN x1, CO x2 plus CE folded in, no medical leave.
    assert_eq!(counts, TimeOffDayCounts::new(1, 3, 0));
    assert_eq!(counts.total_days(), 4);
}

#[test]
fn test_calendar_count_matches_flat_count() {
    let entries = january_entries("amaier");
    let flat = count_from_entries(Some(&entries));

    // Assemble the calendar the way the display service does: every entry
    // wrapped, plus placeholder records for the first weekend.
    let mut records: BTreeMap<NaiveDate, WorkTimeDisplayRecord> = BTreeMap::new();
    for entry in entries {
        records.insert(
            entry.date,
            WorkTimeDisplayRecord::from_entry(entry, "workday"),
        );
    }
    records.insert(date("2026-01-03"), WorkTimeDisplayRecord::empty("Sat 03.01."));
    records.insert(date("2026-01-04"), WorkTimeDisplayRecord::empty("Sun 04.01."));

    let from_calendar = count_from_display_records(Some(&records));
    assert_eq!(from_calendar, flat);
}

#[test]
fn test_population_count_sums_per_user_counts() {
    let mut by_user: HashMap<String, BTreeMap<NaiveDate, WorkTimeEntry>> = HashMap::new();
    for username in ["amaier", "bkern"] {
        let per_date = by_user.entry(username.to_string()).or_default();
        for entry in january_entries(username) {
            per_date.insert(entry.date, entry);
        }
    }
    by_user.entry("cvogt".to_string()).or_default().insert(
        date("2026-01-12"),
        leave_entry("cvogt", "2026-01-12", "CM"),
    );

    let aggregate = count_across_users(Some(&by_user));
    assert_eq!(aggregate, TimeOffDayCounts::new(2, 6, 1));

    let per_user_sum = by_user
        .values()
        .map(|per_date| {
            let entries: Vec<WorkTimeEntry> = per_date.values().cloned().collect();
            count_from_entries(Some(&entries))
        })
        .fold(TimeOffDayCounts::default(), |acc, c| acc + c);
    assert_eq!(aggregate, per_user_sum);
}

#[test]
fn test_absent_inputs_count_as_zero_everywhere() {
    assert!(!count_from_entries(None).has_any_days());
    assert!(!count_from_display_records(None).has_any_days());
    assert!(!count_across_users(None).has_any_days());
}

// =============================================================================
// Summary and dashboard assembly
// =============================================================================

#[test]
fn test_summary_and_dashboard_from_counts() {
    let entries = january_entries("amaier");
    let counts = count_from_entries(Some(&entries));
    let worked: i64 = entries.iter().filter_map(|e| e.worked_minutes()).sum();

    let summary = WorktimeSummary::new(
        "amaier",
        date("2026-01-01"),
        date("2026-01-31"),
        worked - 90,
        worked,
        counts,
    )
    .unwrap();

    assert_eq!(summary.time_off.total_days(), 4);
    assert_eq!(summary.surplus_minutes(), 90);
    assert_eq!(summary.surplus_formatted(), "+01:30");

    let mut card = DashboardCard::new(
        "time_off",
        "Time off",
        format!("{} days", summary.time_off.total_days()),
    );
    card.payload = serde_json::to_value(summary.time_off).unwrap();

    assert_eq!(card.value, "4 days");
    assert_eq!(card.payload["co_days"], 3);
}

// =============================================================================
// Storage mapping with the shipped configuration
// =============================================================================

#[test]
fn test_session_entities_round_trip_with_shipped_config() {
    let config = ConfigLoader::load("./config/storage.yaml").unwrap();

    let session_mapping = config.table_mapping("user_session_status").unwrap();
    let session_mapper = SessionStatusMapper::new(session_mapping);

    let status = UserSessionStatus::new(
        session_mapper.generate_id().expect("generated identity"),
        "amaier",
        true,
        datetime("2026-01-15 09:00:00"),
    )
    .unwrap();

    let row = session_mapper.to_row(&status).unwrap();
    assert_eq!(session_mapping.table, "user_session_status");
    assert!(row.contains_key("user_name"));
    assert_eq!(session_mapper.from_row(&row).unwrap(), status);

    let point_mapping = config.table_mapping("continuation_point").unwrap();
    let point_mapper = ContinuationPointMapper::new(point_mapping);

    let point = ContinuationPoint::new(
        point_mapper.generate_id().unwrap_or_else(Uuid::new_v4),
        "amaier",
        date("2026-01-15"),
        datetime("2026-01-15 23:55:00"),
        ContinuationReason::MidnightRollover,
    )
    .unwrap();

    let row = point_mapper.to_row(&point).unwrap();
    assert_eq!(point_mapper.from_row(&row).unwrap(), point);
}
