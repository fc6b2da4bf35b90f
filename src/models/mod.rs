//! Core data models for the Worktime Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bonus;
mod dashboard;
mod display_record;
mod session;
mod summary;
mod time_off;
mod work_time_entry;

pub use bonus::{BonusEntry, BonusStatement};
pub use dashboard::DashboardCard;
pub use display_record::WorkTimeDisplayRecord;
pub use session::{ContinuationPoint, ContinuationReason, UserSessionStatus};
pub use summary::WorktimeSummary;
pub use time_off::{TimeOffDayCounts, TimeOffKind};
pub use work_time_entry::WorkTimeEntry;
