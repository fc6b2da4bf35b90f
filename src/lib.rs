//! Worktime Engine
//!
//! This crate provides the data-model layer for a workplace time-tracking and
//! bonus-calculation application: work-time entries, per-user summaries, bonus
//! statements, dashboard cards, and session entities, together with the
//! time-off day counter used for leave statistics.

#![warn(missing_docs)]

pub mod config;
pub mod counting;
pub mod error;
pub mod models;
pub mod storage;
