//! Storage translation layer for the Worktime Engine.
//!
//! This module translates the persistence-shaped entities to and from a
//! driver-neutral row representation. Which table and columns an entity maps
//! to comes from the loaded configuration ([`crate::config`]); the entities
//! themselves stay plain records. Actual persistence happens in a
//! collaborating service outside this crate.

mod mapping;
mod row;

pub use mapping::{ContinuationPointMapper, SessionStatusMapper};
pub use row::{StorageRow, StorageValue};
