//! Configuration loading for the Worktime Engine.
//!
//! This module loads the storage-mapping configuration from a YAML file:
//! table names, column names, nullability, and identity generation for the
//! persistence-shaped entities. The mapping metadata is plain data passed to
//! the translation layer in [`crate::storage`], not annotations on the types.
//!
//! # Example
//!
//! ```no_run
//! use worktime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/storage.yaml").unwrap();
//! let mapping = config.table_mapping("user_session_status").unwrap();
//! println!("Mapped to table: {}", mapping.table);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ColumnMapping, IdentityStrategy, StorageConfig, TableMapping};
