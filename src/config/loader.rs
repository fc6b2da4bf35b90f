//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! storage-mapping configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{StorageConfig, TableMapping};

/// Loads and provides access to the storage-mapping configuration.
///
/// # File Structure
///
/// The configuration is a single YAML document mapping entity names to
/// table mappings:
///
/// ```text
/// tables:
///   user_session_status:
///     table: user_session_status
///     identity: generated_uuid
///     columns:
///       id:        { column: id }
///       username:  { column: user_name }
///       signed_in: { column: signed_in }
///       last_seen: { column: last_seen }
///   continuation_point:
///     table: continuation_point
///     identity: generated_uuid
///     columns: ...
/// ```
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/storage.yaml").unwrap();
/// let mapping = loader.table_mapping("continuation_point").unwrap();
/// println!("Identity strategy: {:?}", mapping.identity);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StorageConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/storage.yaml")
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read and
    /// [`EngineError::ConfigParseError`] if it is not valid YAML for the
    /// expected structure.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: StorageConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(
            path = %path_str,
            tables = config.tables.len(),
            "Loaded storage mapping configuration"
        );

        Ok(Self { config })
    }

    /// Returns the table mapping for an entity.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TableNotMapped`] if the entity has no
    /// configured mapping.
    pub fn table_mapping(&self, entity: &str) -> EngineResult<&TableMapping> {
        self.config
            .tables
            .get(entity)
            .ok_or_else(|| EngineError::TableNotMapped {
                entity: entity.to_string(),
            })
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}
