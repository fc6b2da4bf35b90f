//! Configuration types for storage mapping.
//!
//! This module contains the strongly-typed structures deserialized from the
//! storage-mapping YAML file.

use serde::Deserialize;
use std::collections::HashMap;

/// How a table's identity column is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStrategy {
    /// The caller assigns identities before insert.
    Assigned,
    /// The mapping layer generates a fresh UUID on insert.
    GeneratedUuid,
}

/// Mapping of one entity field to a table column.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMapping {
    /// The column name in the table.
    pub column: String,
    /// Whether the column accepts null values.
    #[serde(default)]
    pub nullable: bool,
}

/// Mapping of one entity to its table.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMapping {
    /// The table name.
    pub table: String,
    /// How the identity column is populated.
    pub identity: IdentityStrategy,
    /// Map of entity field name to column mapping.
    pub columns: HashMap<String, ColumnMapping>,
}

impl TableMapping {
    /// Returns the column mapping for an entity field, if configured.
    pub fn column(&self, field: &str) -> Option<&ColumnMapping> {
        self.columns.get(field)
    }
}

/// The complete storage-mapping configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Map of entity name to table mapping.
    pub tables: HashMap<String, TableMapping>,
}
