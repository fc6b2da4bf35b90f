//! Driver-neutral row representation.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single column value in a storage row.
///
/// The variants cover the column types the session entities use; a concrete
/// database adapter converts these to its own parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageValue {
    /// SQL NULL.
    Null,
    /// A boolean column value.
    Boolean(bool),
    /// An integer column value.
    Integer(i64),
    /// A text column value.
    Text(String),
    /// A date column value.
    Date(NaiveDate),
    /// A timestamp column value.
    Timestamp(NaiveDateTime),
    /// A UUID column value.
    Uuid(Uuid),
}

impl StorageValue {
    /// Returns true for [`StorageValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }
}

/// One storage row: column name to value.
///
/// A `BTreeMap` keeps column order stable for logging and tests.
pub type StorageRow = BTreeMap<String, StorageValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null() {
        assert!(StorageValue::Null.is_null());
        assert!(!StorageValue::Boolean(false).is_null());
        assert!(!StorageValue::Text(String::new()).is_null());
    }

    #[test]
    fn test_storage_value_serialization() {
        let value = StorageValue::Text("amaier".to_string());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "{\"text\":\"amaier\"}");

        let deserialized: StorageValue = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, value);
    }

    #[test]
    fn test_row_iterates_in_column_order() {
        let mut row = StorageRow::new();
        row.insert("user_name".to_string(), StorageValue::Null);
        row.insert("id".to_string(), StorageValue::Integer(1));

        let columns: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(columns, vec!["id", "user_name"]);
    }
}
