//! Error types for the Worktime Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the model and storage layers.
//! The counting operations never fail and do not use these types.

use thiserror::Error;

/// The main error type for the Worktime Engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/storage.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/storage.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No table mapping was configured for the given entity.
    #[error("No table mapping configured for entity: {entity}")]
    TableNotMapped {
        /// The entity name that was looked up.
        entity: String,
    },

    /// An entity field had no column configured in the table mapping.
    #[error("No column configured for field '{field}' of table '{table}'")]
    FieldNotMapped {
        /// The table whose mapping was incomplete.
        table: String,
        /// The entity field without a configured column.
        field: String,
    },

    /// A required column was missing from a storage row.
    #[error("Column '{column}' missing from row for table '{table}'")]
    ColumnMissing {
        /// The table the row belongs to.
        table: String,
        /// The column that was missing.
        column: String,
    },

    /// A non-nullable column held a null value.
    #[error("Column '{column}' in table '{table}' is not nullable but held null")]
    NullColumn {
        /// The table the row belongs to.
        table: String,
        /// The column that held null.
        column: String,
    },

    /// A storage value had the wrong type for its column.
    #[error("Invalid value in column '{column}': {message}")]
    InvalidValue {
        /// The column holding the invalid value.
        column: String,
        /// A description of the type mismatch.
        message: String,
    },

    /// A model field failed validation at construction.
    #[error("Invalid field '{field}': {message}")]
    InvalidEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
