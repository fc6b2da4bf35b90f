//! Config-driven entity/row mappers.
//!
//! Each mapper borrows the [`TableMapping`] for its entity and translates
//! between the entity record and a [`StorageRow`]. Column names, nullability,
//! and identity generation all come from the mapping; the entities carry no
//! storage metadata of their own.

use tracing::debug;
use uuid::Uuid;

use crate::config::{ColumnMapping, IdentityStrategy, TableMapping};
use crate::error::{EngineError, EngineResult};
use crate::models::{ContinuationPoint, ContinuationReason, UserSessionStatus};

use super::row::{StorageRow, StorageValue};

/// Looks up the column configured for an entity field.
fn column_for<'a>(mapping: &'a TableMapping, field: &str) -> EngineResult<&'a ColumnMapping> {
    mapping
        .column(field)
        .ok_or_else(|| EngineError::FieldNotMapped {
            table: mapping.table.clone(),
            field: field.to_string(),
        })
}

/// Reads a field's value from a row, enforcing the configured nullability.
fn require_value<'a>(
    mapping: &TableMapping,
    row: &'a StorageRow,
    field: &str,
) -> EngineResult<&'a StorageValue> {
    let column = column_for(mapping, field)?;
    let value = row
        .get(&column.column)
        .ok_or_else(|| EngineError::ColumnMissing {
            table: mapping.table.clone(),
            column: column.column.clone(),
        })?;

    if value.is_null() && !column.nullable {
        return Err(EngineError::NullColumn {
            table: mapping.table.clone(),
            column: column.column.clone(),
        });
    }
    Ok(value)
}

fn as_uuid(value: &StorageValue, column: &str) -> EngineResult<Uuid> {
    match value {
        StorageValue::Uuid(id) => Ok(*id),
        other => Err(invalid_type(column, "uuid", other)),
    }
}

fn as_text<'a>(value: &'a StorageValue, column: &str) -> EngineResult<&'a str> {
    match value {
        StorageValue::Text(text) => Ok(text),
        other => Err(invalid_type(column, "text", other)),
    }
}

fn as_boolean(value: &StorageValue, column: &str) -> EngineResult<bool> {
    match value {
        StorageValue::Boolean(flag) => Ok(*flag),
        other => Err(invalid_type(column, "boolean", other)),
    }
}

fn as_date(value: &StorageValue, column: &str) -> EngineResult<chrono::NaiveDate> {
    match value {
        StorageValue::Date(date) => Ok(*date),
        other => Err(invalid_type(column, "date", other)),
    }
}

fn as_timestamp(value: &StorageValue, column: &str) -> EngineResult<chrono::NaiveDateTime> {
    match value {
        StorageValue::Timestamp(ts) => Ok(*ts),
        other => Err(invalid_type(column, "timestamp", other)),
    }
}

fn invalid_type(column: &str, expected: &str, got: &StorageValue) -> EngineError {
    EngineError::InvalidValue {
        column: column.to_string(),
        message: format!("expected {expected}, got {got:?}"),
    }
}

/// Storage code for a continuation reason.
fn reason_code(reason: ContinuationReason) -> &'static str {
    match reason {
        ContinuationReason::MidnightRollover => "midnight_rollover",
        ContinuationReason::OvertimeReview => "overtime_review",
    }
}

fn parse_reason(code: &str, column: &str) -> EngineResult<ContinuationReason> {
    match code {
        "midnight_rollover" => Ok(ContinuationReason::MidnightRollover),
        "overtime_review" => Ok(ContinuationReason::OvertimeReview),
        other => Err(EngineError::InvalidValue {
            column: column.to_string(),
            message: format!("unknown continuation reason '{other}'"),
        }),
    }
}

/// Generates an identity per the mapping's strategy.
fn generate_id(mapping: &TableMapping) -> Option<Uuid> {
    match mapping.identity {
        IdentityStrategy::GeneratedUuid => Some(Uuid::new_v4()),
        IdentityStrategy::Assigned => None,
    }
}

/// Translates [`UserSessionStatus`] records to and from storage rows.
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config::ConfigLoader;
/// use worktime_engine::storage::SessionStatusMapper;
///
/// let config = ConfigLoader::load("./config/storage.yaml").unwrap();
/// let mapper = SessionStatusMapper::new(config.table_mapping("user_session_status").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct SessionStatusMapper<'a> {
    mapping: &'a TableMapping,
}

impl<'a> SessionStatusMapper<'a> {
    /// Creates a mapper over the given table mapping.
    pub fn new(mapping: &'a TableMapping) -> Self {
        Self { mapping }
    }

    /// Translates a session status record into a storage row.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FieldNotMapped`] if the mapping does not cover
    /// every entity field.
    pub fn to_row(&self, status: &UserSessionStatus) -> EngineResult<StorageRow> {
        let mut row = StorageRow::new();
        row.insert(
            column_for(self.mapping, "id")?.column.clone(),
            StorageValue::Uuid(status.id),
        );
        row.insert(
            column_for(self.mapping, "username")?.column.clone(),
            StorageValue::Text(status.username.clone()),
        );
        row.insert(
            column_for(self.mapping, "signed_in")?.column.clone(),
            StorageValue::Boolean(status.signed_in),
        );
        row.insert(
            column_for(self.mapping, "last_seen")?.column.clone(),
            StorageValue::Timestamp(status.last_seen),
        );

        debug!(table = %self.mapping.table, user = %status.username, "Mapped session status to row");
        Ok(row)
    }

    /// Translates a storage row back into a session status record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ColumnMissing`], [`EngineError::NullColumn`],
    /// or [`EngineError::InvalidValue`] when the row does not match the
    /// configured mapping.
    pub fn from_row(&self, row: &StorageRow) -> EngineResult<UserSessionStatus> {
        let id_column = column_for(self.mapping, "id")?;
        let id = as_uuid(require_value(self.mapping, row, "id")?, &id_column.column)?;

        let username_column = column_for(self.mapping, "username")?;
        let username = as_text(
            require_value(self.mapping, row, "username")?,
            &username_column.column,
        )?;

        let signed_in_column = column_for(self.mapping, "signed_in")?;
        let signed_in = as_boolean(
            require_value(self.mapping, row, "signed_in")?,
            &signed_in_column.column,
        )?;

        let last_seen_column = column_for(self.mapping, "last_seen")?;
        let last_seen = as_timestamp(
            require_value(self.mapping, row, "last_seen")?,
            &last_seen_column.column,
        )?;

        UserSessionStatus::new(id, username, signed_in, last_seen)
    }

    /// Generates an identity for a new record per the configured strategy,
    /// or `None` when identities are caller-assigned.
    pub fn generate_id(&self) -> Option<Uuid> {
        generate_id(self.mapping)
    }
}

/// Translates [`ContinuationPoint`] records to and from storage rows.
#[derive(Debug, Clone)]
pub struct ContinuationPointMapper<'a> {
    mapping: &'a TableMapping,
}

impl<'a> ContinuationPointMapper<'a> {
    /// Creates a mapper over the given table mapping.
    pub fn new(mapping: &'a TableMapping) -> Self {
        Self { mapping }
    }

    /// Translates a continuation point into a storage row.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FieldNotMapped`] if the mapping does not cover
    /// every entity field.
    pub fn to_row(&self, point: &ContinuationPoint) -> EngineResult<StorageRow> {
        let mut row = StorageRow::new();
        row.insert(
            column_for(self.mapping, "id")?.column.clone(),
            StorageValue::Uuid(point.id),
        );
        row.insert(
            column_for(self.mapping, "username")?.column.clone(),
            StorageValue::Text(point.username.clone()),
        );
        row.insert(
            column_for(self.mapping, "work_date")?.column.clone(),
            StorageValue::Date(point.work_date),
        );
        row.insert(
            column_for(self.mapping, "opened_at")?.column.clone(),
            StorageValue::Timestamp(point.opened_at),
        );
        row.insert(
            column_for(self.mapping, "reason")?.column.clone(),
            StorageValue::Text(reason_code(point.reason).to_string()),
        );

        debug!(table = %self.mapping.table, user = %point.username, "Mapped continuation point to row");
        Ok(row)
    }

    /// Translates a storage row back into a continuation point.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ColumnMissing`], [`EngineError::NullColumn`],
    /// or [`EngineError::InvalidValue`] when the row does not match the
    /// configured mapping.
    pub fn from_row(&self, row: &StorageRow) -> EngineResult<ContinuationPoint> {
        let id_column = column_for(self.mapping, "id")?;
        let id = as_uuid(require_value(self.mapping, row, "id")?, &id_column.column)?;

        let username_column = column_for(self.mapping, "username")?;
        let username = as_text(
            require_value(self.mapping, row, "username")?,
            &username_column.column,
        )?;

        let work_date_column = column_for(self.mapping, "work_date")?;
        let work_date = as_date(
            require_value(self.mapping, row, "work_date")?,
            &work_date_column.column,
        )?;

        let opened_at_column = column_for(self.mapping, "opened_at")?;
        let opened_at = as_timestamp(
            require_value(self.mapping, row, "opened_at")?,
            &opened_at_column.column,
        )?;

        let reason_column = column_for(self.mapping, "reason")?;
        let reason = parse_reason(
            as_text(
                require_value(self.mapping, row, "reason")?,
                &reason_column.column,
            )?,
            &reason_column.column,
        )?;

        ContinuationPoint::new(id, username, work_date, opened_at, reason)
    }

    /// Generates an identity for a new record per the configured strategy,
    /// or `None` when identities are caller-assigned.
    pub fn generate_id(&self) -> Option<Uuid> {
        generate_id(self.mapping)
    }
}
