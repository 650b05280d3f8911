//! The dialect driver contract.
//!
//! A generic query layer builds SQL with driver-agnostic placeholders and
//! consults a [`DialectDriver`] for everything that differs between
//! engines: identifier quoting, literal formatting, pagination, error
//! classification and catalog introspection.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, TimeDelta};
use tracing::debug;

use crate::connection::ResultSet;
use crate::error::{DriverError, ErrorCategory, NativeError, Result};
use crate::options::DriverOptions;
use crate::schema::{
    ColumnDescriptor, ColumnType, ForeignKeyDescriptor, IndexDescriptor, TableDescriptor,
};

/// SQL strategies the generic layer may only use when the dialect allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Sequences for generated keys.
    Sequence,
    /// Selecting columns that are neither grouped nor aggregated.
    SelectUngroupedColumns,
    /// `INSERT INTO t SELECT ...` with multiple rows.
    MultiInsertAsSelect,
    /// `(a, b) IN ((1, 2), (3, 4))` style conditions.
    MultiColumnAsOrCondition,
    /// Subqueries in expressions.
    Subselect,
    /// Schema-qualified object names.
    Schema,
}

impl Capability {
    /// Every capability flag.
    pub const ALL: [Self; 6] = [
        Self::Sequence,
        Self::SelectUngroupedColumns,
        Self::MultiInsertAsSelect,
        Self::MultiColumnAsOrCondition,
        Self::Subselect,
        Self::Schema,
    ];
}

/// Where a LIKE pattern is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAnchor {
    /// Match anywhere (`%value%`).
    Anywhere,
    /// Value must be a prefix (`value%`).
    Prefix,
    /// Value must be a suffix (`%value`).
    Suffix,
}

impl From<i32> for LikeAnchor {
    /// `0` means anywhere, a positive number prefix, a negative one suffix.
    fn from(pos: i32) -> Self {
        match pos {
            0 => Self::Anywhere,
            p if p > 0 => Self::Prefix,
            _ => Self::Suffix,
        }
    }
}

/// Vendor-specific behavior behind one polymorphic surface.
///
/// Each dialect implements the full contract. Members a dialect lacks fail
/// with [`DriverError::NotImplemented`] (a gap) or
/// [`DriverError::NotSupported`] (a permanent limitation); they never
/// return a silent default.
pub trait DialectDriver {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the options captured when the driver was connected.
    fn options(&self) -> &DriverOptions;

    /// Maps a native failure to a portable category.
    ///
    /// Returns `None` when no reclassification is possible; the caller then
    /// surfaces the native error as is.
    fn classify_error(&self, error: &NativeError) -> Option<ErrorCategory>;

    /// Converts a native failure into a [`DriverError`].
    fn convert_error(&self, error: NativeError) -> DriverError {
        let Some(category) = self.classify_error(&error) else {
            debug!(dialect = self.name(), code = ?error.code(), "native error left unclassified");
            return DriverError::Native(error);
        };
        debug!(dialect = self.name(), code = ?error.code(), ?category, "classified native error");
        DriverError::classified(category, error)
    }

    /// Quotes an identifier (table name, column name, etc.).
    fn quote_identifier(&self, name: &str) -> String;

    /// Renders a date/time value as a SQL literal.
    fn format_date_time(&self, value: &DateTime<FixedOffset>) -> String;

    /// Renders a date interval as a SQL literal.
    ///
    /// # Errors
    ///
    /// Fails when the dialect has no interval literal syntax.
    fn format_date_interval(&self, value: &TimeDelta) -> Result<String>;

    /// Renders a LIKE pattern matching `value` literally at `anchor`.
    ///
    /// # Errors
    ///
    /// Fails when the dialect does not implement pattern rendering.
    fn format_like(&self, value: &str, anchor: LikeAnchor) -> Result<String>;

    /// Rewrites `sql` so it returns at most `limit` rows after skipping
    /// `offset` rows. `None` means unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InvalidArgument`] for negative bounds.
    fn apply_limit_offset(
        &self,
        sql: &str,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<String>;

    /// Returns whether the dialect allows the given SQL strategy.
    fn supports(&self, capability: Capability) -> bool;

    /// Lists tables and views visible to the connection.
    ///
    /// # Errors
    ///
    /// Propagates catalog query failures.
    fn list_tables(&self) -> Result<Vec<TableDescriptor>>;

    /// Lists the columns of `table`.
    ///
    /// # Errors
    ///
    /// Propagates catalog query failures or reports a coverage gap.
    fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Lists the indexes of `table`.
    ///
    /// # Errors
    ///
    /// Propagates catalog query failures or reports a coverage gap.
    fn list_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>>;

    /// Lists the foreign keys declared on `table`.
    ///
    /// # Errors
    ///
    /// Propagates catalog query failures or reports a coverage gap.
    fn list_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyDescriptor>>;

    /// Returns portable type hints for the columns of `result`, keyed by
    /// column name. Columns without a hint are absent.
    fn column_types_of(&self, result: &ResultSet) -> HashMap<String, ColumnType>;
}
