//! Normalized schema metadata produced by driver introspection.
//!
//! Every dialect reports tables, columns, indexes and foreign keys in the
//! same shapes so the generic query layer never parses vendor catalogs.
//! Descriptors are built fresh on every call; nothing here is cached.

use serde::{Deserialize, Serialize};

/// A table or view visible to the connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table name as stored in the catalog.
    pub name: String,
    /// Whether the object is a view.
    pub is_view: bool,
}

impl TableDescriptor {
    /// Describes a base table.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_view: false,
        }
    }

    /// Describes a view.
    #[must_use]
    pub fn view(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_view: true,
        }
    }
}

/// A column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Owning table.
    pub table: String,
    /// Vendor type name, e.g. `VARCHAR2`.
    pub native_type: String,
    /// Declared length or precision.
    pub size: Option<u32>,
    /// Whether NULL is accepted.
    pub nullable: bool,
    /// Default expression as SQL text.
    pub default: Option<String>,
    /// Whether values are generated by the database.
    pub auto_increment: bool,
    /// Whether the column is part of the primary key.
    pub primary: bool,
}

/// An index on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    /// Index name.
    pub name: String,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
    /// Whether the index backs the primary key.
    pub primary: bool,
    /// Indexed columns, in key order.
    pub columns: Vec<String>,
}

/// A foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDescriptor {
    /// Constraint name.
    pub name: String,
    /// Referencing columns of the local table.
    pub local: Vec<String>,
    /// Referenced table.
    pub table: String,
    /// Referenced columns, paired positionally with `local`.
    pub foreign: Vec<String>,
}

/// Portable column type hint for result set values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Binary,
    Bool,
    Integer,
    Float,
    Decimal,
    Date,
    Time,
    DateTime,
    Interval,
    UnixTimestamp,
}
