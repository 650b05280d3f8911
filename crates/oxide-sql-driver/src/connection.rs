//! Outbound contract towards the native database client.
//!
//! A dialect driver never talks to the network itself. It owns one
//! [`Connection`] obtained from a [`Connector`] and issues plain SQL text
//! through it.

use crate::error::NativeError;
use crate::options::DriverOptions;

/// A single column value as returned by the native client.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// One row of a result set, addressed by column position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Creates a row from its column values.
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Returns the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the text value at `index`, if present and textual.
    #[must_use]
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the row has no columns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the column values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl<V: Into<Value>> FromIterator<V> for Row {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// The outcome of a query: column names plus rows in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ResultSet {
    /// Creates a result set.
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Returns the column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// A live native connection.
///
/// Implementations are not required to be `Sync`; a driver holds exactly
/// one connection and callers serialize access to it.
pub trait Connection {
    /// Executes `sql` and returns every row it produced.
    ///
    /// # Errors
    ///
    /// Returns the client's failure unchanged, with the vendor code set when
    /// the client reported one.
    fn query(&self, sql: &str) -> std::result::Result<ResultSet, NativeError>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn query(&self, sql: &str) -> std::result::Result<ResultSet, NativeError> {
        (**self).query(sql)
    }
}

/// Establishes native connections.
pub trait Connector {
    /// The connection type produced.
    type Connection: Connection;

    /// Opens a connection to `dsn`.
    ///
    /// `options` are the full driver options; keys the driver itself does
    /// not recognize are available through [`DriverOptions::extra`].
    ///
    /// # Errors
    ///
    /// Returns the client's failure when the connection cannot be opened.
    fn connect(
        &self,
        dsn: &str,
        user: Option<&str>,
        password: Option<&str>,
        options: &DriverOptions,
    ) -> std::result::Result<Self::Connection, NativeError>;
}
