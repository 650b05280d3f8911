//! Native connections through the `oracle` crate (ODPI-C).
//!
//! Enabled with the `oci` feature. Requires Oracle client libraries at
//! runtime.

use oracle::SqlValue;
use oracle::sql_type::OracleType;
use oxide_sql_driver::{Connection, Connector, DriverOptions, NativeError, ResultSet, Row, Value};
use tracing::debug;

/// Opens [`OciConnection`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct OciConnector;

impl OciConnector {
    /// Creates a new connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Connector for OciConnector {
    type Connection = OciConnection;

    fn connect(
        &self,
        dsn: &str,
        user: Option<&str>,
        password: Option<&str>,
        _options: &DriverOptions,
    ) -> Result<OciConnection, NativeError> {
        let inner = oracle::Connection::connect(
            user.unwrap_or_default(),
            password.unwrap_or_default(),
            dsn,
        )
        .map_err(native_error)?;
        Ok(OciConnection { inner })
    }
}

/// A connection backed by [`oracle::Connection`].
pub struct OciConnection {
    inner: oracle::Connection,
}

impl OciConnection {
    /// Returns the underlying client connection.
    #[must_use]
    pub const fn inner(&self) -> &oracle::Connection {
        &self.inner
    }
}

impl Connection for OciConnection {
    fn query(&self, sql: &str) -> Result<ResultSet, NativeError> {
        let result = self.inner.query(sql, &[]).map_err(native_error)?;
        let columns = result
            .column_info()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let mut rows = Vec::new();
        for row in result {
            let row = row.map_err(native_error)?;
            let values = row
                .sql_values()
                .iter()
                .map(convert_value)
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(Row::new(values));
        }
        debug!(rows = rows.len(), "fetched oracle result set");
        Ok(ResultSet::new(columns, rows))
    }
}

/// Client-side representation chosen for a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadAs {
    Integer,
    Float,
    Bytes,
    Bool,
    Text,
}

/// `NUMBER(p)` and unconstrained `NUMBER` (reported as precision 0, scale
/// -127) hold exact integers in practice and are read as integers. Other
/// scaled numbers and the binary float types are read as floats.
const fn read_as(oracle_type: &OracleType) -> ReadAs {
    match oracle_type {
        OracleType::Number(_, 0) | OracleType::Number(0, -127) | OracleType::Int64 => {
            ReadAs::Integer
        }
        OracleType::Number(..)
        | OracleType::Float(_)
        | OracleType::BinaryFloat
        | OracleType::BinaryDouble => ReadAs::Float,
        OracleType::Raw(_) | OracleType::LongRaw | OracleType::BLOB => ReadAs::Bytes,
        OracleType::Boolean => ReadAs::Bool,
        _ => ReadAs::Text,
    }
}

fn convert_value(value: &SqlValue) -> Result<Value, NativeError> {
    if value.is_null().map_err(native_error)? {
        return Ok(Value::Null);
    }
    let converted = match read_as(value.oracle_type().map_err(native_error)?) {
        // Fractional or out-of-range values in an integer-typed column keep
        // their exact digits as text.
        ReadAs::Integer => match value.get::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Text(value.get().map_err(native_error)?),
        },
        ReadAs::Float => Value::Float(value.get().map_err(native_error)?),
        ReadAs::Bytes => Value::Blob(value.get().map_err(native_error)?),
        ReadAs::Bool => Value::Bool(value.get().map_err(native_error)?),
        ReadAs::Text => Value::Text(value.get().map_err(native_error)?),
    };
    Ok(converted)
}

/// Keeps the ORA number in the error-info slot.
fn native_error(err: oracle::Error) -> NativeError {
    let native = NativeError::new(err.to_string());
    match err.db_error() {
        Some(db) => native.with_code(db.code()),
        None => native,
    }
}
