//! Oracle dialect driver.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, TimeDelta};
use oxide_sql_driver::{
    Capability, ColumnDescriptor, ColumnType, Connection, Connector, DateTimeFormat,
    DialectDriver, DriverError, DriverOptions, ErrorCategory, ForeignKeyDescriptor,
    IndexDescriptor, LikeAnchor, NativeError, Result, ResultSet, TableDescriptor,
};
use tracing::{debug, info};

use crate::catalog::{TABLES_QUERY, tables_from_catalog};
use crate::errors::classify_code;
use crate::pagination;

/// Oracle dialect driver wrapping one native connection.
///
/// Options are captured when the driver is created and never change
/// afterwards.
#[derive(Debug)]
pub struct OracleDriver<C> {
    connection: C,
    options: DriverOptions,
    date_time_format: DateTimeFormat,
}

impl<C: Connection> OracleDriver<C> {
    /// Opens a connection through `connector` and builds a driver on it.
    ///
    /// Connect failures are returned as [`DriverError::Native`] without
    /// reclassification.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Configuration`] for an invalid
    /// `formatDateTime`, or the native connect failure.
    pub fn connect<K>(
        connector: &K,
        dsn: &str,
        user: Option<&str>,
        password: Option<&str>,
        options: DriverOptions,
    ) -> Result<Self>
    where
        K: Connector<Connection = C>,
    {
        let date_time_format = options.date_time_format()?;
        let connection = connector.connect(dsn, user, password, &options)?;
        info!(dsn, user = ?user, format_date_time = %date_time_format, "oracle connection established");
        Ok(Self {
            connection,
            options,
            date_time_format,
        })
    }

    /// Builds a driver on an already established connection.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Configuration`] for an invalid
    /// `formatDateTime`.
    pub fn with_connection(connection: C, options: DriverOptions) -> Result<Self> {
        let date_time_format = options.date_time_format()?;
        Ok(Self {
            connection,
            options,
            date_time_format,
        })
    }

    /// Returns the native connection.
    #[must_use]
    pub const fn connection(&self) -> &C {
        &self.connection
    }

    /// Returns the resolved date/time format.
    #[must_use]
    pub const fn date_time_format(&self) -> &DateTimeFormat {
        &self.date_time_format
    }

    /// Runs `sql` on the connection, classifying any failure.
    ///
    /// # Errors
    ///
    /// Returns a typed constraint violation for recognized ORA codes and
    /// [`DriverError::Native`] for everything else.
    pub fn query(&self, sql: &str) -> Result<ResultSet> {
        self.connection.query(sql).map_err(|e| self.convert_error(e))
    }
}

impl<C: Connection> DialectDriver for OracleDriver<C> {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn options(&self) -> &DriverOptions {
        &self.options
    }

    fn classify_error(&self, error: &NativeError) -> Option<ErrorCategory> {
        error.code().and_then(classify_code)
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    fn format_date_time(&self, value: &DateTime<FixedOffset>) -> String {
        self.date_time_format.format(value)
    }

    fn format_date_interval(&self, _value: &TimeDelta) -> Result<String> {
        Err(DriverError::NotSupported(
            "oracle has no date interval literals".into(),
        ))
    }

    fn format_like(&self, _value: &str, _anchor: LikeAnchor) -> Result<String> {
        Err(DriverError::NotImplemented(
            "LIKE pattern formatting for oracle".into(),
        ))
    }

    fn apply_limit_offset(
        &self,
        sql: &str,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<String> {
        let rewritten = pagination::apply_limit_offset(sql, limit, offset)?;
        debug!(?limit, ?offset, "applied ROWNUM pagination");
        Ok(rewritten)
    }

    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Sequence | Capability::Subselect)
    }

    fn list_tables(&self) -> Result<Vec<TableDescriptor>> {
        let tables = tables_from_catalog(self.query(TABLES_QUERY)?)?;
        debug!(count = tables.len(), "listed oracle tables");
        Ok(tables)
    }

    fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        Err(DriverError::NotImplemented(format!(
            "column introspection for oracle table '{table}'"
        )))
    }

    fn list_indexes(&self, table: &str) -> Result<Vec<IndexDescriptor>> {
        Err(DriverError::NotImplemented(format!(
            "index introspection for oracle table '{table}'"
        )))
    }

    fn list_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyDescriptor>> {
        Err(DriverError::NotImplemented(format!(
            "foreign key introspection for oracle table '{table}'"
        )))
    }

    fn column_types_of(&self, _result: &ResultSet) -> HashMap<String, ColumnType> {
        HashMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use oxide_sql_driver::Row;

    #[derive(Debug)]
    struct NoopConnection;

    impl Connection for NoopConnection {
        fn query(&self, _sql: &str) -> std::result::Result<ResultSet, NativeError> {
            Ok(ResultSet::default())
        }
    }

    fn driver() -> OracleDriver<NoopConnection> {
        OracleDriver::with_connection(NoopConnection, DriverOptions::new()).unwrap()
    }

    #[test]
    fn test_oracle_driver() {
        let driver = driver();
        assert_eq!(driver.name(), "oracle");
        assert_eq!(driver.date_time_format(), &DateTimeFormat::UnixTimestamp);
        assert!(driver.supports(Capability::Sequence));
        assert!(driver.supports(Capability::Subselect));
        assert!(!driver.supports(Capability::MultiInsertAsSelect));
    }

    #[test]
    fn test_quote_identifier() {
        let driver = driver();
        assert_eq!(driver.quote_identifier("users"), "\"users\"");
        assert_eq!(driver.quote_identifier("a\"b"), "\"a\"\"b\"");
        assert_eq!(driver.quote_identifier(""), "\"\"");
        assert_eq!(driver.quote_identifier("\""), "\"\"\"\"");
    }

    #[test]
    fn test_format_date_time_uses_captured_format() {
        let value = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(1970, 1, 2, 0, 0, 0)
            .unwrap();
        assert_eq!(driver().format_date_time(&value), "86400");

        let driver = OracleDriver::with_connection(
            NoopConnection,
            DriverOptions::new().with_format_date_time("DATE '%Y-%m-%d'"),
        )
        .unwrap();
        assert_eq!(driver.format_date_time(&value), "DATE '1970-01-02'");
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = OracleDriver::with_connection(
            NoopConnection,
            DriverOptions::new().with_format_date_time(""),
        )
        .unwrap_err();
        assert!(matches!(err, DriverError::Configuration(_)));
    }

    #[test]
    fn test_parse_only_format_rejected() {
        let err = OracleDriver::with_connection(
            NoopConnection,
            DriverOptions::new().with_format_date_time("TIMESTAMP '%Y-%m-%d %#z'"),
        )
        .unwrap_err();
        assert!(matches!(err, DriverError::Configuration(_)));
    }

    #[test]
    fn test_column_types_are_never_reported() {
        let result = ResultSet::new(vec!["ID".into()], vec![Row::from_iter([1_i64])]);
        assert!(driver().column_types_of(&result).is_empty());
    }
}
