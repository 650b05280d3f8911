//! # oxide-sql-oracle
//!
//! Oracle implementation of the `oxide-sql-driver` dialect contract.
//!
//! # How Oracle differs from other dialects
//!
//! - **Identifier quoting**: double quotes, with embedded quotes doubled.
//!   Quoted identifiers are case sensitive.
//! - **Pagination**: the generated SQL does not rely on `OFFSET ... FETCH`
//!   (Oracle 12c+). Limits are emulated with the [ROWNUM] pseudo-column,
//!   wrapping the statement once for a limit and twice when an offset is
//!   involved.
//! - **Error codes**: constraint failures are only distinguishable by their
//!   ORA number, which native clients expose in the vendor error slot.
//! - **Catalog**: tables and views are listed from the [CAT] dictionary
//!   view.
//! - **Capabilities**: sequences and subselects are supported; multi-row
//!   `INSERT ... SELECT`, row-value `IN` conditions, ungrouped selects and
//!   schema-qualified names are not used by the generic layer.
//! - **Not covered**: column, index and foreign key introspection and LIKE
//!   pattern rendering are not implemented yet. Interval literals are not
//!   supported.
//!
//! [ROWNUM]: https://docs.oracle.com/en/database/oracle/oracle-database/19/sqlrf/ROWNUM-Pseudocolumn.html
//! [CAT]: https://docs.oracle.com/en/database/oracle/oracle-database/19/refrn/CAT.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_sql_driver::{Connection, DialectDriver, DriverOptions, NativeError, ResultSet};
//! use oxide_sql_oracle::OracleDriver;
//!
//! struct Offline;
//!
//! impl Connection for Offline {
//!     fn query(&self, _sql: &str) -> Result<ResultSet, NativeError> {
//!         Ok(ResultSet::default())
//!     }
//! }
//!
//! let driver = OracleDriver::with_connection(Offline, DriverOptions::new()).unwrap();
//! let sql = driver
//!     .apply_limit_offset("SELECT * FROM emp", Some(10), None)
//!     .unwrap();
//! assert_eq!(sql, "SELECT * FROM (SELECT * FROM emp) WHERE ROWNUM <= 10");
//! assert_eq!(driver.quote_identifier("my\"table"), "\"my\"\"table\"");
//! ```

mod catalog;
mod driver;
mod errors;
#[cfg(feature = "oci")]
mod oci;
pub mod pagination;

pub use catalog::TABLES_QUERY;
pub use driver::OracleDriver;
pub use errors::classify_code;
#[cfg(feature = "oci")]
pub use oci::{OciConnection, OciConnector};
