//! # oxide-sql-driver
//!
//! The contract a SQL dialect must satisfy so that one query-building and
//! result-processing engine can run unchanged across database engines.
//!
//! This crate provides:
//! - [`DialectDriver`], the polymorphic dialect contract
//! - [`Connection`] and [`Connector`], what a driver needs from the native
//!   client
//! - a portable error taxonomy ([`DriverError`], [`ErrorCategory`]) that
//!   native failures are reclassified into
//! - normalized schema descriptors returned by introspection
//!
//! ## Error classification
//!
//! ```rust
//! use oxide_sql_driver::{DriverError, ErrorCategory, NativeError};
//!
//! let native = NativeError::new("unique constraint violated").with_code(1);
//! let err = DriverError::classified(ErrorCategory::UniqueConstraintViolation, native);
//!
//! assert_eq!(err.category(), Some(ErrorCategory::UniqueConstraintViolation));
//! assert_eq!(err.native().and_then(NativeError::code), Some(1));
//! ```
//!
//! ## Options
//!
//! ```rust
//! use oxide_sql_driver::{DateTimeFormat, DriverOptions};
//!
//! let options = DriverOptions::from_json(serde_json::json!({
//!     "formatDateTime": "'%Y-%m-%d'",
//! }))
//! .unwrap();
//! assert_eq!(
//!     options.date_time_format().unwrap(),
//!     DateTimeFormat::Pattern("'%Y-%m-%d'".into())
//! );
//! ```

mod connection;
mod driver;
mod error;
mod options;
mod schema;

pub use connection::{Connection, Connector, ResultSet, Row, Value};
pub use driver::{Capability, DialectDriver, LikeAnchor};
pub use error::{DriverError, ErrorCategory, NativeError, Result};
pub use options::{DateTimeFormat, DriverOptions};
pub use schema::{
    ColumnDescriptor, ColumnType, ForeignKeyDescriptor, IndexDescriptor, TableDescriptor,
};
