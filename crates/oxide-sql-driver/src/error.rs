//! Error types for dialect drivers.
//!
//! Native client failures arrive as [`NativeError`]. A driver inspects the
//! vendor code carried in the error-info slot and reclassifies the failure
//! into the portable [`DriverError`] taxonomy. Failures that cannot be
//! classified pass through unchanged as [`DriverError::Native`].

use std::fmt;

use thiserror::Error;

/// An error reported by the native database client.
///
/// The layout follows the common client convention of a three-part error
/// info: the portable SQL-state, a vendor-specific code, and a message.
/// Some engines only expose meaningful codes through the vendor slot, which
/// is why classification reads [`NativeError::code`] and not the SQL-state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    sqlstate: Option<String>,
    code: Option<i32>,
    message: String,
}

impl NativeError {
    /// Creates a native error carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            sqlstate: None,
            code: None,
            message: message.into(),
        }
    }

    /// Sets the vendor error code (the error-info slot).
    #[must_use]
    pub const fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the portable SQL-state.
    #[must_use]
    pub fn with_sqlstate(mut self, sqlstate: impl Into<String>) -> Self {
        self.sqlstate = Some(sqlstate.into());
        self
    }

    /// Returns the vendor error code, if the client reported one.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// Returns the SQL-state, if the client reported one.
    #[must_use]
    pub fn sqlstate(&self) -> Option<&str> {
        self.sqlstate.as_deref()
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(state) = &self.sqlstate {
            write!(f, "SQLSTATE[{state}]: ")?;
        }
        if let Some(code) = self.code {
            write!(f, "[{code}] ")?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for NativeError {}

/// Portable classification of a native failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A unique or primary key constraint was violated.
    UniqueConstraintViolation,
    /// A NULL was written into a NOT NULL column.
    NotNullConstraintViolation,
    /// A foreign key constraint was violated.
    ForeignKeyConstraintViolation,
}

/// Errors surfaced by a dialect driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Unique constraint violation.
    #[error("unique constraint violation: {0}")]
    UniqueConstraintViolation(#[source] NativeError),

    /// NOT NULL constraint violation.
    #[error("not null constraint violation: {0}")]
    NotNullConstraintViolation(#[source] NativeError),

    /// Foreign key constraint violation.
    #[error("foreign key constraint violation: {0}")]
    ForeignKeyConstraintViolation(#[source] NativeError),

    /// A native failure the driver could not classify.
    #[error(transparent)]
    Native(NativeError),

    /// The dialect deliberately does not offer this feature.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// The feature belongs to the contract but this dialect lacks it.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// The caller passed an argument outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Driver options could not be interpreted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A catalog query returned rows of an unexpected shape.
    #[error("introspection error: {0}")]
    Introspection(String),
}

impl DriverError {
    /// Wraps a native error into the variant matching `category`.
    #[must_use]
    pub const fn classified(category: ErrorCategory, native: NativeError) -> Self {
        match category {
            ErrorCategory::UniqueConstraintViolation => Self::UniqueConstraintViolation(native),
            ErrorCategory::NotNullConstraintViolation => Self::NotNullConstraintViolation(native),
            ErrorCategory::ForeignKeyConstraintViolation => {
                Self::ForeignKeyConstraintViolation(native)
            }
        }
    }

    /// Returns the category of a classified constraint failure.
    #[must_use]
    pub const fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::UniqueConstraintViolation(_) => Some(ErrorCategory::UniqueConstraintViolation),
            Self::NotNullConstraintViolation(_) => Some(ErrorCategory::NotNullConstraintViolation),
            Self::ForeignKeyConstraintViolation(_) => {
                Some(ErrorCategory::ForeignKeyConstraintViolation)
            }
            _ => None,
        }
    }

    /// Returns the underlying native error, classified or not.
    #[must_use]
    pub const fn native(&self) -> Option<&NativeError> {
        match self {
            Self::UniqueConstraintViolation(e)
            | Self::NotNullConstraintViolation(e)
            | Self::ForeignKeyConstraintViolation(e)
            | Self::Native(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NativeError> for DriverError {
    fn from(err: NativeError) -> Self {
        Self::Native(err)
    }
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;
