//! Driver options captured at connect time.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Options recognized by dialect drivers.
///
/// Deserializes from a JSON object. The `formatDateTime` key selects how
/// date/time values are rendered into SQL; every other key is kept in
/// [`DriverOptions::extra`] and forwarded to the native connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format_date_time: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl DriverOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Configuration`] if `value` is not an object
    /// or `formatDateTime` is not a string.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| DriverError::Configuration(format!("invalid driver options: {e}")))
    }

    /// Sets the date/time format specifier.
    #[must_use]
    pub fn with_format_date_time(mut self, spec: impl Into<String>) -> Self {
        self.format_date_time = Some(spec.into());
        self
    }

    /// Adds a connector-specific option.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the raw `formatDateTime` specifier, if set.
    #[must_use]
    pub fn format_date_time(&self) -> Option<&str> {
        self.format_date_time.as_deref()
    }

    /// Returns options not interpreted by the driver.
    #[must_use]
    pub const fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }

    /// Resolves the date/time format, falling back to Unix timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Configuration`] for an unusable specifier.
    pub fn date_time_format(&self) -> Result<DateTimeFormat> {
        self.format_date_time
            .as_deref()
            .map_or(Ok(DateTimeFormat::UnixTimestamp), DateTimeFormat::parse)
    }
}

/// How date/time values are serialized into SQL literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateTimeFormat {
    /// Seconds since the Unix epoch, specifier `"U"`.
    #[default]
    UnixTimestamp,
    /// A `chrono` strftime pattern, e.g. `'%Y-%m-%d %H:%M:%S'`.
    Pattern(String),
}

impl DateTimeFormat {
    /// Specifier selecting [`DateTimeFormat::UnixTimestamp`].
    pub const UNIX_TIMESTAMP: &'static str = "U";

    /// Parses a format specifier.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Configuration`] if `spec` is empty or cannot
    /// be rendered as a strftime pattern. Parse-only specifiers such as
    /// `%#z` are rejected here so that [`DateTimeFormat::format`] never
    /// fails.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec == Self::UNIX_TIMESTAMP {
            return Ok(Self::UnixTimestamp);
        }
        if spec.is_empty() {
            return Err(DriverError::Configuration(
                "formatDateTime must not be empty".into(),
            ));
        }
        let sample = DateTime::<Utc>::UNIX_EPOCH.fixed_offset();
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(spec)).is_err() {
            return Err(DriverError::Configuration(format!(
                "formatDateTime '{spec}' is not a valid strftime pattern"
            )));
        }
        Ok(Self::Pattern(spec.to_string()))
    }

    /// Renders `value` according to this format.
    #[must_use]
    pub fn format<Tz>(&self, value: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            Self::UnixTimestamp => value.timestamp().to_string(),
            Self::Pattern(pattern) => value.format(pattern).to_string(),
        }
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnixTimestamp => f.write_str(Self::UNIX_TIMESTAMP),
            Self::Pattern(pattern) => f.write_str(pattern),
        }
    }
}
