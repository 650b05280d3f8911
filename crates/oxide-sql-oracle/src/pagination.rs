//! Row limiting through the `ROWNUM` pseudo-column.
//!
//! The generated SQL targets servers without `OFFSET ... FETCH`. `ROWNUM`
//! is assigned as rows pass the WHERE clause of the query block it belongs
//! to, so `ROWNUM > n` never matches in a single block. With an offset the
//! statement is wrapped twice: the inner block numbers rows and applies
//! the upper bound, the outer block filters on the materialized number.

use oxide_sql_driver::{DriverError, Result};

/// Alias of the row number column exposed by the offset wrapper.
pub const ROW_NUMBER_ALIAS: &str = "__rnum";

/// Rewrites `sql` to return at most `limit` rows after skipping `offset`.
///
/// # Errors
///
/// Returns [`DriverError::InvalidArgument`] if either bound is negative or
/// `offset + limit` overflows.
pub fn apply_limit_offset(sql: &str, limit: Option<i64>, offset: Option<i64>) -> Result<String> {
    if limit.is_some_and(i64::is_negative) || offset.is_some_and(i64::is_negative) {
        return Err(DriverError::InvalidArgument(
            "negative offset or limit".into(),
        ));
    }

    match (limit, offset.filter(|&o| o != 0)) {
        (limit, Some(offset)) => {
            let upper = match limit {
                Some(limit) => {
                    let bound = offset.checked_add(limit).ok_or_else(|| {
                        DriverError::InvalidArgument(format!(
                            "offset {offset} plus limit {limit} overflows"
                        ))
                    })?;
                    format!(" WHERE ROWNUM <= {bound}")
                }
                None => String::new(),
            };
            Ok(format!(
                "SELECT * FROM (SELECT t.*, ROWNUM AS \"{ROW_NUMBER_ALIAS}\" FROM ({sql}) t{upper}) \
                 WHERE \"{ROW_NUMBER_ALIAS}\" > {offset}"
            ))
        }
        (Some(limit), None) => Ok(format!("SELECT * FROM ({sql}) WHERE ROWNUM <= {limit}")),
        (None, None) => Ok(sql.to_string()),
    }
}
