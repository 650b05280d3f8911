//! ORA error code classification.
//!
//! Oracle reports constraint failures only through the vendor code of the
//! error-info slot; the SQL-state is too coarse to tell them apart.

use oxide_sql_driver::ErrorCategory;

/// ORA-00001 unique constraint violated, ORA-02299 duplicate keys found
/// while validating, ORA-38911 unique constraint violated (DML error log).
const UNIQUE_CONSTRAINT_CODES: [i32; 3] = [1, 2299, 38911];

/// ORA-01400 cannot insert NULL.
const NOT_NULL_CONSTRAINT_CODES: [i32; 1] = [1400];

/// ORA-02266 referenced by enabled foreign keys, ORA-02291 parent key not
/// found, ORA-02292 child record found.
const FOREIGN_KEY_CONSTRAINT_CODES: [i32; 3] = [2266, 2291, 2292];

/// Maps an ORA error number to its portable category.
#[must_use]
pub fn classify_code(code: i32) -> Option<ErrorCategory> {
    if UNIQUE_CONSTRAINT_CODES.contains(&code) {
        Some(ErrorCategory::UniqueConstraintViolation)
    } else if NOT_NULL_CONSTRAINT_CODES.contains(&code) {
        Some(ErrorCategory::NotNullConstraintViolation)
    } else if FOREIGN_KEY_CONSTRAINT_CODES.contains(&code) {
        Some(ErrorCategory::ForeignKeyConstraintViolation)
    } else {
        None
    }
}
