//! Catalog introspection through the `CAT` dictionary view.

use oxide_sql_driver::{DriverError, Result, ResultSet, TableDescriptor};
use tracing::trace;

/// Lists every object owned by the current user with its type.
pub const TABLES_QUERY: &str = "SELECT * FROM cat";

const TABLE_TYPE: &str = "TABLE";
const VIEW_TYPE: &str = "VIEW";

/// Turns rows of `CAT` (`TABLE_NAME`, `TABLE_TYPE`) into descriptors.
///
/// Synonyms, sequences and other object types are skipped. Catalog order
/// is preserved.
pub fn tables_from_catalog(result: ResultSet) -> Result<Vec<TableDescriptor>> {
    let mut tables = Vec::new();
    for (index, row) in result.into_iter().enumerate() {
        let is_view = match row.get_str(1) {
            Some(TABLE_TYPE) => false,
            Some(VIEW_TYPE) => true,
            other => {
                trace!(row = index, kind = ?other, "skipping catalog entry");
                continue;
            }
        };
        let name = row.get_str(0).ok_or_else(|| {
            DriverError::Introspection(format!("catalog row {index} has no textual name"))
        })?;
        tables.push(TableDescriptor {
            name: name.to_string(),
            is_view,
        });
    }
    Ok(tables)
}
