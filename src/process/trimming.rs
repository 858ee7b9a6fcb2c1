use crate::error::{CleanError, Result};
use crate::process::{raw_table::RawTable, utils::strip_annotations};
use tracing::trace;

/// Strip annotations from every value of `column`, in place.
/// Returns how many values actually changed.
pub fn apply_cleaning(table: &mut RawTable, column: &str) -> Result<usize> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut changed = 0;
    for (row_no, row) in table.rows.iter_mut().enumerate() {
        let len = row.len();
        let cell = row.get_mut(idx).ok_or_else(|| CleanError::ShortRow {
            row: row_no,
            len,
            column: column.to_string(),
        })?;
        let cleaned = strip_annotations(cell);
        if cleaned != *cell {
            trace!(row_no, before = %cell, after = %cleaned, "cleaned value");
            *cell = cleaned;
            changed += 1;
        }
    }
    Ok(changed)
}
