use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{BatchError, Result};

/// Read address strings from the first field of each row of a delimited file
///
/// `start_row` and `end_row` are 1-based inclusive bounds; `None` means
/// unbounded. Rows before `start_row` are skipped and reading stops once the
/// row index exceeds `end_row`.
pub fn read_rows(
    path: &Path,
    start_row: Option<usize>,
    end_row: Option<usize>,
) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut addresses = Vec::new();
    let mut row = 0usize;
    for record in reader.records() {
        let record = record?;
        row += 1;
        if start_row.is_some_and(|start| row < start) {
            continue;
        }
        if end_row.is_some_and(|end| row > end) {
            break;
        }
        // One address per row, first field only
        let first = record
            .get(0)
            .ok_or(BatchError::MissingField { row })?;
        addresses.push(first.to_string());
    }

    Ok(addresses)
}
