//! CSV output.

use super::ExportOptions;
use crate::error::Result;
use crate::extract::ExtractedTable;
use csv::WriterBuilder;
use std::path::Path;

/// Write one table as CSV: header rows first as column-label records, then
/// body rows.
///
/// The writer runs in flexible mode so tables whose rows have irregular
/// cell counts are written as-is, without padding.
pub(crate) fn write_csv(
    path: &Path,
    table: &ExtractedTable,
    options: &ExportOptions,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_path(path)?;

    if options.include_header {
        for row in &table.header.values {
            writer.write_record(row)?;
        }
    }
    for row in &table.body.values {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
