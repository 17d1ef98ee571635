//! XLSX output with conditional cell highlighting.

use super::ExportOptions;
use crate::error::Result;
use crate::extract::ExtractedTable;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;

/// Fill applied to body cells matched by the highlight rule.
const HIGHLIGHT_COLOR: Color = Color::RGB(0xFF0000);

/// Write one table as an XLSX workbook: header rows bold, body rows below,
/// with the highlight fill on body cells matched by the options' rule.
pub(crate) fn write_xlsx(
    path: &Path,
    table: &ExtractedTable,
    options: &ExportOptions,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    let highlight_format = Format::new().set_background_color(HIGHLIGHT_COLOR);

    let mut row_index: u32 = 0;
    for row in &table.header.values {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string_with_format(row_index, col as u16, value, &header_format)?;
        }
        row_index += 1;
    }

    for row in &table.body.values {
        for (col, value) in row.iter().enumerate() {
            let highlighted = options
                .highlight
                .as_ref()
                .is_some_and(|rule| rule.matches(value));
            if highlighted {
                worksheet.write_string_with_format(
                    row_index,
                    col as u16,
                    value,
                    &highlight_format,
                )?;
            } else {
                worksheet.write_string(row_index, col as u16, value)?;
            }
        }
        row_index += 1;
    }

    workbook.save(path)?;
    Ok(())
}
