//! Export of extracted tables to spreadsheet files.
//!
//! One output file per (page, table) pair, named by the deterministic
//! `{stem}_pg{page}_tb{index}.{ext}` scheme.

mod csv;
mod highlight;
mod naming;
mod options;
mod xlsx;

pub use highlight::{HighlightRule, SubstringRule};
pub use naming::{output_filename, output_path};
pub use options::{ExportOptions, OutputFormat};

use crate::error::Result;
use crate::extract::ExtractedTable;
use std::path::{Path, PathBuf};

/// Write one extracted table to its output file.
///
/// The output location is derived from `input` and the options' output
/// directory; the written path is returned.
pub fn export_table(
    table: &ExtractedTable,
    input: &Path,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let path = output_path(
        input,
        options.output_dir.as_deref(),
        table.page_number,
        table.table_index,
        options.format,
    );
    match options.format {
        OutputFormat::Csv => csv::write_csv(&path, table, options)?,
        OutputFormat::Xlsx => xlsx::write_xlsx(&path, table, options)?,
    }
    log::info!("wrote {}", path.display());
    Ok(path)
}
