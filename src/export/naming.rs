//! Deterministic output file naming.

use super::OutputFormat;
use std::path::{Path, PathBuf};

/// Build the output file name for one table:
/// `{input_stem}_pg{page_number}_tb{table_index}.{ext}`.
///
/// `table_index` is the zero-based position of the table within its page.
///
/// # Example
/// ```
/// use doctab::export::{output_filename, OutputFormat};
///
/// let name = output_filename("report.pdf".as_ref(), 1, 1, OutputFormat::Csv);
/// assert_eq!(name, "report_pg1_tb1.csv");
/// ```
pub fn output_filename(
    input: &Path,
    page_number: u32,
    table_index: usize,
    format: OutputFormat,
) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(
        "{stem}_pg{page_number}_tb{table_index}.{}",
        format.extension()
    )
}

/// Full path for one table's output file.
///
/// The file name comes from [`output_filename`]; it is placed under
/// `output_dir` when given, otherwise next to the input file.
pub fn output_path(
    input: &Path,
    output_dir: Option<&Path>,
    page_number: u32,
    table_index: usize,
    format: OutputFormat,
) -> PathBuf {
    let name = output_filename(input, page_number, table_index, format);
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
