//! Export options and configuration.

use super::HighlightRule;
use std::fmt;
use std::path::PathBuf;

/// Spreadsheet output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values, body rows under header-label records.
    #[default]
    Csv,
    /// Excel workbook with optional cell highlighting.
    Xlsx,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Options for exporting extracted tables.
pub struct ExportOptions {
    /// Output format.
    pub format: OutputFormat,

    /// Directory for output files. When unset, files land next to the input.
    pub output_dir: Option<PathBuf>,

    /// CSV field delimiter.
    pub delimiter: u8,

    /// Include header rows as leading records in CSV output.
    pub include_header: bool,

    /// Rule deciding which body cells get the highlight fill in XLSX
    /// output. The semantics are entirely caller policy; no rule means no
    /// highlighting.
    pub highlight: Option<Box<dyn HighlightRule>>,
}

impl ExportOptions {
    /// Create options for the given format with defaults.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the CSV field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Include or exclude header rows in CSV output.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Set the highlight rule for XLSX output.
    pub fn with_highlight_rule(mut self, rule: impl HighlightRule + 'static) -> Self {
        self.highlight = Some(Box::new(rule));
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            output_dir: None,
            delimiter: b',',
            include_header: true,
            highlight: None,
        }
    }
}

impl fmt::Debug for ExportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportOptions")
            .field("format", &self.format)
            .field("output_dir", &self.output_dir)
            .field("delimiter", &self.delimiter)
            .field("include_header", &self.include_header)
            .field("highlight", &self.highlight.as_ref().map(|_| "<rule>"))
            .finish()
    }
}
