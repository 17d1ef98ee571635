//! # doctab
//!
//! Table extraction from scanned documents via the Google Document AI
//! online-processing API, exported to CSV and XLSX.
//!
//! The heavy lifting (text recognition, table-structure detection,
//! confidence scoring) happens inside the remote service. This crate covers
//! everything around it: provisioning a processor resource, resolving the
//! byte-offset text anchors the response uses in place of inline cell text,
//! flattening nested row/cell structures into plain 2D arrays, and writing
//! those arrays to spreadsheet files with optional cell highlighting.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctab::{ClientConfig, ExportOptions, OutputFormat, ProcessorClient};
//!
//! fn main() -> doctab::Result<()> {
//!     let config = ClientConfig::new("my-project", "us", "ya29.token");
//!     let client = ProcessorClient::new(config)?;
//!
//!     // Provision (or reuse) a form parser and process one file.
//!     let provisioned = doctab::create_or_get_processor(
//!         &client,
//!         "invoices",
//!         doctab::DEFAULT_PROCESSOR_TYPE,
//!     )?;
//!     let document = doctab::process_file(
//!         &client,
//!         &provisioned.processor.name,
//!         "report.pdf",
//!         None,
//!     )?;
//!
//!     // One CSV per detected table: report_pg1_tb0.csv, ...
//!     let options = ExportOptions::new(OutputFormat::Csv);
//!     let written = doctab::export_document(&document, "report.pdf".as_ref(), &options)?;
//!     println!("wrote {} tables", written.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Design notes
//!
//! - Entirely sequential and synchronous: one blocking request per input
//!   file, no retries, no shared state across files.
//! - Configuration is explicit and injected; the crate never touches
//!   process-global state or environment variables.
//! - Highlighting in XLSX output is driven by a caller-supplied
//!   [`HighlightRule`]; the crate ships only the sentinel
//!   [`SubstringRule`] and infers no accuracy semantics.

pub mod client;
pub mod detect;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;

// Re-export commonly used types
pub use client::{
    create_or_get_processor, ClientConfig, ProcessorClient, Provisioned, ProvisionOutcome,
    DEFAULT_PROCESSOR_TYPE,
};
pub use detect::mime_type_for_path;
pub use error::{Error, Result};
pub use export::{ExportOptions, HighlightRule, OutputFormat, SubstringRule};
pub use extract::{extract_tables, flatten_rows, ExtractedTable, TableData};
pub use model::{Document, Page, Processor, Table, TableCell, TableRow, TextAnchor, TextSegment};

use std::path::{Path, PathBuf};

/// Process a local file through a processor and return the document.
///
/// When `mime_type` is `None` it is detected from the file extension via
/// [`detect::mime_type_for_path`]. An explicit `mime_type` must still be
/// one the service accepts; anything else fails with
/// [`Error::UnsupportedFormat`] before any request is made.
pub fn process_file<P: AsRef<Path>>(
    client: &ProcessorClient,
    processor_name: &str,
    path: P,
    mime_type: Option<&str>,
) -> Result<Document> {
    let path = path.as_ref();
    let mime = match mime_type {
        Some(mime) if detect::is_supported_mime_type(mime) => mime,
        Some(mime) => return Err(Error::UnsupportedFormat(mime.to_string())),
        None => detect::mime_type_for_path(path)?,
    };
    client.process_document(processor_name, path, mime)
}

/// Export every table in the document, one file per (page, table) pair.
///
/// Output files are named `{stem}_pg{page}_tb{index}.{ext}` after
/// `input_path` and written per the options. Returns the written paths in
/// page-then-table order.
pub fn export_document(
    document: &Document,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>> {
    let tables = extract_tables(document);
    let mut written = Vec::with_capacity(tables.len());
    for table in &tables {
        written.push(export::export_table(table, input_path, options)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> ProcessorClient {
        ProcessorClient::new(ClientConfig::new("p", "us", "t")).expect("client should build")
    }

    #[test]
    fn test_process_file_rejects_unsupported_mime_override() {
        let client = offline_client();
        let result = process_file(
            &client,
            "projects/p/locations/us/processors/abc123",
            "notes.pdf",
            Some("text/plain"),
        );
        assert!(matches!(result, Err(Error::UnsupportedFormat(mime)) if mime == "text/plain"));
    }

    #[test]
    fn test_process_file_rejects_undetectable_extension() {
        let client = offline_client();
        let result = process_file(
            &client,
            "projects/p/locations/us/processors/abc123",
            "notes.txt",
            None,
        );
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
