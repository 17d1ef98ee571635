//! Error types for the doctab library.

use std::io;
use thiserror::Error;

/// Result type alias for doctab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing documents and writing output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files or writing spreadsheets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level HTTP failure talking to the Document AI endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error returned by the Document AI service.
    ///
    /// `status` is the canonical code string from the Google error envelope
    /// (e.g. `ALREADY_EXISTS`, `PERMISSION_DENIED`), which callers can match
    /// on instead of parsing the message.
    #[error("Document AI error ({status}): {message}")]
    Api {
        /// Canonical status code string.
        status: String,
        /// Numeric HTTP status code.
        code: u16,
        /// Human-readable message from the service.
        message: String,
    },

    /// The service response could not be deserialized.
    #[error("Response decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body was missing the document payload.
    #[error("Response contained no document")]
    MissingDocument,

    /// No processor with the requested display name exists in the project.
    #[error("No processor named {0:?} found in project")]
    ProcessorNotFound(String),

    /// The input file extension maps to no MIME type the service accepts.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Invalid client configuration (empty project, malformed token, etc.)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error writing CSV output.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Error writing XLSX output.
    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl Error {
    /// Canonical status string if this is a service-side error.
    pub fn api_status(&self) -> Option<&str> {
        match self {
            Error::Api { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Whether this error is the service reporting a name collision.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::Api { status, code, .. }
            if status == "ALREADY_EXISTS" || *code == 409)
    }
}
