//! Input format detection.
//!
//! The service wants an explicit MIME type alongside the raw bytes, so the
//! common case is mapping the input file's extension to one of the document
//! and image types it accepts.

use crate::error::{Error, Result};
use std::path::Path;

/// MIME types the service accepts, keyed by lowercase file extension.
const SUPPORTED_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("gif", "image/gif"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
];

/// Detect the MIME type for an input file from its extension.
///
/// # Returns
/// * `Ok(mime)` for a supported document or image extension
/// * `Err(Error::UnsupportedFormat)` otherwise
///
/// # Example
/// ```
/// use doctab::detect::mime_type_for_path;
///
/// let mime = mime_type_for_path("scan.pdf").unwrap();
/// assert_eq!(mime, "application/pdf");
/// ```
pub fn mime_type_for_path<P: AsRef<Path>>(path: P) -> Result<&'static str> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    SUPPORTED_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
}

/// Check whether a MIME type string is one the service accepts.
pub fn is_supported_mime_type(mime: &str) -> bool {
    SUPPORTED_TYPES.iter().any(|(_, m)| *m == mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_common_extensions() {
        assert_eq!(mime_type_for_path("report.pdf").unwrap(), "application/pdf");
        assert_eq!(mime_type_for_path("scan.JPG").unwrap(), "image/jpeg");
        assert_eq!(mime_type_for_path("page.tiff").unwrap(), "image/tiff");
    }

    #[test]
    fn test_detect_unknown_extension() {
        let result = mime_type_for_path("notes.txt");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_detect_no_extension() {
        assert!(mime_type_for_path("Makefile").is_err());
    }

    #[test]
    fn test_is_supported_mime_type() {
        assert!(is_supported_mime_type("application/pdf"));
        assert!(!is_supported_mime_type("text/plain"));
    }
}
