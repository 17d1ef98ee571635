//! Document-level types and text anchor resolution.

use super::Page;
use serde::{Deserialize, Deserializer, Serialize};

/// A processed document returned by the service.
///
/// Holds the full extracted text as one string plus the per-page layout
/// structure. Table cells do not carry their own text; they reference byte
/// ranges of [`Document::text`] through [`TextAnchor`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full text extracted from the document.
    #[serde(default)]
    pub text: String,

    /// Pages in source order.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of tables across all pages.
    pub fn table_count(&self) -> usize {
        self.pages.iter().map(|p| p.tables.len()).sum()
    }

    /// Check if the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A reference to one or more byte ranges within [`Document::text`].
///
/// A cell whose text is non-contiguous in the source layout (e.g. wrapped
/// across lines) carries one segment per contiguous run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnchor {
    /// Ordered byte-offset segments.
    #[serde(default)]
    pub text_segments: Vec<TextSegment>,
}

impl TextAnchor {
    /// Resolve the anchor against the document's full text.
    ///
    /// Concatenates the referenced slices in segment order, trims leading and
    /// trailing whitespace, then collapses embedded newlines to single
    /// spaces. This is the canonical normalized cell text. An anchor with no
    /// segments resolves to the empty string.
    ///
    /// Offsets are trusted as returned by the service; there is no bounds
    /// checking, so an out-of-range segment or one that splits a UTF-8
    /// sequence panics.
    pub fn resolve(&self, text: &str) -> String {
        let mut out = String::new();
        for segment in &self.text_segments {
            out.push_str(&text[segment.start_index as usize..segment.end_index as usize]);
        }
        out.trim().replace('\n', " ")
    }

    /// Check if the anchor references no text.
    pub fn is_empty(&self) -> bool {
        self.text_segments.is_empty()
    }
}

/// A half-open `[start_index, end_index)` byte range into the full text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    /// Start offset, inclusive. Omitted by the service when zero.
    #[serde(default, deserialize_with = "index_from_json")]
    pub start_index: u64,

    /// End offset, exclusive.
    #[serde(default, deserialize_with = "index_from_json")]
    pub end_index: u64,
}

impl TextSegment {
    /// Create a segment covering `start..end`.
    pub fn new(start: u64, end: u64) -> Self {
        Self {
            start_index: start,
            end_index: end,
        }
    }
}

/// Deserialize an offset that protobuf JSON may encode as either a number
/// or a decimal string (int64 fields are stringified on the wire).
fn index_from_json<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IndexVisitor;

    impl serde::de::Visitor<'_> for IndexVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a byte offset as an integer or decimal string")
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom("negative byte offset"))
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<u64, E> {
            v.parse().map_err(serde::de::Error::custom)
        }
    }

    deserializer.deserialize_any(IndexVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(segments: &[(u64, u64)]) -> TextAnchor {
        TextAnchor {
            text_segments: segments.iter().map(|&(s, e)| TextSegment::new(s, e)).collect(),
        }
    }

    #[test]
    fn test_resolve_multiple_segments() {
        let text = "Hello\nWorld test";
        let a = anchor(&[(0, 5), (10, 15)]);
        assert_eq!(a.resolve(text), "Hellod tes");
    }

    #[test]
    fn test_resolve_normalizes_newlines_and_trims() {
        let text = "  Total\nAmount  ";
        let a = anchor(&[(0, 16)]);
        assert_eq!(a.resolve(text), "Total Amount");
    }

    #[test]
    fn test_resolve_empty_anchor() {
        let a = anchor(&[]);
        assert_eq!(a.resolve("anything"), "");
        assert!(a.is_empty());
    }

    #[test]
    fn test_resolve_is_pure() {
        let text = "cell value";
        let a = anchor(&[(0, 4)]);
        assert_eq!(a.resolve(text), a.resolve(text));
    }

    #[test]
    fn test_segment_from_string_indices() {
        let seg: TextSegment = serde_json::from_str(r#"{"startIndex":"17","endIndex":"42"}"#)
            .expect("stringified offsets");
        assert_eq!(seg, TextSegment::new(17, 42));
    }

    #[test]
    fn test_segment_from_numeric_indices() {
        let seg: TextSegment =
            serde_json::from_str(r#"{"startIndex":17,"endIndex":42}"#).expect("numeric offsets");
        assert_eq!(seg, TextSegment::new(17, 42));
    }

    #[test]
    fn test_segment_omitted_start_defaults_to_zero() {
        // proto3 omits zero-valued fields from the JSON encoding.
        let seg: TextSegment =
            serde_json::from_str(r#"{"endIndex":"5"}"#).expect("omitted startIndex");
        assert_eq!(seg, TextSegment::new(0, 5));
    }
}
