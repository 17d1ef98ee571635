//! Processor resource types.

use serde::{Deserialize, Serialize};

/// A remote processor resource.
///
/// A processor is a named configuration of the document-understanding
/// service selecting which extraction model to invoke. Its `name` is the
/// full resource path (`projects/{p}/locations/{l}/processors/{id}`) used
/// in `:process` requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processor {
    /// Full resource name. Output-only; empty in creation requests.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Processor type, e.g. `FORM_PARSER_PROCESSOR`.
    #[serde(default, rename = "type")]
    pub processor_type: String,

    /// Human-chosen display name, unique per project by convention only.
    #[serde(default)]
    pub display_name: String,

    /// Lifecycle state reported by the service, e.g. `ENABLED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One page of a processor list response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorList {
    /// Processors on this page.
    #[serde(default)]
    pub processors: Vec<Processor>,

    /// Token for the next page, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_type_field_rename() {
        let p: Processor = serde_json::from_str(
            r#"{
                "name": "projects/p/locations/us/processors/abc123",
                "type": "FORM_PARSER_PROCESSOR",
                "displayName": "invoices",
                "state": "ENABLED"
            }"#,
        )
        .expect("processor json");

        assert_eq!(p.processor_type, "FORM_PARSER_PROCESSOR");
        assert_eq!(p.display_name, "invoices");
    }

    #[test]
    fn test_empty_list_page() {
        let list: ProcessorList = serde_json::from_str("{}").expect("empty list");
        assert!(list.processors.is_empty());
        assert!(list.next_page_token.is_none());
    }
}
