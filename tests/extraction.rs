//! Integration tests for response deserialization and table extraction.

use doctab::{extract_tables, Document};

/// A trimmed `:process` response document: one page, one table with a
/// two-column header and two body rows, offsets as protobuf JSON strings.
const SAMPLE_DOCUMENT: &str = r#"{
    "text": "A\nB\n1\n2\n3\n4\n",
    "pages": [
        {
            "pageNumber": 1,
            "tables": [
                {
                    "headerRows": [
                        {
                            "cells": [
                                {"layout": {"textAnchor": {"textSegments": [{"endIndex": "1"}]}, "confidence": 0.99}},
                                {"layout": {"textAnchor": {"textSegments": [{"startIndex": "2", "endIndex": "3"}]}, "confidence": 0.98}}
                            ]
                        }
                    ],
                    "bodyRows": [
                        {
                            "cells": [
                                {"layout": {"textAnchor": {"textSegments": [{"startIndex": "4", "endIndex": "5"}]}, "confidence": 0.97}},
                                {"layout": {"textAnchor": {"textSegments": [{"startIndex": "6", "endIndex": "7"}]}, "confidence": 0.96}}
                            ]
                        },
                        {
                            "cells": [
                                {"layout": {"textAnchor": {"textSegments": [{"startIndex": "8", "endIndex": "9"}]}, "confidence": 0.95}},
                                {"layout": {"textAnchor": {"textSegments": [{"startIndex": "10", "endIndex": "11"}]}, "confidence": 0.94}}
                            ]
                        }
                    ]
                }
            ]
        }
    ]
}"#;

fn sample_document() -> Document {
    serde_json::from_str(SAMPLE_DOCUMENT).expect("sample document should deserialize")
}

#[test]
fn deserializes_service_response_shape() {
    let document = sample_document();
    assert_eq!(document.page_count(), 1);
    assert_eq!(document.table_count(), 1);
    assert_eq!(document.pages[0].page_number, 1);
    assert_eq!(document.pages[0].tables[0].column_count(), 2);
}

#[test]
fn extracts_header_and_body_literals() {
    let document = sample_document();
    let tables = extract_tables(&document);
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(table.page_number, 1);
    assert_eq!(table.table_index, 0);
    assert_eq!(table.header.values, vec![vec!["A", "B"]]);
    assert_eq!(table.body.values, vec![vec!["1", "2"], vec!["3", "4"]]);
    assert_eq!(
        table.body.confidences,
        vec![vec![0.97, 0.96], vec![0.95, 0.94]]
    );
    assert!(table.header.is_rectangular());
    assert!(table.body.is_rectangular());
}

#[test]
fn extraction_is_repeatable() {
    // Resolution is a pure function of (anchor, text); a second pass over
    // the same document must produce identical output.
    let document = sample_document();
    let first = extract_tables(&document);
    let second = extract_tables(&document);
    assert_eq!(first[0].header.values, second[0].header.values);
    assert_eq!(first[0].body.values, second[0].body.values);
}

#[test]
fn round_trip_preserves_body_order() {
    // Flattening then rebuilding a table with the same header keeps body
    // row order and values.
    let document = sample_document();
    let table = &extract_tables(&document)[0];

    let rebuilt: Vec<(String, String)> = table
        .body
        .values
        .iter()
        .map(|row| (row[0].clone(), row[1].clone()))
        .collect();
    assert_eq!(
        rebuilt,
        vec![
            ("1".to_string(), "2".to_string()),
            ("3".to_string(), "4".to_string()),
        ]
    );
}

#[test]
fn document_without_tables_extracts_nothing() {
    let document: Document =
        serde_json::from_str(r#"{"text": "no tables here", "pages": [{"pageNumber": 1}]}"#)
            .expect("sparse document");
    assert!(extract_tables(&document).is_empty());
}
