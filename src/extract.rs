//! Flattening of table structures into plain 2D arrays.
//!
//! The service models a table as nested rows of cells whose text lives
//! behind anchors into the document's full text. Export wants plain strings
//! and floats, so this module resolves every anchor and collects the cell
//! confidences positionally, producing two parallel `[row][column]` arrays.

use crate::model::{Document, TableRow};

/// Flattened cell data for one group of rows.
///
/// `values` and `confidences` are always shape-congruent: same row count,
/// and per row the same cell count. Irregular cell counts across rows are
/// preserved as-is with no padding; callers that need a rectangle must
/// validate with [`TableData::is_rectangular`] before building one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    /// Normalized cell text, `[row][column]`.
    pub values: Vec<Vec<String>>,

    /// Cell confidence scores, `[row][column]`.
    pub confidences: Vec<Vec<f32>>,
}

impl TableData {
    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that every row has the same cell count.
    ///
    /// An empty table is trivially rectangular.
    pub fn is_rectangular(&self) -> bool {
        match self.values.first() {
            Some(first) => self.values.iter().all(|row| row.len() == first.len()),
            None => true,
        }
    }
}

/// Resolve a sequence of rows into parallel value and confidence arrays.
///
/// Row and cell order is preserved exactly. Each cell's text is resolved via
/// [`TextAnchor::resolve`](crate::model::TextAnchor::resolve) against `text`
/// and its layout confidence is collected at the same position.
pub fn flatten_rows(rows: &[TableRow], text: &str) -> TableData {
    let mut data = TableData::default();
    for row in rows {
        let mut row_values = Vec::with_capacity(row.cells.len());
        let mut row_confidences = Vec::with_capacity(row.cells.len());
        for cell in &row.cells {
            row_values.push(cell.layout.text_anchor.resolve(text));
            row_confidences.push(cell.layout.confidence);
        }
        data.values.push(row_values);
        data.confidences.push(row_confidences);
    }
    data
}

/// One table lifted out of a document, ready for export.
#[derive(Debug, Clone)]
pub struct ExtractedTable {
    /// 1-based page number the table was found on.
    pub page_number: u32,

    /// Zero-based position of the table within its page.
    pub table_index: usize,

    /// Flattened header rows.
    pub header: TableData,

    /// Flattened body rows.
    pub body: TableData,
}

impl ExtractedTable {
    /// Check if both header and body are empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}

/// Extract every table in the document, pages in order, tables per page in
/// layout order.
pub fn extract_tables(document: &Document) -> Vec<ExtractedTable> {
    let mut tables = Vec::with_capacity(document.table_count());
    for page in &document.pages {
        for (table_index, table) in page.tables.iter().enumerate() {
            tables.push(ExtractedTable {
                page_number: page.page_number,
                table_index,
                header: flatten_rows(&table.header_rows, &document.text),
                body: flatten_rows(&table.body_rows, &document.text),
            });
        }
    }
    tables
}
