//! Page and table layout types.

use super::TextAnchor;
use serde::{Deserialize, Serialize};

/// A single page of the processed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page number (1-based, assigned by the source document's layout).
    #[serde(default)]
    pub page_number: u32,

    /// Tables detected on this page, in layout order.
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Page {
    /// Check if the page carries no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A table detected on a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Header rows, in order. May be empty.
    #[serde(default)]
    pub header_rows: Vec<TableRow>,

    /// Body rows, in order.
    #[serde(default)]
    pub body_rows: Vec<TableRow>,
}

impl Table {
    /// Total number of rows (header + body).
    pub fn row_count(&self) -> usize {
        self.header_rows.len() + self.body_rows.len()
    }

    /// Number of columns, taken from the first header row, falling back to
    /// the first body row. Rows are not guaranteed to share this width.
    pub fn column_count(&self) -> usize {
        self.header_rows
            .first()
            .or_else(|| self.body_rows.first())
            .map(|r| r.cells.len())
            .unwrap_or(0)
    }

    /// Check if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.header_rows.is_empty() && self.body_rows.is_empty()
    }
}

/// A row of table cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells in column order.
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// A single table cell.
///
/// Cells carry no inline text; the layout's anchor points into the
/// document's full text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Position and recognition info for the cell.
    #[serde(default)]
    pub layout: Layout,
}

/// Recognition layout attached to a cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Reference into the document's full text.
    #[serde(default)]
    pub text_anchor: TextAnchor,

    /// Service confidence for this region, in `[0.0, 1.0]`.
    #[serde(default)]
    pub confidence: f32,
}
