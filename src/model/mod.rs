//! Data model for the Document AI response surface.
//!
//! These types mirror the subset of the service's `Document` JSON that the
//! extractor consumes: the full extracted text, pages, tables and the text
//! anchors that tie table cells back into the text. They are read-only views
//! over a single `:process` response and are never mutated.

mod document;
mod page;
mod processor;

pub use document::{Document, TextAnchor, TextSegment};
pub use page::{Layout, Page, Table, TableCell, TableRow};
pub use processor::{Processor, ProcessorList};
