//! Document model types for report composition.
//!
//! This module is the in-memory document object model the report engine
//! builds against: an ordered body of block-level elements (paragraphs,
//! tables, page breaks) owned by a [`Document`], plus the named style sheet
//! element styles are resolved against.

mod document;
mod paragraph;
mod style;
mod table;

pub use document::{Block, BlockId, BlockKind, Document};
pub use paragraph::{Alignment, Paragraph, Run};
pub use style::{Style, StyleKind, StyleSheet};
pub use table::{Table, TableCell, TableRow};
