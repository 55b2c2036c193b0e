//! Error types for the reportdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for reportdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling or persisting a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing a document package.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document package could not be parsed.
    #[error("Invalid document package: {0}")]
    Package(String),

    /// The package declares a format this version does not understand.
    #[error("Unsupported package format: {0}")]
    UnsupportedFormat(String),

    /// A style name is absent from the template's style sheet.
    #[error("Style not found in style sheet: {0}")]
    StyleNotFound(String),

    /// An element handle was used after the element was deleted.
    #[error("Element handle is detached")]
    Detached,

    /// No element with this id exists in the document.
    #[error("No element with id {0} in this document")]
    BlockNotFound(u64),

    /// Paragraph index is out of range.
    #[error("Paragraph index {index} is out of range (document has {count} paragraphs)")]
    ParagraphOutOfRange {
        /// Requested paragraph index.
        index: usize,
        /// Number of paragraphs in the document.
        count: usize,
    },

    /// Cell coordinates fall outside the table grid.
    #[error("Cell ({row}, {col}) is out of range for a {rows}x{cols} table")]
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Table row count.
        rows: usize,
        /// Table column count.
        cols: usize,
    },

    /// The ending source does not have the minimum shape the splice expects.
    #[error("Ending source has {found} {kind}, need at least {needed}")]
    EndingTooShort {
        /// What ran short ("paragraphs" or "tables").
        kind: &'static str,
        /// How many the ending source actually has.
        found: usize,
        /// The minimum the splice requires.
        needed: usize,
    },

    /// `add_table` was given a matrix with no rows.
    #[error("Table matrix is empty")]
    EmptyTable,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Package(err.to_string())
    }
}
