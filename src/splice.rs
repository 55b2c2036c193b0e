//! Cross-document element cloning.
//!
//! A block-level element is owned by exactly one document instance and
//! cannot be re-attached to another, so content moves between instances by
//! value: a new element is created in the destination carrying the source's
//! text, style name, and (for tables) dimensions.

use crate::error::Result;
use crate::model::{BlockId, Document, Paragraph, Table};

/// Clone a paragraph into another document.
///
/// The clone carries the source's combined text and style name. Run-level
/// granularity is not preserved: the text collapses into a single plain run.
pub fn clone_paragraph(source: &Paragraph, dest: &mut Document) -> Result<BlockId> {
    let mut copy = Paragraph::with_text(source.text());
    if let Some(style) = source.style_name() {
        copy = copy.styled(style);
    }
    dest.add_paragraph(copy)
}

/// Clone a table into another document.
///
/// The clone has the source's dimensions and style name, with each cell's
/// text copied independently. Mutating the clone never affects the source.
pub fn clone_table(source: &Table, dest: &mut Document) -> Result<BlockId> {
    let mut copy = Table::new(source.row_count(), source.column_count());
    if let Some(style) = source.style_name() {
        copy = copy.styled(style);
    }
    for row in 0..source.row_count() {
        for col in 0..source.column_count() {
            copy.set_cell(row, col, source.cell(row, col)?.text.clone())?;
        }
    }
    dest.add_table(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Run, Style, StyleSheet};

    fn fresh_document() -> Document {
        let mut styles = StyleSheet::new();
        styles.define("Normal", Style::paragraph());
        styles.define("Note", Style::paragraph().bold());
        styles.define("Table Grid", Style::table());
        Document::with_styles(styles)
    }

    #[test]
    fn test_clone_paragraph_flattens_runs() {
        let mut source = Paragraph::new().styled("Note");
        source.add_run(Run::formatted("Note:", true, false));
        source.add_run(Run::new(" check the cabling"));

        let mut dest = fresh_document();
        let id = clone_paragraph(&source, &mut dest).unwrap();

        let cloned = dest.block(id).unwrap().as_paragraph().unwrap();
        assert_eq!(cloned.text(), "Note: check the cabling");
        assert_eq!(cloned.runs.len(), 1);
        assert!(!cloned.runs[0].bold);
        assert_eq!(cloned.style_name(), Some("Note"));
    }

    #[test]
    fn test_clone_paragraph_missing_style() {
        let source = Paragraph::with_text("x").styled("Exotic");
        let mut dest = fresh_document();
        let err = clone_paragraph(&source, &mut dest).unwrap_err();
        assert!(matches!(err, Error::StyleNotFound(name) if name == "Exotic"));
    }

    #[test]
    fn test_clone_table_copies_cells() {
        let mut source = Table::new(2, 3).styled("Table Grid");
        source.set_cell(0, 0, "Name").unwrap();
        source.set_cell(0, 1, "Role").unwrap();
        source.set_cell(0, 2, "Date").unwrap();
        source.set_cell(1, 1, "Reviewer").unwrap();

        let mut dest = fresh_document();
        let id = clone_table(&source, &mut dest).unwrap();

        let cloned = dest.block(id).unwrap().as_table().unwrap();
        assert_eq!(cloned.row_count(), 2);
        assert_eq!(cloned.column_count(), 3);
        assert_eq!(cloned.cell(1, 1).unwrap().text, "Reviewer");
        assert_eq!(cloned.style_name(), Some("Table Grid"));
    }

    #[test]
    fn test_clone_table_is_independent() {
        let mut source = Table::new(1, 1).styled("Table Grid");
        source.set_cell(0, 0, "original").unwrap();

        let mut dest = fresh_document();
        let id = clone_table(&source, &mut dest).unwrap();

        let cloned = dest.block_mut(id).unwrap().as_table_mut().unwrap();
        cloned.set_cell(0, 0, "mutated").unwrap();

        assert_eq!(source.cell(0, 0).unwrap().text, "original");
    }
}
