//! Document-level types and the deletion primitive.

use super::{Paragraph, StyleSheet, Table};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stable handle to a block-level element, issued by the owning document.
///
/// Handles never move when other elements are inserted or deleted. A handle
/// whose element has been deleted is *detached*: every later lookup through
/// it fails with [`Error::Detached`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(u64);

impl BlockId {
    /// Get the raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A block-level element together with its handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    /// The element itself
    pub kind: BlockKind,
}

impl Block {
    /// Get the block's handle.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Get the paragraph, if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match &self.kind {
            BlockKind::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the paragraph mutably, if this block is one.
    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match &mut self.kind {
            BlockKind::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the table, if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match &self.kind {
            BlockKind::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Get the table mutably, if this block is one.
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.kind {
            BlockKind::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self.kind, BlockKind::PageBreak)
    }
}

/// Block-level content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// A paragraph
    Paragraph(Paragraph),
    /// A table
    Table(Table),
    /// A page break
    PageBreak,
}

/// One independently-loaded, in-memory document instance.
///
/// Two documents loaded from the same template source are fully
/// independent: content, deletions, and style bindings in one are
/// invisible to the other. The body keeps elements in the order they were
/// originally present or appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    styles: StyleSheet,
    body: Vec<Block>,
    next_id: u64,
    #[serde(skip)]
    detached: HashSet<BlockId>,
}

impl Document {
    /// Create an empty document with an empty style sheet.
    pub fn new() -> Self {
        Self::with_styles(StyleSheet::new())
    }

    /// Create an empty document with the given style sheet.
    pub fn with_styles(styles: StyleSheet) -> Self {
        Self {
            styles,
            body: Vec::new(),
            next_id: 0,
            detached: HashSet::new(),
        }
    }

    /// Get the style sheet.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Get the style sheet mutably.
    pub fn styles_mut(&mut self) -> &mut StyleSheet {
        &mut self.styles
    }

    /// Get the body in document order.
    pub fn body(&self) -> &[Block] {
        &self.body
    }

    /// Number of block-level elements.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    fn check_style(&self, style: Option<&str>) -> Result<()> {
        if let Some(name) = style {
            self.styles.resolve(name)?;
        }
        Ok(())
    }

    fn push(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.body.push(Block { id, kind });
        id
    }

    /// Append a paragraph, validating its style reference.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> Result<BlockId> {
        self.check_style(paragraph.style_name())?;
        Ok(self.push(BlockKind::Paragraph(paragraph)))
    }

    /// Append a table, validating its style reference.
    pub fn add_table(&mut self, table: Table) -> Result<BlockId> {
        self.check_style(table.style_name())?;
        Ok(self.push(BlockKind::Table(table)))
    }

    /// Append a page break.
    pub fn add_page_break(&mut self) -> BlockId {
        self.push(BlockKind::PageBreak)
    }

    /// Look up a block by handle.
    pub fn block(&self, id: BlockId) -> Result<&Block> {
        if self.detached.contains(&id) {
            return Err(Error::Detached);
        }
        self.body
            .iter()
            .find(|b| b.id == id)
            .ok_or(Error::BlockNotFound(id.value()))
    }

    /// Look up a block by handle, mutably.
    pub fn block_mut(&mut self, id: BlockId) -> Result<&mut Block> {
        if self.detached.contains(&id) {
            return Err(Error::Detached);
        }
        self.body
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::BlockNotFound(id.value()))
    }

    /// Detach a block from the body and invalidate its handle.
    ///
    /// Deleting through a handle that is already detached fails with
    /// [`Error::Detached`] rather than touching unrelated content.
    pub fn delete(&mut self, id: BlockId) -> Result<()> {
        if self.detached.contains(&id) {
            return Err(Error::Detached);
        }
        let position = self
            .body
            .iter()
            .position(|b| b.id == id)
            .ok_or(Error::BlockNotFound(id.value()))?;
        self.body.remove(position);
        self.detached.insert(id);
        Ok(())
    }

    /// Delete the paragraph at the given paragraph index.
    ///
    /// The index counts paragraphs only, skipping tables and page breaks,
    /// matching the order [`Document::paragraphs`] yields them.
    pub fn delete_paragraph_at(&mut self, index: usize) -> Result<()> {
        let id = self
            .body
            .iter()
            .filter(|b| matches!(b.kind, BlockKind::Paragraph(_)))
            .nth(index)
            .map(|b| b.id)
            .ok_or(Error::ParagraphOutOfRange {
                index,
                count: self.paragraph_count(),
            })?;
        self.delete(id)
    }

    /// Iterate over paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|b| b.as_paragraph())
    }

    /// Iterate over paragraphs in document order, mutably.
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.body.iter_mut().filter_map(|b| b.as_paragraph_mut())
    }

    /// Iterate over tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|b| b.as_table())
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Number of tables.
    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Get plain text content of the whole body.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .filter_map(|b| match &b.kind {
                BlockKind::Paragraph(p) => Some(p.text()),
                BlockKind::Table(t) => Some(t.plain_text()),
                BlockKind::PageBreak => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Style;

    fn doc_with_normal() -> Document {
        let mut styles = StyleSheet::new();
        styles.define("Normal", Style::paragraph());
        Document::with_styles(styles)
    }

    #[test]
    fn test_append_order() {
        let mut doc = doc_with_normal();
        doc.add_paragraph(Paragraph::with_text("first")).unwrap();
        doc.add_page_break();
        doc.add_table(Table::new(1, 1)).unwrap();
        doc.add_paragraph(Paragraph::with_text("second")).unwrap();

        assert_eq!(doc.len(), 4);
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.table_count(), 1);
        let texts: Vec<String> = doc.paragraphs().map(|p| p.text()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_style_validation_on_append() {
        let mut doc = doc_with_normal();
        let err = doc
            .add_paragraph(Paragraph::with_text("x").styled("Heading 1"))
            .unwrap_err();
        assert!(matches!(err, Error::StyleNotFound(_)));

        assert!(doc
            .add_paragraph(Paragraph::with_text("x").styled("Normal"))
            .is_ok());
    }

    #[test]
    fn test_delete_detaches_handle() {
        let mut doc = doc_with_normal();
        let id = doc.add_paragraph(Paragraph::with_text("gone")).unwrap();
        let keep = doc.add_paragraph(Paragraph::with_text("kept")).unwrap();

        doc.delete(id).unwrap();
        assert_eq!(doc.paragraph_count(), 1);

        // every further use of the handle fails fast
        assert!(matches!(doc.block(id), Err(Error::Detached)));
        assert!(matches!(doc.delete(id), Err(Error::Detached)));

        // surviving handles are unaffected
        assert_eq!(doc.block(keep).unwrap().as_paragraph().unwrap().text(), "kept");
    }

    #[test]
    fn test_unknown_handle() {
        let doc = doc_with_normal();
        let err = doc.block(BlockId(42)).unwrap_err();
        assert!(matches!(err, Error::BlockNotFound(42)));
    }

    #[test]
    fn test_delete_paragraph_at_skips_non_paragraphs() {
        let mut doc = doc_with_normal();
        doc.add_paragraph(Paragraph::with_text("p0")).unwrap();
        doc.add_table(Table::new(1, 1)).unwrap();
        doc.add_paragraph(Paragraph::with_text("p1")).unwrap();

        doc.delete_paragraph_at(1).unwrap();

        let texts: Vec<String> = doc.paragraphs().map(|p| p.text()).collect();
        assert_eq!(texts, vec!["p0"]);
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_delete_paragraph_at_out_of_range() {
        let mut doc = doc_with_normal();
        doc.add_paragraph(Paragraph::with_text("only")).unwrap();
        let err = doc.delete_paragraph_at(3).unwrap_err();
        assert!(matches!(
            err,
            Error::ParagraphOutOfRange { index: 3, count: 1 }
        ));
    }
}
