//! Content composition operations.
//!
//! Each operation appends one typed element to the working document with
//! its fixed style binding. Style names are resolved against the
//! template's style sheet at the call site; an unknown name (for example a
//! heading level the template does not define) surfaces immediately as
//! [`crate::Error::StyleNotFound`].

use super::Report;
use crate::error::{Error, Result};
use crate::model::{Alignment, Paragraph, Run, Table};

const COMMAND_STYLE: &str = "Configuration";
const NOTE_STYLE: &str = "Note";
const WARNING_STYLE: &str = "Caution";
const NUMBERED_LIST_STYLE: &str = "Numbered List";
const TABLE_STYLE: &str = "Table Grid";

/// Indent of note and warning bodies, in points.
const BODY_INDENT_PT: f32 = 48.0;

/// Per-level indent of numbered bullets, in points.
const BULLET_INDENT_PT: f32 = 24.0;

impl Report {
    /// Add a page break to the report.
    pub fn add_page_break(&mut self) {
        self.document.add_page_break();
    }

    /// Add a justified paragraph with optional bold/underline formatting.
    pub fn add_paragraph(&mut self, text: &str, bold: bool, underline: bool) -> Result<()> {
        let mut paragraph = Paragraph::new().aligned(Alignment::Justify);
        paragraph.add_run(Run::formatted(text, bold, underline));
        self.document.add_paragraph(paragraph)?;
        Ok(())
    }

    /// Add a heading.
    ///
    /// Levels 1-9 are defined by the stock template; `numbering` selects
    /// between the numbered and unnumbered heading styles.
    pub fn add_heading(&mut self, text: &str, level: u8, numbering: bool) -> Result<()> {
        let style = if numbering {
            format!("Heading {level}")
        } else {
            format!("Heading {level}-No Numbers")
        };
        self.document
            .add_paragraph(Paragraph::with_text(text).styled(style))?;
        Ok(())
    }

    /// Add a command block.
    ///
    /// `text` may embed `\n` separators to render several commands as one
    /// styled block.
    pub fn add_command(&mut self, text: &str) -> Result<()> {
        self.document
            .add_paragraph(Paragraph::with_text(text).styled(COMMAND_STYLE))?;
        Ok(())
    }

    /// Add a note: a `Note:` label, then an indented body when `text` is
    /// non-empty.
    pub fn add_note(&mut self, text: &str) -> Result<()> {
        self.document
            .add_paragraph(Paragraph::with_text("Note:").styled(NOTE_STYLE))?;
        if !text.is_empty() {
            self.document.add_paragraph(
                Paragraph::with_text(text)
                    .aligned(Alignment::Justify)
                    .indented(BODY_INDENT_PT),
            )?;
        }
        Ok(())
    }

    /// Add a warning: an `Important:` label, then an indented body.
    pub fn add_warning(&mut self, text: &str) -> Result<()> {
        self.document
            .add_paragraph(Paragraph::with_text("Important:").styled(WARNING_STYLE))?;
        self.document.add_paragraph(
            Paragraph::with_text(text)
                .aligned(Alignment::Justify)
                .indented(BODY_INDENT_PT),
        )?;
        Ok(())
    }

    /// Add a bullet.
    ///
    /// With `numbering` the item uses the numbered-list style indented by
    /// `24 x level` points; without it, the `List Bullet <level>` style
    /// (levels 1-3 in the stock template) with no indent override.
    pub fn add_bullet(&mut self, text: &str, level: u8, numbering: bool) -> Result<()> {
        let paragraph = if numbering {
            Paragraph::with_text(text)
                .styled(NUMBERED_LIST_STYLE)
                .aligned(Alignment::Justify)
                .indented(BULLET_INDENT_PT * f32::from(level))
        } else {
            Paragraph::with_text(text)
                .styled(format!("List Bullet {level}"))
                .aligned(Alignment::Justify)
        };
        self.document.add_paragraph(paragraph)?;
        Ok(())
    }

    /// Add a table from a row-major matrix; the first row is the header.
    ///
    /// Column count comes from the header row. Rows longer than the header
    /// fail with [`crate::Error::CellOutOfRange`]; shorter rows leave the
    /// remaining cells blank. Cell values are stringified. An empty spacer
    /// paragraph follows the table.
    pub fn add_table<S: ToString>(&mut self, matrix: &[Vec<S>]) -> Result<()> {
        let header = matrix.first().ok_or(Error::EmptyTable)?;
        let mut table = Table::new(matrix.len(), header.len()).styled(TABLE_STYLE);

        for (row, values) in matrix.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                table.set_cell(row, col, value.to_string())?;
            }
        }

        self.document.add_table(table)?;
        self.document.add_paragraph(Paragraph::new())?;
        Ok(())
    }
}
