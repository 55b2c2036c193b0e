//! Built-in starter template.
//!
//! The report engine works from a template package on disk. This module
//! builds the stock template: a front page with substitution placeholders,
//! the standard scaffolding sections with placeholder-instruction bodies,
//! and the closing acceptance section with its three sign-off tables. The
//! acceptance text occupies the paragraph range the ending splice reads
//! (the 24th-from-last up to the 9th-from-last paragraph), with the
//! sign-off tables as the template's last three tables.

use crate::error::Result;
use crate::model::{Document, Paragraph, Style, StyleSheet, Table};
use crate::package;
use std::path::Path;

/// Section headings whose bodies the template leaves for the author.
const SCAFFOLD_SECTIONS: [&str; 6] = [
    "Preface",
    "Scope",
    "References",
    "Prerequisites",
    "Summary",
    "Next Steps",
];

/// Acceptance text spliced into every saved report. Blank entries become
/// empty paragraphs, which the splice skips.
const ACCEPTANCE_TEXT: [&str; 14] = [
    "",
    "This document requires review and sign-off before the work it describes is considered delivered.",
    "",
    "Review confirms that:",
    "the scope matches the agreed statement of work,",
    "the procedures were executed as described,",
    "the results meet the acceptance criteria.",
    "",
    "Sign-off below indicates acceptance of this document in its entirety.",
    "",
    "Distribution of the signed document is restricted to the parties listed on the front page.",
    "",
    "Questions regarding this document should be directed to the document owner.",
    "",
];

const SIGN_OFF_ROLES: [&str; 3] = ["Reviewed by", "Approved by", "Accepted by"];

fn starter_styles() -> StyleSheet {
    let mut styles = StyleSheet::new();
    styles.define("Normal", Style::paragraph());
    styles.define("Title", Style::paragraph().sized(28.0).bold());
    styles.define("Subtitle", Style::paragraph().sized(16.0));
    for level in 1..=9u8 {
        let heading = Style::paragraph().sized(18.0 - f32::from(level)).bold();
        styles.define(format!("Heading {level}"), heading.clone());
        styles.define(format!("Heading {level}-No Numbers"), heading);
    }
    for level in 1..=3u8 {
        styles.define(format!("List Bullet {level}"), Style::paragraph());
    }
    styles.define("Numbered List", Style::paragraph());
    styles.define("Configuration", Style::paragraph().sized(9.0));
    styles.define("Note", Style::paragraph().bold());
    styles.define("Caution", Style::paragraph().bold());
    styles.define("Table Grid", Style::table());
    styles
}

fn sign_off_table() -> Table {
    let mut table = Table::new(4, 2).styled("Table Grid");
    let labels = ["Name", "Role", "Signature", "Date"];
    for (row, label) in labels.iter().enumerate() {
        // second column stays blank for the signatory to fill in
        table.rows[row].cells[0].text = (*label).to_string();
    }
    table
}

/// Build the stock report template in memory.
pub fn starter() -> Result<Document> {
    let mut doc = Document::with_styles(starter_styles());

    // front page
    doc.add_paragraph(Paragraph::with_text("{title}").styled("Title"))?;
    doc.add_paragraph(Paragraph::with_text("{sub-title}").styled("Subtitle"))?;
    doc.add_paragraph(Paragraph::with_text("{version}"))?;
    doc.add_paragraph(Paragraph::with_text("{date}"))?;
    doc.add_page_break();

    // scaffolding sections, stripped at save time when left unfilled
    for section in SCAFFOLD_SECTIONS {
        doc.add_paragraph(Paragraph::with_text(section).styled("Heading 1"))?;
        doc.add_paragraph(Paragraph::with_text(crate::report::PLACEHOLDER_SENTINEL))?;
    }
    doc.add_page_break();

    // closing acceptance text
    doc.add_paragraph(Paragraph::with_text("Acceptance").styled("Heading 1-No Numbers"))?;
    for line in ACCEPTANCE_TEXT {
        doc.add_paragraph(Paragraph::with_text(line))?;
    }

    // sign-off tables with caption and spacing
    for role in SIGN_OFF_ROLES {
        doc.add_paragraph(Paragraph::with_text(role).styled("Heading 2-No Numbers"))?;
        doc.add_table(sign_off_table())?;
        doc.add_paragraph(Paragraph::new())?;
        doc.add_paragraph(Paragraph::new())?;
    }

    Ok(doc)
}

/// Write the stock template as a package at the given path.
pub fn write_starter<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = starter()?;
    package::save(&doc, path)
}
