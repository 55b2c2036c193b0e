//! Report assembly on top of a loaded template.
//!
//! A [`Report`] owns the *working document*: one instance of the template,
//! loaded at construction, with the front-page placeholders already
//! resolved. Composer operations grow its body; [`Report::save`] strips the
//! scaffolding left by unfilled template sections, splices the closing
//! acceptance content from a second, untouched template instance, and
//! serializes the result.

mod clock;
mod compose;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Table};
use crate::{package, splice};
use std::path::{Path, PathBuf};

/// Marker paragraph used by template sections the author never filled in.
/// Both the marker and its preceding heading are stripped at save time.
pub const PLACEHOLDER_SENTINEL: &str =
    "<Enter appropriate text in this section using MSWord style NORMAL.>";

const TITLE_TOKEN: &str = "{title}";
const SUBTITLE_TOKEN: &str = "{sub-title}";
const VERSION_TOKEN: &str = "{version}";
const DATE_TOKEN: &str = "{date}";

/// The ending splice reads the template's paragraphs in the range
/// `[len - ENDING_START_FROM_END, len - ENDING_STOP_FROM_END)` and its last
/// `ENDING_TABLES` tables. A template shorter than that is an error, not a
/// silent truncation.
const ENDING_START_FROM_END: usize = 24;
const ENDING_STOP_FROM_END: usize = 9;
const ENDING_TABLES: usize = 3;

/// A report being assembled from a template.
#[derive(Debug)]
pub struct Report {
    pub(crate) document: Document,
    template: PathBuf,
}

impl Report {
    /// Start building a report with the builder.
    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    /// Open a template and resolve the front-page placeholders.
    ///
    /// Shorthand for the builder with the system clock.
    pub fn new<P: AsRef<Path>>(
        template: P,
        title: &str,
        subtitle: &str,
        version: &str,
    ) -> Result<Self> {
        Self::builder()
            .title(title)
            .subtitle(subtitle)
            .version(version)
            .open(template)
    }

    /// Get the working document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Delete every paragraph whose text contains `text`.
    ///
    /// Each match is re-located from the live document, so no captured
    /// index can go stale between deletions.
    pub fn delete_paragraph(&mut self, text: &str) -> Result<()> {
        loop {
            let next = self
                .document
                .body()
                .iter()
                .find(|block| {
                    block
                        .as_paragraph()
                        .is_some_and(|p| p.text().contains(text))
                })
                .map(|block| block.id());
            match next {
                Some(id) => self.document.delete(id)?,
                None => return Ok(()),
            }
        }
    }

    /// Strip scaffolding, splice the ending section, and serialize.
    ///
    /// Consumes the report: the working document is released once the
    /// package is on disk.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        self.strip_unused_sections()?;
        self.document.add_page_break();
        self.splice_ending()?;
        package::save(&self.document, path)
    }

    /// Remove the sentinel paragraph of every unfilled section together
    /// with the heading right before it.
    fn strip_unused_sections(&mut self) -> Result<()> {
        let mut staged: Vec<usize> = Vec::new();
        for (index, paragraph) in self.document.paragraphs().enumerate() {
            if paragraph.text().contains(PLACEHOLDER_SENTINEL) {
                staged.push(index);
                if index > 0 {
                    staged.push(index - 1);
                }
            }
        }
        staged.sort_unstable();
        staged.dedup();
        log::debug!("stripping {} scaffolding paragraphs", staged.len());

        // descending, so no earlier deletion shifts a pending index
        for index in staged.into_iter().rev() {
            self.document.delete_paragraph_at(index)?;
        }
        Ok(())
    }

    /// Copy the closing acceptance content from a fresh template instance.
    fn splice_ending(&mut self) -> Result<()> {
        log::debug!("splicing ending section from {}", self.template.display());
        let ending = package::load(&self.template)?;

        let paragraphs: Vec<&Paragraph> = ending.paragraphs().collect();
        if paragraphs.len() < ENDING_START_FROM_END {
            return Err(Error::EndingTooShort {
                kind: "paragraphs",
                found: paragraphs.len(),
                needed: ENDING_START_FROM_END,
            });
        }
        let start = paragraphs.len() - ENDING_START_FROM_END;
        let stop = paragraphs.len() - ENDING_STOP_FROM_END;
        for paragraph in &paragraphs[start..stop] {
            if !paragraph.text().is_empty() {
                splice::clone_paragraph(paragraph, &mut self.document)?;
            }
        }

        self.document.add_page_break();
        self.add_heading("Document Acceptance", 1, false)?;

        let tables: Vec<&Table> = ending.tables().collect();
        if tables.len() < ENDING_TABLES {
            return Err(Error::EndingTooShort {
                kind: "tables",
                found: tables.len(),
                needed: ENDING_TABLES,
            });
        }
        for table in &tables[tables.len() - ENDING_TABLES..] {
            splice::clone_table(table, &mut self.document)?;
            self.document.add_paragraph(Paragraph::new())?;
        }
        Ok(())
    }
}

/// Builder for [`Report`] construction.
#[derive(Debug)]
pub struct ReportBuilder {
    title: String,
    subtitle: String,
    version: String,
    clock: Box<dyn Clock>,
}

impl ReportBuilder {
    fn new() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            version: "0.1".to_string(),
            clock: Box::new(SystemClock),
        }
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the document sub-title.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the document version (default `"0.1"`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Inject a clock for the `{date}` placeholder.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Load the template and build the report's working document.
    pub fn open<P: AsRef<Path>>(self, template: P) -> Result<Report> {
        let template = template.as_ref().to_path_buf();
        let mut document = package::load(&template)?;

        let date = self.clock.today().format("%d %B %Y").to_string();
        fill_front_page(&mut document, &self.title, &self.subtitle, &self.version, &date);
        document.add_page_break();

        Ok(Report { document, template })
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the four front-page placeholders, first match wins per
/// paragraph; paragraphs containing no token are left untouched.
fn fill_front_page(
    document: &mut Document,
    title: &str,
    subtitle: &str,
    version: &str,
    date: &str,
) {
    for paragraph in document.paragraphs_mut() {
        let text = paragraph.text();
        if text.contains(TITLE_TOKEN) {
            paragraph.set_text(title);
        } else if text.contains(SUBTITLE_TOKEN) {
            paragraph.set_text(subtitle);
        } else if text.contains(VERSION_TOKEN) {
            paragraph.set_text(format!("Version {version}"));
        } else if text.contains(DATE_TOKEN) {
            paragraph.set_text(date);
        }
    }
}
