//! # reportdoc
//!
//! Template-driven report document composition for Rust.
//!
//! A report starts from a template package: the front page carries
//! `{title}`, `{sub-title}`, `{version}`, and `{date}` placeholders, the
//! body carries scaffolding sections, and the tail carries the acceptance
//! text and sign-off tables. Construction substitutes the placeholders,
//! composer calls append typed content, and saving strips unfilled
//! scaffolding, splices the acceptance ending from a second untouched
//! template instance, and serializes the package.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reportdoc::Report;
//!
//! fn main() -> reportdoc::Result<()> {
//!     let mut report = Report::new(
//!         "template.rdoc",
//!         "Network Rollout",
//!         "Site acceptance report",
//!         "1.0",
//!     )?;
//!
//!     report.add_heading("Introduction", 1, true)?;
//!     report.add_paragraph("All racks were cabled and verified.", false, false)?;
//!     report.add_command("show interfaces status\nshow running-config")?;
//!     report.add_table(&[
//!         vec!["Device", "Result"],
//!         vec!["core-sw-01", "pass"],
//!     ])?;
//!
//!     report.save("rollout-report.rdoc")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Placeholder substitution**: front-page tokens resolved once at
//!   construction, first match wins per paragraph
//! - **Typed content**: paragraphs, headings, command blocks, notes,
//!   warnings, bullets, tables, page breaks with fixed style bindings
//! - **Template splicing**: acceptance text and sign-off tables copied
//!   across document instances by value
//! - **Fail-fast handles**: deleted elements are detached, never dangling
//! - **Starter template**: [`template::write_starter`] produces a working
//!   template package

pub mod error;
pub mod model;
pub mod package;
pub mod report;
pub mod splice;
pub mod template;

pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BlockId, BlockKind, Document, Paragraph, Run, Style, StyleKind, StyleSheet,
    Table, TableCell, TableRow,
};
pub use report::{Clock, FixedClock, Report, ReportBuilder, SystemClock, PLACEHOLDER_SENTINEL};
pub use splice::{clone_paragraph, clone_table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Report::builder();
        let repr = format!("{builder:?}");
        assert!(repr.contains("0.1"));
        assert!(repr.contains("SystemClock"));
    }

    #[test]
    fn test_open_missing_template() {
        let result = Report::new("/nonexistent/template.rdoc", "T", "S", "1.0");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
