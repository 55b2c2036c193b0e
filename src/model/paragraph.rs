//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<Run>,

    /// Named style reference, resolved against the template's style sheet
    pub style: Option<String>,

    /// Text alignment
    pub alignment: Alignment,

    /// Left indent in points, if overridden
    pub left_indent: Option<f32>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: None,
            alignment: Alignment::default(),
            left_indent: None,
        }
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(Run::new(text));
        p
    }

    /// Set the style name and return self.
    pub fn styled(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the alignment and return self.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the left indent in points and return self.
    pub fn indented(mut self, points: f32) -> Self {
        self.left_indent = Some(points);
        self
    }

    /// Append a run to the paragraph.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get the combined text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Replace the paragraph's content with a single plain run.
    ///
    /// Run-level formatting of the previous content is discarded. This is
    /// what placeholder substitution uses: the whole paragraph becomes the
    /// resolved value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.runs.clear();
        self.runs.push(Run::new(text));
    }

    /// Get the style name, if any.
    pub fn style_name(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.is_empty())
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// An inline text span with uniform formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Underlined text
    pub underline: bool,
}

impl Run {
    /// Create a new run with no formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            underline: false,
        }
    }

    /// Create a run with explicit bold/underline flags.
    pub fn formatted(text: impl Into<String>, bold: bool, underline: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            underline,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text() {
        let mut p = Paragraph::new();
        p.add_run(Run::new("Hello "));
        p.add_run(Run::formatted("world", true, false));
        p.add_run(Run::new("!"));

        assert_eq!(p.text(), "Hello world!");
        assert!(!p.is_empty());
    }

    #[test]
    fn test_set_text_discards_runs() {
        let mut p = Paragraph::new();
        p.add_run(Run::formatted("old", true, true));
        p.add_run(Run::new(" content"));

        p.set_text("replaced");

        assert_eq!(p.runs.len(), 1);
        assert_eq!(p.text(), "replaced");
        assert!(!p.runs[0].bold);
        assert!(!p.runs[0].underline);
    }

    #[test]
    fn test_builders() {
        let p = Paragraph::with_text("note body")
            .aligned(Alignment::Justify)
            .indented(48.0);

        assert_eq!(p.alignment, Alignment::Justify);
        assert_eq!(p.left_indent, Some(48.0));
        assert_eq!(p.style_name(), None);

        let styled = Paragraph::with_text("x").styled("Configuration");
        assert_eq!(styled.style_name(), Some("Configuration"));
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(Paragraph::new().is_empty());
        assert!(Paragraph::with_text("").is_empty());
        assert_eq!(Paragraph::new().text(), "");
    }
}
