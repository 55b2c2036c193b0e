//! Named styles and the template style sheet.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What kind of element a style applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Paragraph style
    #[default]
    Paragraph,
    /// Table style
    Table,
}

/// A named formatting template.
///
/// Styles are resolved by name at render time; the model only records the
/// handful of properties the starter template needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Style {
    /// Element kind this style applies to
    pub kind: StyleKind,

    /// Font size in points, if overridden
    pub font_size: Option<f32>,

    /// Bold text
    pub bold: bool,
}

impl Style {
    /// Create a paragraph style.
    pub fn paragraph() -> Self {
        Self::default()
    }

    /// Create a table style.
    pub fn table() -> Self {
        Self {
            kind: StyleKind::Table,
            ..Self::default()
        }
    }

    /// Set the font size and return self.
    pub fn sized(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Mark the style bold and return self.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// The template's style sheet: a map from style name to definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: BTreeMap<String, Style>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a named style.
    pub fn define(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Resolve a style by name.
    pub fn resolve(&self, name: &str) -> Result<&Style> {
        self.styles
            .get(name)
            .ok_or_else(|| Error::StyleNotFound(name.to_string()))
    }

    /// Check whether a style name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Iterate over defined style names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(|k| k.as_str())
    }

    /// Number of defined styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the style sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
