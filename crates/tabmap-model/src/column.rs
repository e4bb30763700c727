//! Output column definitions.

use serde::{Deserialize, Serialize};

use crate::position::SourcePosition;

/// Which of the two bilingual labels to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Primary (Japanese) labels.
    #[default]
    Primary,
    /// Secondary (English) labels.
    Secondary,
}

/// One output field: its place in the output table, the raw field it reads
/// from, and its display labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// 1-based position in the output table. Maintained by the definition.
    #[serde(default, alias = "colPos")]
    pub output_position: u32,
    #[serde(default, alias = "filePos")]
    pub source_position: SourcePosition,
    #[serde(default, alias = "hdNameJ")]
    pub label_primary: String,
    #[serde(default, alias = "hdName")]
    pub label_secondary: String,
}

impl Column {
    pub fn new(
        source_position: u32,
        label_primary: impl Into<String>,
        label_secondary: impl Into<String>,
    ) -> Self {
        Self {
            output_position: 0,
            source_position: SourcePosition::new(source_position),
            label_primary: label_primary.into(),
            label_secondary: label_secondary.into(),
        }
    }

    /// An unmapped column with empty labels.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::Primary => &self.label_primary,
            Language::Secondary => &self.label_secondary,
        }
    }

    /// The label, or the positional placeholder when the label is blank.
    pub fn display_label(&self, language: Language) -> String {
        let label = self.label(language);
        if label.trim().is_empty() {
            placeholder(language, self.output_position)
        } else {
            label.to_string()
        }
    }

    /// Copy with blank labels replaced by their placeholders.
    #[must_use]
    pub fn committed(&self) -> Self {
        Self {
            output_position: self.output_position,
            source_position: self.source_position,
            label_primary: self.display_label(Language::Primary),
            label_secondary: self.display_label(Language::Secondary),
        }
    }
}

/// Positional placeholder used for blank labels at commit time.
pub fn placeholder(language: Language, output_position: u32) -> String {
    match language {
        Language::Primary => format!("項目{output_position}"),
        Language::Secondary => format!("column{output_position}"),
    }
}
