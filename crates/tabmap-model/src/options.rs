//! Configuration options for import and export.

use serde::{Deserialize, Serialize};

use crate::column::Language;

/// What to do when a text has more lines than the row limit allows.
///
/// Character overflow is always rejected regardless of this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Refuse the whole text.
    #[default]
    Reject,
    /// Keep the first `max_rows` lines and warn about the rest.
    Truncate,
}

/// Maximum size of a text entering the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardLimits {
    /// Maximum number of tokenized lines.
    pub max_rows: usize,
    /// Maximum number of characters in the raw text.
    pub max_chars: usize,
}

impl GuardLimits {
    /// Limits for text pasted straight into the mapping screen.
    pub const fn paste() -> Self {
        Self {
            max_rows: 1_000,
            max_chars: 1_000_000,
        }
    }

    /// Limits for files loaded through the import dialog.
    pub const fn file_import() -> Self {
        Self {
            max_rows: 5_000,
            max_chars: 5_000_000,
        }
    }
}

impl Default for GuardLimits {
    fn default() -> Self {
        Self::file_import()
    }
}

/// Options controlling how raw text is admitted and filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub limits: GuardLimits,
    pub overflow: OverflowPolicy,
    /// Drop the first line (a header row) before filtering.
    pub skip_header: bool,
}

impl ImportOptions {
    /// Pasted text: small limits, header kept.
    pub fn paste() -> Self {
        Self {
            limits: GuardLimits::paste(),
            overflow: OverflowPolicy::Reject,
            skip_header: false,
        }
    }

    /// File import dialog: large limits, first line treated as a header.
    pub fn file_import() -> Self {
        Self {
            limits: GuardLimits::file_import(),
            overflow: OverflowPolicy::Reject,
            skip_header: true,
        }
    }

    #[must_use]
    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

/// Projection direction for exported rows and headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Output layout, one field per column.
    Forward,
    /// Raw file layout, reconstructed from source positions.
    #[default]
    Reverse,
}

/// Options controlling the text produced from an output grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub include_header: bool,
    pub language: Language,
    pub direction: Direction,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            language: Language::Primary,
            direction: Direction::Reverse,
        }
    }
}
