//! 1-based source positions.
//!
//! Raw records are addressed by 1-based "file positions" with `0` meaning
//! unmapped. [`SourcePosition`] is the only place that converts between that
//! convention and 0-based slice indices.
//!
//! Positions above [`SourcePosition::MAX`] are read as unmapped: no text the
//! import guard admits has that many fields on one line.

use serde::{Deserialize, Serialize};

use crate::options::GuardLimits;

/// 1-based position of a field within a raw tab-delimited record; `0` is unmapped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u32", into = "u32")]
pub struct SourcePosition(u32);

impl SourcePosition {
    pub const UNMAPPED: Self = Self(0);

    /// Largest addressable position: one field per admitted character plus one.
    pub const MAX: u32 = GuardLimits::file_import().max_chars as u32 + 1;

    /// Builds a position, reading anything above [`Self::MAX`] as unmapped.
    pub const fn new(position: u32) -> Self {
        if position > Self::MAX {
            Self::UNMAPPED
        } else {
            Self(position)
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_mapped(self) -> bool {
        self.0 > 0
    }

    /// Zero-based slice index, or `None` when unmapped.
    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(1).map(|index| index as usize)
    }

    /// Builds a position from a zero-based slice index.
    pub fn from_index(index: usize) -> Self {
        u32::try_from(index).map_or(Self::UNMAPPED, |index| Self::new(index.saturating_add(1)))
    }

    /// Returns the raw field this position addresses, if mapped and present.
    pub fn cell(self, row: &[String]) -> Option<&str> {
        self.index()
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }

    /// Parses editor input: every non-digit character is dropped and an empty
    /// result becomes `0`.
    pub fn sanitize(raw: &str) -> Self {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        Self::new(digits.parse().unwrap_or(0))
    }

    /// Parses pasted text: the leading run of digits after trimming, else `0`.
    pub fn parse_lenient(raw: &str) -> Self {
        let digits: String = raw
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        Self::new(digits.parse().unwrap_or(0))
    }
}

impl From<u32> for SourcePosition {
    fn from(position: u32) -> Self {
        Self::new(position)
    }
}

impl From<SourcePosition> for u32 {
    fn from(position: SourcePosition) -> Self {
        position.0
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
