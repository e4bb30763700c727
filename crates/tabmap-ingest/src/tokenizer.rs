//! Line and field splitting for tab-delimited text.

use tabmap_model::{LineEnding, RawRow};

/// Rows of a text together with the line ending it uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub rows: Vec<RawRow>,
    pub line_ending: LineEnding,
}

impl Tokenized {
    pub fn new(text: &str) -> Self {
        Self {
            rows: tokenize(text),
            line_ending: LineEnding::detect(text),
        }
    }
}

/// Splits on `\n` or `\r\n`. A final empty line is dropped.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Splits one line on tabs. Fields are not trimmed.
pub fn split_fields(line: &str) -> RawRow {
    line.split('\t').map(str::to_string).collect()
}

pub fn tokenize(text: &str) -> Vec<RawRow> {
    split_lines(text).into_iter().map(split_fields).collect()
}
