//! File import pipeline: tokenize, guard, skip header, filter.

use serde::Serialize;
use tracing::debug;

use tabmap_map::{render_rows, retain_matching};
use tabmap_model::{FilterCondition, ImportOptions, LineEnding, MappingDefinition, RawRow};

use crate::error::ImportError;
use crate::guard::{Admission, TextSize, admit};
use crate::tokenizer::Tokenized;

/// Size of the text before and after header skipping and filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// Characters in the whole text, line endings included.
    pub total_chars: usize,
    /// Tokenized lines in the whole text.
    pub total_lines: usize,
    /// Characters of the surviving lines joined with the detected line ending.
    pub filtered_chars: usize,
    pub filtered_lines: usize,
}

/// Rows that survived the import pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub rows: Vec<RawRow>,
    pub line_ending: LineEnding,
    pub stats: ImportStats,
    /// Lines dropped by the truncate policy.
    pub truncated: usize,
}

impl ImportResult {
    /// Surviving rows re-joined with the detected line ending.
    pub fn text(&self) -> String {
        render_rows(&self.rows, self.line_ending)
    }
}

/// Imports raw text for projection.
///
/// The guard runs on the whole text first; a character overflow or a row
/// overflow under [`OverflowPolicy::Reject`](tabmap_model::OverflowPolicy::Reject)
/// fails with [`ImportError::Rejected`]. A skipped header line still counts in
/// the totals.
pub fn import_text(
    text: &str,
    definition: &MappingDefinition,
    conditions: &[FilterCondition],
    options: &ImportOptions,
) -> Result<ImportResult, ImportError> {
    let size = TextSize::measure(text);
    let admission = admit(size, options.limits, options.overflow)?;

    let Tokenized {
        mut rows,
        line_ending,
    } = Tokenized::new(text);
    if let Admission::Truncated { kept, .. } = admission {
        rows.truncate(kept);
    }
    if options.skip_header && !rows.is_empty() {
        rows.remove(0);
    }
    let rows = retain_matching(rows, conditions, definition);

    let stats = ImportStats {
        total_chars: size.chars,
        total_lines: size.lines,
        filtered_chars: joined_chars(&rows, line_ending),
        filtered_lines: rows.len(),
    };
    debug!(
        total_lines = stats.total_lines,
        filtered_lines = stats.filtered_lines,
        truncated = admission.discarded(),
        skip_header = options.skip_header,
        "text imported"
    );
    Ok(ImportResult {
        rows,
        line_ending,
        stats,
        truncated: admission.discarded(),
    })
}

fn joined_chars(rows: &[RawRow], line_ending: LineEnding) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let separators = (rows.len() - 1) * line_ending.as_str().len();
    let fields: usize = rows
        .iter()
        .map(|row| {
            let tabs = row.len().saturating_sub(1);
            tabs + row.iter().map(|field| field.chars().count()).sum::<usize>()
        })
        .sum();
    fields + separators
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabmap_model::{Column, GuardLimits, OverflowPolicy, TextMatch};

    fn definition() -> MappingDefinition {
        MappingDefinition::new(
            "t",
            "t",
            "t",
            vec![Column::new(1, "コード", "code"), Column::new(2, "名前", "name")],
        )
    }

    #[test]
    fn test_skip_header_counts_in_totals() {
        let text = "code\tname\r\nA1\tりんご\r\nA2\tみかん\r\n";
        let result = import_text(text, &definition(), &[], &ImportOptions::file_import()).unwrap();
        assert_eq!(result.line_ending, LineEnding::CrLf);
        assert_eq!(result.stats.total_lines, 3);
        assert_eq!(result.stats.total_chars, text.chars().count());
        assert_eq!(result.stats.filtered_lines, 2);
        assert_eq!(result.text(), "A1\tりんご\r\nA2\tみかん");
        assert_eq!(result.stats.filtered_chars, result.text().chars().count());
    }

    #[test]
    fn test_filters_apply_after_header_skip() {
        let text = "code\tname\nA1\tりんご\nA2\tみかん";
        let conditions = [FilterCondition::text(1, "みかん", TextMatch::Equals)];
        let result =
            import_text(text, &definition(), &conditions, &ImportOptions::file_import()).unwrap();
        assert_eq!(result.rows, [["A2", "みかん"]]);
        assert_eq!(result.stats.filtered_chars, 6);
    }

    #[test]
    fn test_nothing_survives() {
        let conditions = [FilterCondition::text(0, "zzz", TextMatch::Equals)];
        let result =
            import_text("a\nb", &definition(), &conditions, &ImportOptions::paste()).unwrap();
        assert!(result.rows.is_empty());
        assert_eq!(result.stats.filtered_chars, 0);
        assert_eq!(result.text(), "");
    }

    #[test]
    fn test_truncate_keeps_first_lines() {
        let options = ImportOptions {
            limits: GuardLimits {
                max_rows: 2,
                max_chars: 100,
            },
            overflow: OverflowPolicy::Truncate,
            skip_header: false,
        };
        let result = import_text("1\n2\n3\n4", &definition(), &[], &options).unwrap();
        assert_eq!(result.rows, [["1"], ["2"]]);
        assert_eq!(result.truncated, 2);
        assert_eq!(result.stats.total_lines, 4);

        let rejected = import_text(
            "1\n2\n3\n4",
            &definition(),
            &[],
            &options.with_overflow(OverflowPolicy::Reject),
        );
        assert!(matches!(rejected, Err(ImportError::Rejected(_))));
    }
}
