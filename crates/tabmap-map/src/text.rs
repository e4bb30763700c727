//! Pasted mapping definitions.
//!
//! One column per line, tab-separated:
//! `labelPrimary \t labelSecondary \t outputPosition \t sourcePosition`.
//! The output position field is informational; positions are always
//! reassigned from line order.

use tabmap_model::{Column, MappingDefinition, SourcePosition};

pub const USER_MAPPING_SOURCE_ID: &str = "user-mapping";
pub const USER_TABLE_LABEL: &str = "ユーザテーブル";
pub const USER_TABLE_LABEL_SECONDARY: &str = "user-table";

/// Parses pasted mapping text into a definition.
///
/// Blank lines are skipped, missing fields become empty, and a source position
/// that does not start with digits becomes `0`. Labels are kept as typed.
/// Text without any column yields a single blank column.
pub fn parse_mapping_text(text: &str) -> MappingDefinition {
    let mut columns: Vec<Column> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();
    if columns.is_empty() {
        columns.push(Column::blank());
    }
    MappingDefinition::new(
        USER_MAPPING_SOURCE_ID,
        USER_TABLE_LABEL,
        USER_TABLE_LABEL_SECONDARY,
        columns,
    )
}

fn parse_line(line: &str) -> Column {
    let fields: Vec<&str> = line.split('\t').collect();
    let field = |index: usize| fields.get(index).copied().unwrap_or_default();
    Column::new(
        SourcePosition::parse_lenient(field(3)).get(),
        field(0),
        field(1),
    )
}

/// Formats a definition as mapping text, with placeholders for blank labels.
pub fn format_mapping_text(definition: &MappingDefinition) -> String {
    definition
        .commit()
        .columns
        .iter()
        .map(|column| {
            format!(
                "{}\t{}\t{}\t{}",
                column.label_primary,
                column.label_secondary,
                column.output_position,
                column.source_position
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
