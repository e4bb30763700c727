//! Forward, reverse and header projection.

use tracing::debug;

use tabmap_model::{
    Direction, Language, LineEnding, MappingDefinition, OutputGrid, RawRow,
};

/// Maps one raw row into the output layout.
///
/// The result always has one cell per column. Unmapped columns and source
/// positions beyond the end of the raw row yield empty cells; raw fields that
/// no column reads are ignored.
pub fn project_row(raw: &[String], definition: &MappingDefinition) -> Vec<String> {
    definition
        .columns
        .iter()
        .map(|column| {
            column
                .source_position
                .cell(raw)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// Builds a fresh output grid from raw rows.
pub fn project(rows: &[RawRow], definition: &MappingDefinition) -> OutputGrid {
    let mut grid = OutputGrid::new(definition.column_count());
    for raw in rows {
        grid.push_row(project_row(raw, definition));
    }
    debug!(
        rows = grid.len(),
        columns = grid.width(),
        "forward projection complete"
    );
    grid
}

/// Rebuilds a raw-shaped row from an output row.
///
/// The result has `max_source_position` fields. Columns are written in output
/// order, so when two columns share a source position the later one wins.
/// Unmapped columns contribute nothing.
pub fn reverse_row(output: &[String], definition: &MappingDefinition) -> RawRow {
    let width = definition.max_source_position() as usize;
    let mut raw = vec![String::new(); width];
    for (column, value) in definition.columns.iter().zip(output) {
        if let Some(index) = column.source_position.index() {
            raw[index].clone_from(value);
        }
    }
    raw
}

pub fn reverse_grid(grid: &OutputGrid, definition: &MappingDefinition) -> Vec<RawRow> {
    grid.rows()
        .iter()
        .map(|row| reverse_row(row, definition))
        .collect()
}

/// Header fields for a definition.
///
/// Reverse headers go through [`reverse_row`] with the labels standing in for
/// cell values, so they follow the same placement and collision rules as data.
pub fn header(
    definition: &MappingDefinition,
    language: Language,
    direction: Direction,
) -> Vec<String> {
    let labels: Vec<String> = definition
        .labels(language)
        .into_iter()
        .map(str::to_string)
        .collect();
    match direction {
        Direction::Forward => labels,
        Direction::Reverse => reverse_row(&labels, definition),
    }
}

pub fn header_line(
    definition: &MappingDefinition,
    language: Language,
    direction: Direction,
) -> String {
    join_fields(&header(definition, language, direction))
}

pub fn join_fields(fields: &[String]) -> String {
    fields.join("\t")
}

/// Joins rows into tab-separated text without a trailing line ending.
pub fn render_rows(rows: &[Vec<String>], line_ending: LineEnding) -> String {
    rows.iter()
        .map(|row| join_fields(row))
        .collect::<Vec<_>>()
        .join(line_ending.as_str())
}
