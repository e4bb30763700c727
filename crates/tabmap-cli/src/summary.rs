use std::collections::BTreeSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabmap_ingest::ImportResult;
use tabmap_model::{Language, MappingDefinition};

pub fn print_definition(definition: &MappingDefinition) {
    println!(
        "Mapping: {} ({} / {})",
        definition.source_id,
        definition.table_label(Language::Primary),
        definition.table_label(Language::Secondary)
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pos"),
        header_cell("Source"),
        header_cell("Label"),
        header_cell("Label (secondary)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for column in &definition.columns {
        let source = if column.source_position.is_mapped() {
            Cell::new(column.source_position)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(column.output_position),
            source,
            label_cell(&column.label_primary, &column.display_label(Language::Primary)),
            label_cell(
                &column.label_secondary,
                &column.display_label(Language::Secondary),
            ),
        ]);
    }
    println!("{table}");
}

pub fn print_values(definition: &MappingDefinition, position: usize, values: &BTreeSet<String>) {
    if let Some(column) = position
        .checked_sub(1)
        .and_then(|index| definition.column(index))
    {
        println!(
            "Column {position}: {} (source field {})",
            column.display_label(Language::Primary),
            column.source_position
        );
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Value")]);
    apply_table_style(&mut table);
    for value in values {
        let cell = if value.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(value)
        };
        table.add_row(vec![cell]);
    }
    println!("{table}");
}

pub fn print_stats(result: &ImportResult) {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Lines"),
        header_cell("Characters"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(stats.total_lines),
        Cell::new(stats.total_chars),
    ]);
    table.add_row(vec![
        Cell::new("Imported").add_attribute(Attribute::Bold),
        Cell::new(stats.filtered_lines).add_attribute(Attribute::Bold),
        Cell::new(stats.filtered_chars).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if result.truncated > 0 {
        eprintln!("warning: {} lines over the row limit were ignored", result.truncated);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Typed labels as-is; placeholders for blank labels are dimmed.
fn label_cell(typed: &str, display: &str) -> Cell {
    if typed.trim().is_empty() {
        dim_cell(display)
    } else {
        Cell::new(display)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
