//! Forward, reverse and header projection scenarios.

use tabmap_map::{
    header, header_line, join_fields, parse_mapping_text, project, project_row, reverse_row,
};
use tabmap_model::{Column, Direction, Language, MappingDefinition, RawRow, SourcePosition};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn definition(columns: Vec<Column>) -> MappingDefinition {
    MappingDefinition::new("orders", "受注", "orders", columns)
}

#[test]
fn forward_mapping_scenario() {
    let def = definition(vec![Column::new(2, "", ""), Column::new(1, "", "")]);
    assert_eq!(project_row(&strings(&["x", "y"]), &def), strings(&["y", "x"]));
}

#[test]
fn reverse_mapping_scenario() {
    let def = definition(vec![Column::new(2, "", ""), Column::new(1, "", "")]);
    let raw = reverse_row(&strings(&["Y2", "X2"]), &def);
    assert_eq!(def.max_source_position(), 2);
    assert_eq!(raw, strings(&["X2", "Y2"]));
    assert_eq!(join_fields(&raw), "X2\tY2");
}

#[test]
fn collision_later_column_wins() {
    let def = definition(vec![Column::new(1, "", ""), Column::new(1, "", "")]);
    assert_eq!(reverse_row(&strings(&["A", "B"]), &def), strings(&["B"]));
}

#[test]
fn unmapped_column_is_empty_and_does_not_widen_reverse() {
    let def = definition(vec![Column::new(0, "", ""), Column::new(2, "", "")]);
    assert_eq!(project_row(&strings(&["a", "b", "c"]), &def), strings(&["", "b"]));
    assert_eq!(reverse_row(&strings(&["ignored", "B"]), &def), strings(&["", "B"]));
}

#[test]
fn no_mapped_columns_reverse_to_empty_row() {
    let def = definition(vec![Column::new(0, "", ""), Column::new(0, "", "")]);
    assert!(reverse_row(&strings(&["a", "b"]), &def).is_empty());
    assert!(header(&def, Language::Primary, Direction::Reverse).is_empty());
}

#[test]
fn out_of_range_source_is_empty() {
    let def = definition(vec![Column::new(5, "", ""), Column::new(1, "", "")]);
    assert_eq!(project_row(&strings(&["p", "q"]), &def), strings(&["", "p"]));
}

#[test]
fn extra_raw_fields_are_ignored_and_short_rows_padded() {
    let def = definition(vec![
        Column::new(1, "", ""),
        Column::new(2, "", ""),
        Column::new(3, "", ""),
    ]);
    let rows: Vec<RawRow> = vec![strings(&["a"]), strings(&["a", "b", "c", "d", "e"])];
    let grid = project(&rows, &def);
    assert_eq!(grid.len(), 2);
    assert_eq!(grid.row(0), Some(&strings(&["a", "", ""])[..]));
    assert_eq!(grid.row(1), Some(&strings(&["a", "b", "c"])[..]));
}

#[test]
fn headers_in_both_directions_and_languages() {
    let def = definition(vec![
        Column::new(3, "金額", "amount"),
        Column::new(0, "メモ", "memo"),
        Column::new(1, "コード", "code"),
    ]);
    assert_eq!(
        header_line(&def, Language::Primary, Direction::Forward),
        "金額\tメモ\tコード"
    );
    assert_eq!(
        header_line(&def, Language::Secondary, Direction::Forward),
        "amount\tmemo\tcode"
    );
    assert_eq!(
        header(&def, Language::Secondary, Direction::Reverse),
        strings(&["code", "", "amount"])
    );
}

#[test]
fn reverse_header_collision_matches_data_policy() {
    let def = definition(vec![Column::new(1, "前", "first"), Column::new(1, "後", "second")]);
    assert_eq!(
        header(&def, Language::Secondary, Direction::Reverse),
        strings(&["second"])
    );
}

#[test]
fn projection_does_not_mutate_inputs() {
    let def = definition(vec![Column::new(2, "", ""), Column::new(1, "", "")]);
    let rows: Vec<RawRow> = vec![strings(&["x", "y"])];
    let before = (rows.clone(), def.clone());
    let first = project(&rows, &def);
    let second = project(&rows, &def);
    assert_eq!(first, second);
    assert_eq!((rows, def), before);
}

#[test]
fn oversized_source_positions_are_unmapped() {
    let def = parse_mapping_text("a\tb\t1\t4000000000\nc\td\t2\t2\n");
    assert_eq!(def.columns[0].source_position, SourcePosition::UNMAPPED);
    assert_eq!(def.max_source_position(), 2);
    assert_eq!(reverse_row(&strings(&["v", "w"]), &def), strings(&["", "w"]));

    let json = r#"{"columns": [{"filePos": 4000000000, "hdName": "x"}]}"#;
    let def: MappingDefinition = serde_json::from_str(json).unwrap();
    assert_eq!(def.max_source_position(), 0);
    assert!(reverse_row(&strings(&["v"]), &def).is_empty());
}
