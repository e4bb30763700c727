//! Editing, filtering and exporting through a workspace session.

use tabmap_map::{
    ColumnField, MappingEditor, MoveDirection, ProjectionOutcome, WorkspaceSession,
    distinct_values_for, filter_rows, format_mapping_text, parse_mapping_text,
};
use tabmap_model::{
    Direction, ExportOptions, FilterCondition, Language, LineEnding, RawRow, TextMatch,
};

fn raw(lines: &[&str]) -> Vec<RawRow> {
    lines
        .iter()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

#[test]
fn pasted_mapping_drives_projection_and_reverse_export() {
    let definition = parse_mapping_text("金額\tamount\t1\t3\r\nコード\tcode\t2\t1\r\n");
    assert_eq!(definition.source_id, "user-mapping");

    let rows = raw(&["A001\tignored\t1200", "A002\tignored\t800"]);
    let mut session = WorkspaceSession::new(definition);
    let outcome = session.apply(&rows, LineEnding::CrLf, || true);
    assert_eq!(outcome, ProjectionOutcome::Applied { rows: 2 });
    assert_eq!(session.grid().cell(0, 0), Some("1200"));

    session.edit_cell(1, 0, "900").expect("edit cell");

    let forward = session.export(ExportOptions {
        include_header: true,
        language: Language::Secondary,
        direction: Direction::Forward,
    });
    assert_eq!(forward, "amount\tcode\r\n1200\tA001\r\n900\tA002\r\n");

    let reverse = session.export(ExportOptions {
        include_header: false,
        language: Language::Primary,
        direction: Direction::Reverse,
    });
    assert_eq!(reverse, "A001\t\t1200\r\nA002\t\t900");
}

#[test]
fn editor_changes_flow_into_mapping_text() {
    let editor = MappingEditor::new(parse_mapping_text("a\ta\t1\t1\nb\tb\t2\t2"))
        .insert_column(1)
        .set_field(2, ColumnField::SourcePosition, "5桁")
        .move_column(2, MoveDirection::Up)
        .remove_column(0);

    assert_eq!(editor.active_row(), 1);
    assert_eq!(
        format_mapping_text(editor.definition()),
        "項目1\tcolumn1\t1\t5\nb\tb\t2\t2"
    );
}

#[test]
fn filters_and_distinct_values_work_on_raw_rows() {
    let definition = parse_mapping_text("名前\tname\t1\t2\nコード\tcode\t2\t1");
    let rows = raw(&["1\tapple", "2\t", "3\tbanana", "4\tapple pie"]);

    let values = distinct_values_for(&rows, &definition, 0).expect("column exists");
    assert_eq!(
        values.into_iter().collect::<Vec<_>>(),
        ["", "apple", "apple pie", "banana"]
    );

    let contains = [FilterCondition::text(0, "apple", TextMatch::Contains)];
    assert_eq!(filter_rows(&rows, &contains, &definition).len(), 2);

    let blank = [FilterCondition::text(0, "空白", TextMatch::Equals)];
    assert_eq!(filter_rows(&rows, &blank, &definition), raw(&["2\t"]));

    let not_blank = [FilterCondition::text(0, "空白", TextMatch::Equals).negated(true)];
    assert_eq!(filter_rows(&rows, &not_blank, &definition).len(), 3);

    let selected = [FilterCondition::values(0, ["banana", ""])];
    assert_eq!(
        filter_rows(&rows, &selected, &definition),
        raw(&["2\t", "3\tbanana"])
    );
}

#[test]
fn declined_confirmation_keeps_grid() {
    let definition = parse_mapping_text("a\ta\t1\t1");
    let mut session = WorkspaceSession::new(definition.clone());
    session.apply(&raw(&["keep"]), LineEnding::Lf, || true);

    let other = parse_mapping_text("b\tb\t1\t2");
    let outcome = session.apply_temporary_definition(&other, &raw(&["x\ty"]), LineEnding::Lf, || false);
    assert_eq!(outcome, ProjectionOutcome::Cancelled);
    assert!(!session.is_temporary());
    assert_eq!(session.grid().cell(0, 0), Some("keep"));

    let outcome = session.apply_temporary_definition(&other, &raw(&["x\ty"]), LineEnding::Lf, || true);
    assert_eq!(outcome, ProjectionOutcome::Applied { rows: 1 });
    assert!(session.is_temporary());
    assert_eq!(session.grid().cell(0, 0), Some("y"));

    session.restore_definition(definition, &raw(&["back"]), LineEnding::Lf, || true);
    assert!(!session.is_temporary());
    assert_eq!(session.grid().cell(0, 0), Some("back"));
}
