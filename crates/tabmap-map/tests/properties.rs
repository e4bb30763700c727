//! Property tests for projection, editing and filtering.

use proptest::prelude::*;

use tabmap_map::{MappingEditor, MoveDirection, filter_rows, project, project_row};
use tabmap_model::{Column, FilterCondition, MappingDefinition, RawRow, TextMatch};

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[abc]{1,2}"]
}

fn raw_rows() -> impl Strategy<Value = Vec<RawRow>> {
    prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..12)
}

fn definition() -> impl Strategy<Value = MappingDefinition> {
    prop::collection::vec(0u32..8, 1..6).prop_map(|positions| {
        let columns = positions
            .into_iter()
            .map(|position| Column::new(position, "", ""))
            .collect();
        MappingDefinition::new("p", "p", "p", columns)
    })
}

fn condition(column_count: usize) -> impl Strategy<Value = FilterCondition> {
    let column = 0..column_count;
    prop_oneof![
        (column.clone(), cell(), any::<bool>(), any::<bool>()).prop_map(
            |(index, value, contains, negated)| {
                let matching = if contains {
                    TextMatch::Contains
                } else {
                    TextMatch::Equals
                };
                FilterCondition::text(index, value, matching).negated(negated)
            }
        ),
        (column, prop::collection::btree_set(cell(), 0..3))
            .prop_map(|(index, selected)| FilterCondition::values(index, selected)),
    ]
}

fn case() -> impl Strategy<Value = (MappingDefinition, Vec<RawRow>, Vec<FilterCondition>, Vec<FilterCondition>)>
{
    definition().prop_flat_map(|def| {
        let count = def.column_count();
        (
            Just(def),
            raw_rows(),
            prop::collection::vec(condition(count), 0..3),
            prop::collection::vec(condition(count), 0..3),
        )
    })
}

#[derive(Debug, Clone, Copy)]
enum Edit {
    Insert(usize),
    Remove(usize),
    Up(usize),
    Down(usize),
}

fn edits() -> impl Strategy<Value = Vec<Edit>> {
    prop::collection::vec(
        prop_oneof![
            (0usize..8).prop_map(Edit::Insert),
            (0usize..8).prop_map(Edit::Remove),
            (0usize..8).prop_map(Edit::Up),
            (0usize..8).prop_map(Edit::Down),
        ],
        0..24,
    )
}

proptest! {
    #[test]
    fn projection_is_deterministic_and_shaped((def, rows, _, _) in case()) {
        let grid = project(&rows, &def);
        prop_assert_eq!(&grid, &project(&rows, &def));
        prop_assert_eq!(grid.len(), rows.len());
        for (raw, projected) in rows.iter().zip(grid.rows()) {
            prop_assert_eq!(projected.len(), def.column_count());
            prop_assert_eq!(projected, &project_row(raw, &def));
        }
    }

    #[test]
    fn filter_without_conditions_keeps_everything((def, rows, _, _) in case()) {
        prop_assert_eq!(filter_rows(&rows, &[], &def), rows);
    }

    #[test]
    fn filter_conditions_compose((def, rows, first, second) in case()) {
        let combined: Vec<FilterCondition> = first.iter().chain(&second).cloned().collect();
        let at_once = filter_rows(&rows, &combined, &def);
        let staged = filter_rows(&filter_rows(&rows, &first, &def), &second, &def);
        prop_assert_eq!(&at_once, &staged);
        let reversed = filter_rows(&filter_rows(&rows, &second, &def), &first, &def);
        prop_assert_eq!(at_once, reversed);
    }

    #[test]
    fn edits_keep_positions_contiguous_and_non_empty(def in definition(), edits in edits()) {
        let mut editor = MappingEditor::new(def);
        for edit in edits {
            editor = match edit {
                Edit::Insert(index) => editor.insert_column(index),
                Edit::Remove(index) => editor.remove_column(index),
                Edit::Up(index) => editor.move_column(index, MoveDirection::Up),
                Edit::Down(index) => editor.move_column(index, MoveDirection::Down),
            };
            let columns = &editor.definition().columns;
            prop_assert!(!columns.is_empty());
            prop_assert!(editor.active_row() < columns.len());
            for (index, column) in columns.iter().enumerate() {
                prop_assert_eq!(column.output_position as usize, index + 1);
            }
        }
    }
}
