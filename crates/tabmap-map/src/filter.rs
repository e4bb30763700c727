//! Row filter engine.
//!
//! Conditions are evaluated against the raw field at the column's source
//! position, not against projected output. A row is kept only when it
//! satisfies every condition.

use std::collections::BTreeSet;

use tracing::debug;

use tabmap_model::{
    Column, EMPTY_SENTINEL, FilterCondition, FilterMode, MappingDefinition, RawRow, TextMatch,
};

/// Evaluates one condition against one raw row.
///
/// A condition whose column is unmapped, missing from the definition, or
/// beyond the end of the row fails regardless of mode. Blank text imposes no
/// constraint. An empty value selection matches nothing.
pub fn condition_matches(
    condition: &FilterCondition,
    row: &[String],
    definition: &MappingDefinition,
) -> bool {
    let Some(cell) = definition
        .column(condition.column_index)
        .and_then(|column| column.source_position.cell(row))
    else {
        return false;
    };
    match &condition.mode {
        FilterMode::Text {
            value,
            matching,
            negated,
        } => {
            let wanted = value.trim();
            if wanted.is_empty() {
                return true;
            }
            let hit = if wanted == EMPTY_SENTINEL {
                cell.is_empty()
            } else {
                match matching {
                    TextMatch::Equals => cell == wanted,
                    TextMatch::Contains => cell.contains(wanted),
                }
            };
            hit != *negated
        }
        FilterMode::Values { selected } => selected.contains(cell),
    }
}

pub fn row_matches(
    row: &[String],
    conditions: &[FilterCondition],
    definition: &MappingDefinition,
) -> bool {
    conditions
        .iter()
        .all(|condition| condition_matches(condition, row, definition))
}

/// Rows satisfying every condition, in input order. No conditions keeps all rows.
pub fn filter_rows(
    rows: &[RawRow],
    conditions: &[FilterCondition],
    definition: &MappingDefinition,
) -> Vec<RawRow> {
    rows.iter()
        .filter(|row| row_matches(row, conditions, definition))
        .cloned()
        .collect()
}

/// Owned variant of [`filter_rows`] that reuses the row allocations.
pub fn retain_matching(
    mut rows: Vec<RawRow>,
    conditions: &[FilterCondition],
    definition: &MappingDefinition,
) -> Vec<RawRow> {
    if conditions.is_empty() {
        return rows;
    }
    let before = rows.len();
    rows.retain(|row| row_matches(row, conditions, definition));
    debug!(
        before,
        after = rows.len(),
        conditions = conditions.len(),
        "rows filtered"
    );
    rows
}

/// Candidate values for a value-set condition on `column`.
///
/// Every raw value observed at the column's source position, plus the empty
/// string.
pub fn distinct_values(rows: &[RawRow], column: &Column) -> BTreeSet<String> {
    let mut values = BTreeSet::new();
    values.insert(String::new());
    for row in rows {
        if let Some(cell) = column.source_position.cell(row)
            && !values.contains(cell)
        {
            values.insert(cell.to_string());
        }
    }
    values
}

/// [`distinct_values`] by column index; `None` if the index is out of range.
pub fn distinct_values_for(
    rows: &[RawRow],
    definition: &MappingDefinition,
    column_index: usize,
) -> Option<BTreeSet<String>> {
    definition
        .column(column_index)
        .map(|column| distinct_values(rows, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> RawRow {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn definition() -> MappingDefinition {
        MappingDefinition::new(
            "t",
            "t",
            "t",
            vec![
                Column::new(1, "code", "code"),
                Column::new(2, "name", "name"),
                Column::new(5, "far", "far"),
                Column::new(0, "none", "none"),
            ],
        )
    }

    #[test]
    fn equals_and_contains() {
        let definition = definition();
        let raw = row(&["A01", "apple"]);
        assert!(condition_matches(
            &FilterCondition::text(0, "A01", TextMatch::Equals),
            &raw,
            &definition
        ));
        assert!(!condition_matches(
            &FilterCondition::text(0, "A0", TextMatch::Equals),
            &raw,
            &definition
        ));
        assert!(condition_matches(
            &FilterCondition::text(1, "ppl", TextMatch::Contains),
            &raw,
            &definition
        ));
        assert!(!condition_matches(
            &FilterCondition::text(1, "ppl", TextMatch::Contains).negated(true),
            &raw,
            &definition
        ));
    }

    #[test]
    fn sentinel_matches_empty_cells() {
        let definition = definition();
        let condition = FilterCondition::text(1, EMPTY_SENTINEL, TextMatch::Equals);
        assert!(condition_matches(&condition, &row(&["A", ""]), &definition));
        assert!(!condition_matches(&condition, &row(&["A", "x"]), &definition));
        let inverted = condition.negated(true);
        assert!(condition_matches(&inverted, &row(&["A", "x"]), &definition));
    }

    #[test]
    fn out_of_range_and_unmapped_columns_exclude_rows() {
        let definition = definition();
        let raw = row(&["x", "y"]);
        assert!(!condition_matches(&FilterCondition::new(2), &raw, &definition));
        assert!(!condition_matches(&FilterCondition::new(3), &raw, &definition));
        assert!(!condition_matches(
            &FilterCondition::text(2, "", TextMatch::Equals).negated(true),
            &raw,
            &definition
        ));
    }

    #[test]
    fn blank_text_imposes_no_constraint() {
        let definition = definition();
        let condition = FilterCondition::text(0, "   ", TextMatch::Equals);
        assert!(condition_matches(&condition, &row(&["anything"]), &definition));
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let definition = definition();
        let condition = FilterCondition::values(0, Vec::<String>::new());
        assert!(!condition_matches(&condition, &row(&[""]), &definition));
        assert!(!condition_matches(&condition, &row(&["a"]), &definition));
    }

    #[test]
    fn distinct_values_always_include_empty() {
        let rows = vec![row(&["a", "x"]), row(&["b"]), row(&["a", "y"])];
        let values = distinct_values(&rows, &definition().columns[1]);
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        assert_eq!(values, vec!["", "x", "y"]);
        assert!(distinct_values_for(&rows, &definition(), 9).is_none());
    }
}
