use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One tokenized raw record.
pub type RawRow = Vec<String>;

/// The user-editable output table produced by forward projection.
///
/// Every row has exactly `width` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputGrid {
    width: usize,
    rows: Vec<Vec<String>>,
}

impl OutputGrid {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding with empty cells or truncating to the grid width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.width, String::new());
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<()> {
        let (rows, columns) = (self.rows.len(), self.width);
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(ModelError::CellOutOfRange {
                row,
                column,
                rows,
                columns,
            })?;
        *cell = value.into();
        Ok(())
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_resized_to_width() {
        let mut grid = OutputGrid::new(2);
        grid.push_row(vec!["a".to_string()]);
        grid.push_row(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(grid.row(0), Some(&["a".to_string(), String::new()][..]));
        assert_eq!(grid.row(1).map(<[String]>::len), Some(2));
    }

    #[test]
    fn set_cell_checks_bounds() {
        let mut grid = OutputGrid::new(1);
        grid.push_row(vec!["a".to_string()]);
        grid.set_cell(0, 0, "b").unwrap();
        assert_eq!(grid.cell(0, 0), Some("b"));
        assert_eq!(
            grid.set_cell(1, 0, "c"),
            Err(ModelError::CellOutOfRange {
                row: 1,
                column: 0,
                rows: 1,
                columns: 1,
            })
        );
    }
}
