use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("column index {index} is out of range (definition has {count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },
    #[error("column {position} has no source position and cannot be filtered")]
    UnmappedColumn { position: u32 },
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
