//! Column mapping engine.
//!
//! Pure functions over mapping definitions and tokenized rows: editing a
//! definition, projecting raw rows into the output layout and back, building
//! header rows and filtering rows by per-column predicates. The stores and the
//! [`WorkspaceSession`] wrap those functions with the state a front end owns.

#![deny(unsafe_code)]

pub mod editor;
pub mod error;
pub mod filter;
pub mod project;
pub mod repository;
pub mod session;
pub mod text;

pub use editor::{ColumnField, MappingEditor, MoveDirection};
pub use error::{StoreError, TemplateError};
pub use filter::{
    condition_matches, distinct_values, distinct_values_for, filter_rows, retain_matching,
    row_matches,
};
pub use project::{
    header, header_line, join_fields, project, project_row, render_rows, reverse_grid,
    reverse_row,
};
pub use repository::{SessionSnapshot, SessionStore, TemplateStore};
pub use session::{ProjectionOutcome, WorkspaceSession};
pub use text::{
    USER_MAPPING_SOURCE_ID, USER_TABLE_LABEL, USER_TABLE_LABEL_SECONDARY, format_mapping_text,
    parse_mapping_text,
};
