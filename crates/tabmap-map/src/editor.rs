//! Mapping definition editor.
//!
//! Every operation returns a new [`MappingEditor`] and leaves `self` untouched.
//! Output positions are renumbered after each structural change, so
//! `columns[i].output_position == i + 1` always holds.

use tracing::debug;

use tabmap_model::{Column, MappingDefinition, SourcePosition};

/// Direction for [`MappingEditor::move_column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Editable field of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnField {
    LabelPrimary,
    LabelSecondary,
    SourcePosition,
}

/// Editor buffer: the definition being edited and the active row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEditor {
    definition: MappingDefinition,
    active_row: usize,
}

impl MappingEditor {
    /// Starts editing a definition. An empty definition gets one blank column.
    pub fn new(definition: MappingDefinition) -> Self {
        let mut definition = definition;
        if definition.columns.is_empty() {
            definition.columns.push(Column::blank());
        }
        definition.renumber();
        Self {
            definition,
            active_row: 0,
        }
    }

    pub fn definition(&self) -> &MappingDefinition {
        &self.definition
    }

    pub fn into_definition(self) -> MappingDefinition {
        self.definition
    }

    pub fn active_row(&self) -> usize {
        self.active_row
    }

    /// Makes `index` the active row, clamped to the last column.
    #[must_use]
    pub fn select(&self, index: usize) -> Self {
        Self {
            definition: self.definition.clone(),
            active_row: index.min(self.last_index()),
        }
    }

    /// Inserts a blank column right after `after_index` and makes it active.
    #[must_use]
    pub fn insert_column(&self, after_index: usize) -> Self {
        let mut definition = self.definition.clone();
        let at = after_index.saturating_add(1).min(definition.columns.len());
        definition.columns.insert(at, Column::blank());
        definition.renumber();
        Self {
            definition,
            active_row: at,
        }
    }

    /// Removes the column at `index`. The last remaining column is never removed.
    #[must_use]
    pub fn remove_column(&self, index: usize) -> Self {
        let count = self.definition.columns.len();
        if count <= 1 || index >= count {
            debug!(index, count, "column removal rejected");
            return self.clone();
        }
        let mut definition = self.definition.clone();
        definition.columns.remove(index);
        definition.renumber();
        let last = definition.columns.len() - 1;
        Self {
            definition,
            active_row: self.active_row.min(last),
        }
    }

    /// Swaps the column at `index` with its neighbour; the active row follows it.
    ///
    /// No-op at either boundary.
    #[must_use]
    pub fn move_column(&self, index: usize, direction: MoveDirection) -> Self {
        let count = self.definition.columns.len();
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1).filter(|target| *target < count),
        };
        let Some(target) = target.filter(|_| index < count) else {
            return self.clone();
        };
        let mut definition = self.definition.clone();
        definition.columns.swap(index, target);
        definition.renumber();
        Self {
            definition,
            active_row: target,
        }
    }

    /// Moves the active column.
    #[must_use]
    pub fn move_active(&self, direction: MoveDirection) -> Self {
        self.move_column(self.active_row, direction)
    }

    /// Updates one field from raw editor input.
    ///
    /// Source positions drop non-digit characters and an empty value becomes
    /// `0`. Labels are stored exactly as typed.
    #[must_use]
    pub fn set_field(&self, index: usize, field: ColumnField, raw: &str) -> Self {
        let mut definition = self.definition.clone();
        let Some(column) = definition.columns.get_mut(index) else {
            debug!(index, "edit of missing column ignored");
            return self.clone();
        };
        match field {
            ColumnField::LabelPrimary => column.label_primary = raw.to_string(),
            ColumnField::LabelSecondary => column.label_secondary = raw.to_string(),
            ColumnField::SourcePosition => column.source_position = SourcePosition::sanitize(raw),
        }
        Self {
            definition,
            active_row: self.active_row,
        }
    }

    /// The definition with placeholders substituted, ready to apply.
    pub fn commit(&self) -> MappingDefinition {
        self.definition.commit()
    }

    fn last_index(&self) -> usize {
        self.definition.columns.len().saturating_sub(1)
    }
}
