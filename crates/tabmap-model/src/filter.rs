//! Row filter conditions.
//!
//! A condition targets one column of a [`MappingDefinition`] and is evaluated
//! against the raw field at that column's source position. Text matching and
//! value-set membership are mutually exclusive: switching a condition to one
//! mode discards the other.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::definition::MappingDefinition;
use crate::error::{ModelError, Result};

/// Text input meaning "the raw cell is exactly empty".
pub const EMPTY_SENTINEL: &str = "空白";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatch {
    #[default]
    Equals,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FilterMode {
    /// Compare the raw cell against typed text.
    Text {
        value: String,
        matching: TextMatch,
        /// Invert the comparison ("not equal" / "does not contain").
        negated: bool,
    },
    /// Keep rows whose raw cell is one of the selected values.
    Values { selected: BTreeSet<String> },
}

impl Default for FilterMode {
    fn default() -> Self {
        Self::Text {
            value: String::new(),
            matching: TextMatch::Equals,
            negated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Zero-based index of the column in the definition.
    pub column_index: usize,
    pub mode: FilterMode,
}

impl FilterCondition {
    pub fn new(column_index: usize) -> Self {
        Self {
            column_index,
            mode: FilterMode::default(),
        }
    }

    pub fn text(column_index: usize, value: impl Into<String>, matching: TextMatch) -> Self {
        Self {
            column_index,
            mode: FilterMode::Text {
                value: value.into(),
                matching,
                negated: false,
            },
        }
    }

    pub fn values<I, S>(column_index: usize, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column_index,
            mode: FilterMode::Values {
                selected: selected.into_iter().map(Into::into).collect(),
            },
        }
    }

    #[must_use]
    pub fn negated(mut self, negated: bool) -> Self {
        if let FilterMode::Text { negated: flag, .. } = &mut self.mode {
            *flag = negated;
        }
        self
    }

    /// Switches to text mode, clearing any value selection.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        match &mut self.mode {
            FilterMode::Text { value, .. } => *value = text,
            FilterMode::Values { .. } => {
                self.mode = FilterMode::Text {
                    value: text,
                    matching: TextMatch::Equals,
                    negated: false,
                };
            }
        }
    }

    /// Switches to value-set mode, clearing any typed text.
    pub fn set_values<I, S>(&mut self, selected: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mode = FilterMode::Values {
            selected: selected.into_iter().map(Into::into).collect(),
        };
    }

    pub fn set_matching(&mut self, matching: TextMatch) {
        if let FilterMode::Text { matching: current, .. } = &mut self.mode {
            *current = matching;
        }
    }

    /// Flips the inverted flag. No-op in value-set mode.
    pub fn toggle_negated(&mut self) {
        if let FilterMode::Text { negated, .. } = &mut self.mode {
            *negated = !*negated;
        }
    }
}

/// The active conditions for one import, in the order they were added.
///
/// A column may carry several conditions; they all have to hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    conditions: Vec<FilterCondition>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty text condition for a column.
    ///
    /// Unmapped columns have no raw field to test.
    pub fn add(
        &mut self,
        definition: &MappingDefinition,
        column_index: usize,
    ) -> Result<&mut FilterCondition> {
        self.insert(definition, FilterCondition::new(column_index))
    }

    /// Appends a prepared condition after the same checks as [`FilterSet::add`].
    pub fn insert(
        &mut self,
        definition: &MappingDefinition,
        condition: FilterCondition,
    ) -> Result<&mut FilterCondition> {
        let column_index = condition.column_index;
        let column = definition
            .column(column_index)
            .ok_or(ModelError::ColumnOutOfRange {
                index: column_index,
                count: definition.column_count(),
            })?;
        if !column.source_position.is_mapped() {
            return Err(ModelError::UnmappedColumn {
                position: column.output_position,
            });
        }
        self.conditions.push(condition);
        let last = self.conditions.len() - 1;
        Ok(&mut self.conditions[last])
    }

    /// Removes the condition at `index` within the set.
    pub fn remove(&mut self, index: usize) -> Option<FilterCondition> {
        (index < self.conditions.len()).then(|| self.conditions.remove(index))
    }

    /// Mutable access to the condition at `index` within the set.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut FilterCondition> {
        self.conditions.get_mut(index)
    }

    /// Conditions that target the column at `column_index`.
    pub fn for_column(&self, column_index: usize) -> impl Iterator<Item = &FilterCondition> {
        self.conditions
            .iter()
            .filter(move |condition| condition.column_index == column_index)
    }

    pub fn contains(&self, column_index: usize) -> bool {
        self.for_column(column_index).next().is_some()
    }

    pub fn as_slice(&self) -> &[FilterCondition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn clear(&mut self) {
        self.conditions.clear();
    }
}
