//! Mapping definitions.

use serde::{Deserialize, Serialize};

use crate::column::{Column, Language};

pub const DEFAULT_SOURCE_ID: &str = "unknown";
pub const DEFAULT_TABLE_LABEL: &str = "未知のテーブル";
pub const DEFAULT_TABLE_LABEL_SECONDARY: &str = "unknown-table";

fn default_source_id() -> String {
    DEFAULT_SOURCE_ID.to_string()
}

fn default_table_label() -> String {
    DEFAULT_TABLE_LABEL.to_string()
}

fn default_table_label_secondary() -> String {
    DEFAULT_TABLE_LABEL_SECONDARY.to_string()
}

/// Ordered output columns plus table metadata.
///
/// `columns[i].output_position == i + 1` holds for every definition built
/// through [`MappingDefinition::new`], [`MappingDefinition::with_defaults`] or
/// the editor. Field names accept the legacy template-store spelling
/// (`fileName`, `tableNameJ`, `tableName`) when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingDefinition {
    #[serde(default = "default_source_id", alias = "fileName")]
    pub source_id: String,
    #[serde(default = "default_table_label", alias = "tableNameJ")]
    pub table_label: String,
    #[serde(default = "default_table_label_secondary", alias = "tableName")]
    pub table_label_secondary: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Default for MappingDefinition {
    fn default() -> Self {
        Self {
            source_id: default_source_id(),
            table_label: default_table_label(),
            table_label_secondary: default_table_label_secondary(),
            columns: Vec::new(),
        }
    }
}

impl MappingDefinition {
    pub fn new(
        source_id: impl Into<String>,
        table_label: impl Into<String>,
        table_label_secondary: impl Into<String>,
        columns: Vec<Column>,
    ) -> Self {
        let mut definition = Self {
            source_id: source_id.into(),
            table_label: table_label.into(),
            table_label_secondary: table_label_secondary.into(),
            columns,
        };
        definition.renumber();
        definition
    }

    /// Fills empty metadata with defaults and renumbers output positions.
    ///
    /// Applied to every definition that arrives from outside the engine.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if self.source_id.is_empty() {
            self.source_id = default_source_id();
        }
        if self.table_label.is_empty() {
            self.table_label = default_table_label();
        }
        if self.table_label_secondary.is_empty() {
            self.table_label_secondary = default_table_label_secondary();
        }
        self.renumber();
        self
    }

    /// Rewrites output positions to `1..=N` in sequence order.
    pub fn renumber(&mut self) {
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.output_position = u32::try_from(index + 1).unwrap_or(u32::MAX);
        }
    }

    pub fn has_contiguous_positions(&self) -> bool {
        self.columns
            .iter()
            .enumerate()
            .all(|(index, column)| column.output_position as usize == index + 1)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Largest source position across all columns, `0` if none is mapped.
    pub fn max_source_position(&self) -> u32 {
        self.columns
            .iter()
            .map(|column| column.source_position.get())
            .max()
            .unwrap_or(0)
    }

    pub fn table_label(&self, language: Language) -> &str {
        match language {
            Language::Primary => &self.table_label,
            Language::Secondary => &self.table_label_secondary,
        }
    }

    /// Labels for every column in output order.
    pub fn labels(&self, language: Language) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.label(language))
            .collect()
    }

    /// Copy with every blank label replaced by its positional placeholder.
    ///
    /// This is the form a definition takes when it is applied to the pipeline.
    #[must_use]
    pub fn commit(&self) -> Self {
        let mut committed = self.clone();
        committed.renumber();
        committed.columns = committed.columns.iter().map(Column::committed).collect();
        committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_renumbers_columns() {
        let definition = MappingDefinition::new(
            "orders",
            "受注",
            "orders",
            vec![Column::new(2, "a", "a"), Column::new(1, "b", "b")],
        );
        let positions: Vec<u32> = definition
            .columns
            .iter()
            .map(|c| c.output_position)
            .collect();
        assert_eq!(positions, vec![1, 2]);
        assert!(definition.has_contiguous_positions());
    }

    #[test]
    fn max_source_position_defaults_to_zero() {
        let definition = MappingDefinition::new("x", "x", "x", vec![Column::blank()]);
        assert_eq!(definition.max_source_position(), 0);
    }

    #[test]
    fn with_defaults_fills_empty_metadata() {
        let definition = MappingDefinition {
            source_id: String::new(),
            table_label: String::new(),
            table_label_secondary: String::new(),
            columns: vec![],
        }
        .with_defaults();
        assert_eq!(definition.source_id, DEFAULT_SOURCE_ID);
        assert_eq!(definition.table_label, DEFAULT_TABLE_LABEL);
        assert_eq!(definition.table_label_secondary, DEFAULT_TABLE_LABEL_SECONDARY);
    }
}
