//! Caller-owned workspace state.
//!
//! The engine functions are pure; this is the state a front end keeps between
//! them: the active definition, the editable output grid, the line ending of
//! the imported text and the active filters. Replacing a non-empty grid needs
//! explicit confirmation from the caller.

use tracing::{debug, info};

use tabmap_model::{
    Direction, ExportOptions, FilterSet, LineEnding, MappingDefinition, OutputGrid, RawRow,
    Result,
};

use crate::project::{header_line, project, render_rows, reverse_grid};

/// Result of a request that may discard the current grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionOutcome {
    /// The grid was rebuilt with this many rows.
    Applied { rows: usize },
    /// The caller declined to discard existing data; nothing changed.
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceSession {
    definition: MappingDefinition,
    temporary: bool,
    grid: OutputGrid,
    line_ending: LineEnding,
    filters: FilterSet,
}

impl WorkspaceSession {
    pub fn new(definition: MappingDefinition) -> Self {
        let grid = OutputGrid::new(definition.column_count());
        Self {
            definition,
            temporary: false,
            grid,
            line_ending: LineEnding::default(),
            filters: FilterSet::new(),
        }
    }

    pub fn definition(&self) -> &MappingDefinition {
        &self.definition
    }

    /// True while a user-applied definition overrides the fetched template.
    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    pub fn grid(&self) -> &OutputGrid {
        &self.grid
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterSet {
        &mut self.filters
    }

    /// Rebuilds the grid from `rows` with the current definition.
    pub fn apply<F>(&mut self, rows: &[RawRow], line_ending: LineEnding, confirm: F) -> ProjectionOutcome
    where
        F: FnOnce() -> bool,
    {
        if !self.confirm_discard(confirm) {
            return ProjectionOutcome::Cancelled;
        }
        self.reproject(rows, line_ending)
    }

    /// Commits `definition` as a temporary override and re-projects.
    pub fn apply_temporary_definition<F>(
        &mut self,
        definition: &MappingDefinition,
        rows: &[RawRow],
        line_ending: LineEnding,
        confirm: F,
    ) -> ProjectionOutcome
    where
        F: FnOnce() -> bool,
    {
        if !self.confirm_discard(confirm) {
            return ProjectionOutcome::Cancelled;
        }
        self.replace_definition(definition.commit(), true);
        self.reproject(rows, line_ending)
    }

    /// Drops a temporary override in favour of `definition` and re-projects.
    pub fn restore_definition<F>(
        &mut self,
        definition: MappingDefinition,
        rows: &[RawRow],
        line_ending: LineEnding,
        confirm: F,
    ) -> ProjectionOutcome
    where
        F: FnOnce() -> bool,
    {
        if !self.confirm_discard(confirm) {
            return ProjectionOutcome::Cancelled;
        }
        self.replace_definition(definition, false);
        self.reproject(rows, line_ending)
    }

    pub fn edit_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<()> {
        self.grid.set_cell(row, column, value)
    }

    /// Empties the grid. Returns `false` if the caller declined.
    pub fn clear<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !self.confirm_discard(confirm) {
            return false;
        }
        self.grid = OutputGrid::new(self.definition.column_count());
        true
    }

    /// Renders the grid as tab-separated text.
    ///
    /// Rows are written in output layout or reverse-projected to the raw
    /// layout. With a header, the text ends with a line ending.
    pub fn export(&self, options: ExportOptions) -> String {
        let body = match options.direction {
            Direction::Forward => render_rows(self.grid.rows(), self.line_ending),
            Direction::Reverse => {
                render_rows(&reverse_grid(&self.grid, &self.definition), self.line_ending)
            }
        };
        if !options.include_header {
            return body;
        }
        let newline = self.line_ending.as_str();
        let header = header_line(&self.definition, options.language, options.direction);
        format!("{header}{newline}{body}{newline}")
    }

    fn confirm_discard<F>(&self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if self.grid.is_empty() {
            return true;
        }
        let confirmed = confirm();
        if !confirmed {
            debug!(rows = self.grid.len(), "discarding output grid declined");
        }
        confirmed
    }

    fn replace_definition(&mut self, definition: MappingDefinition, temporary: bool) {
        self.definition = definition;
        self.temporary = temporary;
        // Filter conditions address columns by index and may no longer fit.
        self.filters.clear();
    }

    fn reproject(&mut self, rows: &[RawRow], line_ending: LineEnding) -> ProjectionOutcome {
        self.grid = project(rows, &self.definition);
        self.line_ending = line_ending;
        info!(
            source_id = %self.definition.source_id,
            rows = self.grid.len(),
            temporary = self.temporary,
            "output grid rebuilt"
        );
        ProjectionOutcome::Applied {
            rows: self.grid.len(),
        }
    }
}
